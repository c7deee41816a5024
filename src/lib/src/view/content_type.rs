use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::view::Sys;

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeResponse {
    pub sys: Sys,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub display_field: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldResponse>,
}

/// A content type field. Only the attributes a migration can set are kept.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct FieldResponse {
    pub id: String,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(rename = "type", default)]
    pub field_type: Option<Value>,
    #[serde(default)]
    pub link_type: Option<Value>,
    #[serde(default)]
    pub items: Option<Value>,
    #[serde(default)]
    pub localized: Option<Value>,
    #[serde(default)]
    pub required: Option<Value>,
    #[serde(default)]
    pub validations: Option<Value>,
    #[serde(default)]
    pub disabled: Option<Value>,
    #[serde(default)]
    pub omitted: Option<Value>,
    #[serde(default)]
    pub default_value: Option<Value>,
}

/// Body of `PUT /content_types/{id}`
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeNew {
    pub name: String,
    pub display_field: String,
    pub description: String,
    pub fields: Vec<Value>,
}
