use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::view::Sys;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct EditorInterfaceResponse {
    #[serde(default)]
    pub sys: Sys,
    #[serde(default)]
    pub controls: Vec<ControlResponse>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ControlResponse {
    pub field_id: String,
    #[serde(default)]
    pub widget_id: Option<String>,
    #[serde(default)]
    pub settings: Option<Value>,
}
