use serde_json::Value;

use crate::view::{ContentTypeResponse, ControlResponse, FieldResponse};

/// A content type as introspected from the space. Never mutated, only
/// turned into a migration script.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentTypeSchema {
    pub id: String,
    pub name: Option<String>,
    pub display_field: Option<String>,
    pub description: Option<String>,
    pub fields: Vec<Field>,
}

/// A field split into its id and the ordered attributes a migration sets.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub id: String,
    pub props: Vec<(String, Value)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorInterfaceEntry {
    pub field_id: String,
    pub widget_id: String,
    pub settings: Option<Value>,
}

/// A schema together with the widget configuration of its fields.
#[derive(Debug, Clone, PartialEq)]
pub struct IntrospectedContentType {
    pub schema: ContentTypeSchema,
    pub editor_interface: Vec<EditorInterfaceEntry>,
}

fn opt_string(value: &Option<String>) -> Value {
    match value {
        Some(s) => Value::String(s.clone()),
        None => Value::Null,
    }
}

impl ContentTypeSchema {
    /// Content type level attributes in the order they are chained.
    pub fn props(&self) -> Vec<(String, Value)> {
        vec![
            (String::from("name"), opt_string(&self.name)),
            (String::from("displayField"), opt_string(&self.display_field)),
            (String::from("description"), opt_string(&self.description)),
        ]
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

impl From<ContentTypeResponse> for ContentTypeSchema {
    fn from(content_type: ContentTypeResponse) -> ContentTypeSchema {
        ContentTypeSchema {
            id: content_type.sys.id,
            name: content_type.name,
            display_field: content_type.display_field,
            description: content_type.description,
            fields: content_type.fields.into_iter().map(Field::from).collect(),
        }
    }
}

impl From<FieldResponse> for Field {
    fn from(field: FieldResponse) -> Field {
        let declared: [(&str, Option<Value>); 10] = [
            ("name", field.name),
            ("type", field.field_type),
            ("linkType", field.link_type),
            ("items", field.items),
            ("localized", field.localized),
            ("required", field.required),
            ("validations", field.validations),
            ("disabled", field.disabled),
            ("omitted", field.omitted),
            ("defaultValue", field.default_value),
        ];
        Field {
            id: field.id,
            props: declared
                .into_iter()
                .filter_map(|(key, value)| value.map(|v| (key.to_string(), v)))
                .collect(),
        }
    }
}

impl EditorInterfaceEntry {
    /// Controls without a widget use the platform default and carry nothing
    /// worth recreating.
    pub fn from_control(control: ControlResponse) -> Option<EditorInterfaceEntry> {
        let widget_id = control.widget_id?;
        Some(EditorInterfaceEntry {
            field_id: control.field_id,
            widget_id,
            settings: control.settings,
        })
    }
}
