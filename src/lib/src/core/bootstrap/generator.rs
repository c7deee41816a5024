//! Turns an introspected content type into the source of a migration script
//! that recreates it from scratch.
//!
//! Output is plain template rendering: two space indents, single quoted
//! strings and bare object keys wherever the key is an identifier, so
//! identical input always renders byte for byte the same text.
//!

use serde_json::{Map, Value};

use crate::model::{ContentTypeSchema, EditorInterfaceEntry, IntrospectedContentType};
use crate::util;

const INDENT: &str = "  ";
const CHAIN_INDENT: &str = "    ";

/// Drop every null valued key, recursively. Arrays are pruned element wise
/// and primitives pass through, `null` itself stays `null`.
pub fn prune(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(prune).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k.clone(), prune(v)))
                .collect::<Map<String, Value>>(),
        ),
        _ => value.clone(),
    }
}

/// False for values that would only produce a vacuous call: empty arrays,
/// empty objects, `false`, `0`, `""` and `null`.
pub fn is_meaningful(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Pruned props that survive [`is_meaningful`], order kept.
pub fn meaningful_props(props: &[(String, Value)]) -> Vec<(String, Value)> {
    props
        .iter()
        .map(|(key, value)| (key.clone(), prune(value)))
        .filter(|(_, value)| is_meaningful(value))
        .collect()
}

pub fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

fn js_key(key: &str) -> String {
    if util::str::is_js_identifier(key) {
        key.to_string()
    } else {
        js_string(key)
    }
}

/// A JSON value as a single line JavaScript literal.
pub fn js_literal(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => js_string(s),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(js_literal).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(map) if map.is_empty() => "{}".to_string(),
        Value::Object(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", js_key(k), js_literal(v)))
                .collect();
            format!("{{ {} }}", entries.join(", "))
        }
    }
}

/// Name of the local holding the content type inside `up`.
pub fn variable_name(content_type_id: &str) -> String {
    let ident = util::str::to_js_identifier(content_type_id);
    // `migration` is the parameter of `up`
    if ident == "migration" || util::str::is_js_reserved_word(&ident) {
        format!("{ident}ContentType")
    } else {
        ident
    }
}

pub fn change_editor_interface(variable: &str, entry: &EditorInterfaceEntry) -> String {
    let settings = entry
        .settings
        .as_ref()
        .map(prune)
        .filter(is_meaningful);
    match settings {
        Some(settings) => format!(
            "{variable}.changeEditorInterface({}, {}, {});",
            js_string(&entry.field_id),
            js_string(&entry.widget_id),
            js_literal(&settings)
        ),
        None => format!(
            "{variable}.changeEditorInterface({}, {});",
            js_string(&entry.field_id),
            js_string(&entry.widget_id)
        ),
    }
}

pub fn description(schema: &ContentTypeSchema) -> String {
    format!("Create content model for {}", schema.display_name())
}

fn push_chain(out: &mut String, props: &[(String, Value)]) {
    for (key, value) in meaningful_props(props) {
        out.push('\n');
        out.push_str(CHAIN_INDENT);
        out.push_str(&format!(".{key}({})", js_literal(&value)));
    }
    out.push_str(";\n");
}

/// Full script source for one content type.
pub fn render(content_type: &IntrospectedContentType) -> String {
    let schema = &content_type.schema;
    let variable = variable_name(&schema.id);

    let mut out = format!(
        "module.exports.description = {};\n\n",
        js_string(&description(schema))
    );

    out.push_str("module.exports.up = (migration) => {\n");
    out.push_str(&format!(
        "{INDENT}const {variable} = migration.createContentType({})",
        js_string(&schema.id)
    ));
    push_chain(&mut out, &schema.props());

    for field in &schema.fields {
        out.push('\n');
        out.push_str(&format!(
            "{INDENT}{variable}.createField({})",
            js_string(&field.id)
        ));
        push_chain(&mut out, &field.props);
    }

    if !content_type.editor_interface.is_empty() {
        out.push('\n');
        for entry in &content_type.editor_interface {
            out.push_str(INDENT);
            out.push_str(&change_editor_interface(&variable, entry));
            out.push('\n');
        }
    }
    out.push_str("};\n\n");

    out.push_str(&format!(
        "module.exports.down = migration => migration.deleteContentType({});\n",
        js_string(&schema.id)
    ));
    out
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use crate::core::bootstrap::generator;
    use crate::model::{ContentTypeSchema, EditorInterfaceEntry, Field, IntrospectedContentType};

    fn horse() -> IntrospectedContentType {
        IntrospectedContentType {
            schema: ContentTypeSchema {
                id: "horse".to_string(),
                name: Some("Horse".to_string()),
                display_field: Some("name".to_string()),
                description: Some("most awesome 4 legged animal".to_string()),
                fields: vec![
                    Field {
                        id: "unicorn".to_string(),
                        props: vec![("name".to_string(), json!("charlie"))],
                    },
                    Field {
                        id: "pegasus".to_string(),
                        props: vec![("name".to_string(), json!("twilight sparkle"))],
                    },
                ],
            },
            editor_interface: vec![
                EditorInterfaceEntry {
                    field_id: "unicornDestroyer".to_string(),
                    widget_id: "number".to_string(),
                    settings: None,
                },
                EditorInterfaceEntry {
                    field_id: "pegasusLauncher".to_string(),
                    widget_id: "radio".to_string(),
                    settings: Some(json!({ "parts": "button" })),
                },
            ],
        }
    }

    #[test]
    fn test_prune_removes_null_keys_recursively() {
        let value = json!([
            { "linkMimetypeGroup": ["image"] },
            { "assetImageDimensions": {
                "width": { "min": null, "max": 200 },
                "height": { "min": null, "max": 40 }
            }}
        ]);
        let expected = json!([
            { "linkMimetypeGroup": ["image"] },
            { "assetImageDimensions": {
                "width": { "max": 200 },
                "height": { "max": 40 }
            }}
        ]);

        assert_eq!(generator::prune(&value), expected);
        assert_eq!(generator::prune(&expected), expected);
        assert_eq!(generator::prune(&generator::prune(&value)), generator::prune(&value));
    }

    #[test]
    fn test_prune_passes_primitives_through() {
        let values = [
            json!(5),
            json!("5"),
            json!([5, 5, 5, 5, 5]),
            json!(["5", "5", "5"]),
            Value::Null,
        ];
        for value in values {
            assert_eq!(generator::prune(&value), value);
        }
    }

    #[test]
    fn test_meaningful_props_rejects_empty_and_falsy() {
        let props = vec![
            ("foo".to_string(), json!("bar")),
            ("horses".to_string(), json!(["unicorn, pegasus"])),
            ("peru".to_string(), json!({ "animal": "alpaca" })),
            ("empty array".to_string(), json!([])),
            ("empty object".to_string(), json!({})),
            ("false".to_string(), json!(false)),
            ("zero".to_string(), json!(0)),
            ("blank".to_string(), json!("")),
            ("nothing".to_string(), Value::Null),
            ("only nulls".to_string(), json!({ "min": null })),
        ];

        let kept = generator::meaningful_props(&props);
        assert_eq!(kept, props[..3].to_vec());
    }

    #[test]
    fn test_change_editor_interface_without_settings() {
        let entry = EditorInterfaceEntry {
            field_id: "unicornDestroyer".to_string(),
            widget_id: "number".to_string(),
            settings: None,
        };
        assert_eq!(
            generator::change_editor_interface("myModel", &entry),
            "myModel.changeEditorInterface('unicornDestroyer', 'number');"
        );
    }

    #[test]
    fn test_change_editor_interface_with_settings() {
        let entry = EditorInterfaceEntry {
            field_id: "pegasusLauncher".to_string(),
            widget_id: "radio".to_string(),
            settings: Some(json!({ "parts": "button" })),
        };
        assert_eq!(
            generator::change_editor_interface("myModel", &entry),
            "myModel.changeEditorInterface('pegasusLauncher', 'radio', { parts: 'button' });"
        );

        let empty = EditorInterfaceEntry {
            settings: Some(json!({})),
            ..entry
        };
        assert_eq!(
            generator::change_editor_interface("myModel", &empty),
            "myModel.changeEditorInterface('pegasusLauncher', 'radio');"
        );
    }

    #[test]
    fn test_js_literal_quotes_and_keys() {
        let value = json!({
            "in": ["it's", 1.5, true, { "has-dash": null }]
        });
        assert_eq!(
            generator::js_literal(&value),
            "{ in: ['it\\'s', 1.5, true, { 'has-dash': null }] }"
        );
        assert_eq!(
            generator::js_literal(&json!({ "helpText": "line\nbreak" })),
            "{ helpText: 'line\\nbreak' }"
        );
    }

    #[test]
    fn test_render_full_script() {
        let expected = "\
module.exports.description = 'Create content model for Horse';

module.exports.up = (migration) => {
  const horse = migration.createContentType('horse')
    .name('Horse')
    .displayField('name')
    .description('most awesome 4 legged animal');

  horse.createField('unicorn')
    .name('charlie');

  horse.createField('pegasus')
    .name('twilight sparkle');

  horse.changeEditorInterface('unicornDestroyer', 'number');
  horse.changeEditorInterface('pegasusLauncher', 'radio', { parts: 'button' });
};

module.exports.down = migration => migration.deleteContentType('horse');
";
        assert_eq!(generator::render(&horse()), expected);
        assert_eq!(generator::render(&horse()), generator::render(&horse()));
    }

    #[test]
    fn test_render_without_fields() {
        let mut content_type = horse();
        content_type.schema.fields.clear();
        content_type.schema.description = None;
        content_type.editor_interface.clear();

        let expected = "\
module.exports.description = 'Create content model for Horse';

module.exports.up = (migration) => {
  const horse = migration.createContentType('horse')
    .name('Horse')
    .displayField('name');
};

module.exports.down = migration => migration.deleteContentType('horse');
";
        assert_eq!(generator::render(&content_type), expected);
    }

    #[test]
    fn test_render_bare_field_when_all_props_pruned() {
        let mut content_type = horse();
        content_type.schema.fields = vec![Field {
            id: "mane".to_string(),
            props: vec![
                ("validations".to_string(), json!([])),
                ("localized".to_string(), json!(false)),
                ("defaultValue".to_string(), Value::Null),
            ],
        }];
        content_type.editor_interface.clear();

        let script = generator::render(&content_type);
        assert!(script.contains("\n  horse.createField('mane');\n"));
    }

    #[test]
    fn test_variable_name_for_awkward_ids() {
        assert_eq!(generator::variable_name("blog-post"), "blogPost");
        assert_eq!(generator::variable_name("migration"), "migrationContentType");
    }

    #[test]
    fn test_variable_name_for_reserved_words() {
        assert_eq!(generator::variable_name("default"), "defaultContentType");
        assert_eq!(generator::variable_name("class"), "classContentType");
        assert_eq!(generator::variable_name("new"), "newContentType");
        assert_eq!(generator::variable_name("import"), "importContentType");

        let mut content_type = horse();
        content_type.schema.id = "export".to_string();
        content_type.editor_interface.clear();
        let script = generator::render(&content_type);
        assert!(script.contains("  const exportContentType = migration.createContentType('export')"));
        assert!(script.contains("\n  exportContentType.createField('unicorn')"));
    }
}
