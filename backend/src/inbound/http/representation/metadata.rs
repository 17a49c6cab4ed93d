//! `OPTIONS` metadata built from a field table.

use serde_json::{Map, Value, json};

use super::fields::{FieldDefault, FieldDescriptor, FieldTable};

const JSON_MEDIA_TYPE: &str = "application/json";

/// Describes one endpoint for `OPTIONS` requests.
#[derive(Debug, Clone, Copy)]
pub struct EndpointMetadata {
    pub name: &'static str,
    pub description: &'static str,
    pub fields: FieldTable,
}

impl EndpointMetadata {
    /// Metadata document. `actions.POST` is only present when `can_create`.
    pub fn render(&self, can_create: bool) -> Value {
        let mut document = Map::new();
        document.insert("name".into(), json!(self.name));
        document.insert("description".into(), json!(self.description));
        document.insert("renders".into(), json!([JSON_MEDIA_TYPE]));
        document.insert("parses".into(), json!([JSON_MEDIA_TYPE]));
        if can_create {
            let post: Map<String, Value> = self
                .fields
                .fields()
                .iter()
                .map(|field| (field.name.to_owned(), describe(field)))
                .collect();
            document.insert("actions".into(), json!({ "POST": post }));
        }
        Value::Object(document)
    }
}

fn describe(field: &FieldDescriptor) -> Value {
    let mut entry = Map::new();
    entry.insert("type".into(), json!(field.kind.type_name()));
    entry.insert("required".into(), json!(field.required));
    entry.insert("read_only".into(), json!(field.read_only));
    entry.insert("label".into(), json!(field.label));
    match field.default {
        Some(FieldDefault::Text(value)) => {
            entry.insert("default".into(), json!(value));
        }
        Some(FieldDefault::Flag(value)) => {
            entry.insert("default".into(), json!(value));
        }
        None => {}
    }
    if let Some(max) = field.max_length {
        entry.insert("max_length".into(), json!(max));
    }
    if let Some(choices) = field.choices() {
        let choices: Vec<Value> = choices
            .iter()
            .map(|(value, label)| json!({ "value": value, "display_name": label }))
            .collect();
        entry.insert("choices".into(), Value::Array(choices));
    }
    Value::Object(entry)
}
