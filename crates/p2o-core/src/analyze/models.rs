use std::sync::LazyLock;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::document::SpecDocument;

static NO_MODELS: LazyLock<IndexMap<String, Value>> = LazyLock::new(IndexMap::new);

/// Named schema definitions (`components.schemas`), or an empty map.
pub fn models(doc: &SpecDocument) -> &IndexMap<String, Value> {
    doc.components
        .as_ref()
        .and_then(|c| c.schemas.as_ref())
        .unwrap_or(&NO_MODELS)
}

/// Short description of one named schema for listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSummary {
    pub name: String,
    pub kind: String,
    pub property_count: usize,
}

impl ModelSummary {
    pub fn new(name: &str, schema: &Value) -> Self {
        Self {
            name: name.to_string(),
            kind: schema_kind(schema),
            property_count: schema
                .get("properties")
                .and_then(Value::as_object)
                .map_or(0, |props| props.len()),
        }
    }
}

/// Summarize every named schema, in document order.
pub fn model_summaries(doc: &SpecDocument) -> Vec<ModelSummary> {
    models(doc)
        .iter()
        .map(|(name, schema)| ModelSummary::new(name, schema))
        .collect()
}

fn schema_kind(schema: &Value) -> String {
    if let Some(ty) = schema.get("type") {
        return match ty {
            Value::String(s) => s.clone(),
            // 3.1 style `type: [string, "null"]`
            Value::Array(types) => types
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(" | "),
            _ => "unknown".to_string(),
        };
    }
    for key in ["$ref", "allOf", "oneOf", "anyOf", "enum"] {
        if schema.get(key).is_some() {
            return key.trim_start_matches('$').to_string();
        }
    }
    if schema.get("properties").is_some() {
        return "object".to_string();
    }
    "unknown".to_string()
}
