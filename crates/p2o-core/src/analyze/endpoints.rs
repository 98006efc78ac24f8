use serde::Serialize;
use serde_json::Value;

use crate::document::{HttpMethod, SpecDocument};

/// One operation of the document: a method on a path plus its metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Endpoint {
    pub path: String,
    pub method: HttpMethod,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub parameter_count: usize,
    /// Passed through uninterpreted.
    pub responses: Option<Value>,
}

impl Endpoint {
    fn from_operation(path: &str, method: HttpMethod, operation: &Value) -> Self {
        let text = |key: &str| {
            operation
                .get(key)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        let tags = operation
            .get("tags")
            .and_then(Value::as_array)
            .map(|tags| {
                tags.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let parameter_count = operation
            .get("parameters")
            .and_then(Value::as_array)
            .map_or(0, Vec::len);

        Self {
            path: path.to_string(),
            method,
            summary: text("summary"),
            description: text("description"),
            tags,
            parameter_count,
            responses: operation.get("responses").cloned(),
        }
    }
}

/// List every operation in document order. Keys of a path item that are not
/// HTTP methods (path-level `parameters`, `summary`, ...) are skipped.
pub fn endpoints(doc: &SpecDocument) -> Vec<Endpoint> {
    let Some(paths) = doc.paths.as_ref() else {
        return Vec::new();
    };

    paths
        .iter()
        .flat_map(|(path, item)| {
            item.operations()
                .map(move |(method, op)| Endpoint::from_operation(path, method, op))
        })
        .collect()
}
