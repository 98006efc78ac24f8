use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::operation::PathItem;

/// Info object describing the API. Every field is optional because the
/// transformation service does not guarantee any of them. The displayed
/// fields are kept as raw values so that an unexpected type is shown as
/// missing instead of rejecting the document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Info {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,

    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Components block. Only the named schemas are interpreted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Components {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schemas: Option<IndexMap<String, Value>>,

    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// An OpenAPI document as returned by the transformation service.
///
/// The shape is defined externally and only partially consumed, so every
/// field is optional and any key not modelled here is kept in `extra` in its
/// original position relative to the other unknown keys.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpecDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openapi: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<Info>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub servers: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<IndexMap<String, PathItem>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value>,

    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl SpecDocument {
    pub fn openapi(&self) -> Option<&str> {
        self.openapi.as_ref()?.as_str()
    }

    pub fn title(&self) -> Option<&str> {
        self.info.as_ref()?.title.as_ref()?.as_str()
    }

    pub fn version(&self) -> Option<&str> {
        self.info.as_ref()?.version.as_ref()?.as_str()
    }

    /// The version as display text. Numeric versions such as `1` or `2.5`
    /// are shown as written.
    pub fn version_text(&self) -> Option<String> {
        match self.info.as_ref()?.version.as_ref()? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.info.as_ref()?.description.as_ref()?.as_str()
    }

    /// Number of paths, treating an absent `paths` block as empty.
    pub fn path_count(&self) -> usize {
        self.paths.as_ref().map_or(0, IndexMap::len)
    }

    pub fn server_count(&self) -> usize {
        array_len(self.servers.as_ref())
    }

    pub fn security_count(&self) -> usize {
        array_len(self.security.as_ref())
    }
}

/// Length of a value that should be an array; anything else counts as empty.
fn array_len(value: Option<&Value>) -> usize {
    value.and_then(Value::as_array).map_or(0, Vec::len)
}
