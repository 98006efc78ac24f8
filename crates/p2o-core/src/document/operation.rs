use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// HTTP method of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 7] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
        HttpMethod::Head,
        HttpMethod::Options,
    ];

    /// Parse a path item key. Matching is case-insensitive; any key that is
    /// not one of the seven operation methods yields `None`.
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(key))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for HttpMethod {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A path item: operations keyed by method, mixed with path-level keys such
/// as `parameters` or `summary`. Kept raw so that unknown keys survive export.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathItem(pub IndexMap<String, Value>);

impl PathItem {
    /// Operations in document order, skipping keys that are not methods.
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Value)> {
        self.0
            .iter()
            .filter_map(|(key, value)| HttpMethod::parse(key).map(|m| (m, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(HttpMethod::parse("get"), Some(HttpMethod::Get));
        assert_eq!(HttpMethod::parse("PATCH"), Some(HttpMethod::Patch));
        assert_eq!(HttpMethod::parse("Options"), Some(HttpMethod::Options));
    }

    #[test]
    fn test_parse_rejects_non_methods() {
        assert_eq!(HttpMethod::parse("parameters"), None);
        assert_eq!(HttpMethod::parse("trace"), None);
        assert_eq!(HttpMethod::parse("summary"), None);
        assert_eq!(HttpMethod::parse(""), None);
    }

    #[test]
    fn test_path_item_operations_keep_order() {
        let item: PathItem = serde_json::from_str(
            r#"{"post": {}, "parameters": [], "GET": {}, "delete": {}}"#,
        )
        .unwrap();
        let methods: Vec<HttpMethod> = item.operations().map(|(m, _)| m).collect();
        assert_eq!(
            methods,
            vec![HttpMethod::Post, HttpMethod::Get, HttpMethod::Delete]
        );
    }
}
