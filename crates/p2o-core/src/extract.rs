use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Example of a "Share via API" collection URL.
pub const COLLECTION_URL_EXAMPLE: &str =
    "https://api.postman.com/collections/47373031-63ae07b7-57fa-478a-8b9b-585052fce3a6";

static COLLECTION_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)https://api\.postman\.com/collections/([a-f0-9-]+)")
        .expect("collection URL pattern should compile")
});

/// Identifier of a Postman Collection, as captured from its API URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionId(String);

impl CollectionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the collection identifier from a Postman Collection API URL.
///
/// The match may appear anywhere in the input, so trailing segments such as
/// `/transformations` or a query string are ignored. Anything that does not
/// contain the pattern is a non-match, never an error.
pub fn extract_collection_id(input: &str) -> Option<CollectionId> {
    COLLECTION_URL
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| CollectionId(m.as_str().to_string()))
}
