pub mod operation;
pub mod spec;

pub use operation::{HttpMethod, PathItem};
pub use spec::{Components, Info, SpecDocument};

/// Parse a specification document from JSON text.
pub fn from_json(input: &str) -> Result<SpecDocument, serde_json::Error> {
    serde_json::from_str(input)
}

/// Parse a specification document from an already decoded JSON value.
pub fn from_value(value: serde_json::Value) -> Result<SpecDocument, serde_json::Error> {
    serde_json::from_value(value)
}
