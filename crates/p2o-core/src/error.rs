use std::path::PathBuf;

use thiserror::Error;

use crate::extract::COLLECTION_URL_EXAMPLE;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml_ng::Error,
    },

    #[error("failed to load .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),
}

#[derive(Debug, Error)]
pub enum TransformError {
    #[error(
        "Postman API key is not configured. Set POSTMAN_API_KEY in the environment or a .env file."
    )]
    MissingApiKey,

    #[error("API request failed: {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("no OpenAPI specification returned from API")]
    MissingOutput,

    #[error("failed to decode OpenAPI specification: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("request to transformation service failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("please enter a Postman Collection API URL")]
    EmptyInput,

    #[error(
        "Postman API key is not configured. Set POSTMAN_API_KEY in the environment or a .env file."
    )]
    MissingApiKey,

    #[error(
        "invalid Postman Collection URL format, expected a URL like {}",
        COLLECTION_URL_EXAMPLE
    )]
    InvalidUrl,

    #[error("a conversion is already in progress")]
    Busy,

    #[error("no OpenAPI specification has been generated yet")]
    NoDocument,

    #[error(transparent)]
    Export(#[from] ExportError),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize specification: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard tool found (tried {0})")]
    Unavailable(String),

    #[error("clipboard tool {tool} failed: {source}")]
    Io {
        tool: &'static str,
        source: std::io::Error,
    },

    #[error("clipboard tool {tool} exited with {status}")]
    Failed {
        tool: &'static str,
        status: std::process::ExitStatus,
    },
}
