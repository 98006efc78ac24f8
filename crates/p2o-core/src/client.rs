use std::future::Future;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::Value;

use crate::config::Config;
use crate::document::{self, SpecDocument};
use crate::error::TransformError;
use crate::extract::CollectionId;

const API_KEY_HEADER: &str = "x-api-key";

/// Converts a Postman Collection into an OpenAPI document.
pub trait Transformer {
    fn transform(
        &self,
        id: &CollectionId,
    ) -> impl Future<Output = Result<SpecDocument, TransformError>> + Send;
}

/// Client for Postman's collection transformation endpoint.
#[derive(Debug, Clone)]
pub struct PostmanClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PostmanClient {
    /// Create a client. Fails before any network activity if the key is
    /// absent or blank.
    pub fn new(api_key: Option<&str>, base_url: &str) -> Result<Self, TransformError> {
        let api_key = api_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(TransformError::MissingApiKey)?;

        Ok(Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, TransformError> {
        Self::new(config.api_key(), &config.base_url)
    }

    /// URL of the transformation endpoint for a collection.
    pub fn transformation_url(&self, id: &CollectionId) -> String {
        format!("{}/collections/{}/transformations", self.base_url, id)
    }

    fn headers(&self) -> Result<HeaderMap, TransformError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let key = HeaderValue::from_str(&self.api_key).map_err(|_| TransformError::MissingApiKey)?;
        headers.insert(API_KEY_HEADER, key);
        Ok(headers)
    }

    async fn fetch(&self, id: &CollectionId) -> Result<SpecDocument, TransformError> {
        let url = self.transformation_url(id);
        log::debug!("requesting transformation: {url}");

        let response = self.http.get(&url).headers(self.headers()?).send().await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("transformation request for {id} failed with {status}");
            return Err(TransformError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body: Value = response.json().await?;
        let doc = decode_transformation(body)?;
        log::info!(
            "received OpenAPI {} document with {} paths",
            doc.openapi().unwrap_or("?"),
            doc.path_count()
        );
        Ok(doc)
    }
}

impl Transformer for PostmanClient {
    fn transform(
        &self,
        id: &CollectionId,
    ) -> impl Future<Output = Result<SpecDocument, TransformError>> + Send {
        self.fetch(id)
    }
}

/// Pull the OpenAPI document out of a transformation response body.
///
/// `output` may hold the document itself or its JSON text. A missing, null,
/// `false`, zero or empty `output` means the service produced nothing.
pub fn decode_transformation(body: Value) -> Result<SpecDocument, TransformError> {
    let output = match body {
        Value::Object(mut map) => map.remove("output"),
        _ => None,
    };

    match output {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Err(TransformError::MissingOutput),
        Some(Value::String(text)) if text.is_empty() => Err(TransformError::MissingOutput),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Err(TransformError::MissingOutput),
        Some(Value::String(text)) => Ok(document::from_json(&text)?),
        Some(value) => Ok(document::from_value(value)?),
    }
}
