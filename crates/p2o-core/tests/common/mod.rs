#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde_json::json;
use tokio::net::TcpListener;

use p2o_core::{CollectionId, extract_collection_id};

pub const API_KEY: &str = "PMAK-test";
pub const PETSTORE: &str = include_str!("../fixtures/petstore.json");

/// Collection ids served by the mock: `aaaa` and the example collection
/// return structured output, `bbbb` the
/// petstore as a JSON string, `cccc` no output, `dddd` a document with
/// oddly typed info fields, `eeee` malformed output,
/// `f00d` a non-JSON body, anything else 404.
#[derive(Clone, Default)]
pub struct MockState {
    pub hits: Arc<AtomicUsize>,
}

async fn transformations(
    State(state): State<MockState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);

    if headers.get("x-api-key").and_then(|v| v.to_str().ok()) != Some(API_KEY) {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": "bad key"}))).into_response();
    }

    match id.as_str() {
        "aaaa" | "47373031-63ae07b7-57fa-478a-8b9b-585052fce3a6" => Json(json!({
            "output": {
                "openapi": "3.0.0",
                "info": {"title": "Demo"},
                "paths": {"/x": {"get": {"summary": "s"}}}
            }
        }))
        .into_response(),
        "bbbb" => Json(json!({ "output": PETSTORE })).into_response(),
        "cccc" => Json(json!({ "status": "ok" })).into_response(),
        "dddd" => Json(json!({
            "output": {
                "openapi": "3.0.0",
                "info": {"title": "Loose", "version": 1},
                "tags": {"a": 1},
                "paths": {"/x": {"get": {}}}
            }
        }))
        .into_response(),
        "eeee" => Json(json!({ "output": "{\"openapi\": " })).into_response(),
        "f00d" => (StatusCode::OK, "definitely not json").into_response(),
        _ => (StatusCode::NOT_FOUND, Json(json!({"error": "notFound"}))).into_response(),
    }
}

/// Serve a stand-in for the transformation endpoint on an ephemeral port.
pub async fn spawn_mock() -> (String, MockState) {
    let state = MockState::default();
    let app = Router::new()
        .route("/collections/{id}/transformations", get(transformations))
        .with_state(state.clone());

    let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    (format!("http://{addr}"), state)
}

impl MockState {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

pub fn id(raw: &str) -> CollectionId {
    extract_collection_id(&collection_url(raw)).unwrap()
}

pub fn collection_url(raw: &str) -> String {
    format!("https://api.postman.com/collections/{raw}")
}
