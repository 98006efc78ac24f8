use p2o_core::document;
use p2o_core::export;
use p2o_core::session::Session;

const PETSTORE: &str = include_str!("fixtures/petstore.json");

#[test]
fn download_then_reload_is_identical() {
    let doc = document::from_json(PETSTORE).unwrap();
    let dir = tempfile::tempdir().unwrap();

    let path = export::download(&doc, dir.path()).unwrap();
    assert_eq!(
        path.file_name().unwrap().to_str(),
        Some("swagger-petstore-openapi-spec.json")
    );

    let reloaded = export::load(&path).unwrap();
    assert_eq!(reloaded, doc);
}

#[test]
fn export_preserves_unmodelled_content() {
    let doc = document::from_json(PETSTORE).unwrap();
    let json = export::to_pretty_json(&doc).unwrap();

    let original: serde_json::Value = serde_json::from_str(PETSTORE).unwrap();
    let exported: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(exported, original);

    // Document key order is kept
    let keys: Vec<&String> = exported.as_object().unwrap().keys().collect();
    assert_eq!(
        keys,
        vec![
            "openapi",
            "info",
            "servers",
            "paths",
            "components",
            "security",
            "tags"
        ]
    );
}

#[test]
fn download_creates_missing_directory() {
    let doc = document::from_json(r#"{"openapi": "3.0.0"}"#).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("specs").join("v1");

    let path = export::download(&doc, &nested).unwrap();
    assert_eq!(path, nested.join("api-openapi-spec.json"));
    assert!(path.exists());
}

#[test]
fn load_reports_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ nope").unwrap();

    let err = export::load(&path).unwrap_err();
    assert!(err.to_string().starts_with("failed to parse"));
}

#[test]
fn session_download_requires_document() {
    let session = Session::new();
    let dir = tempfile::tempdir().unwrap();
    assert!(session.download(dir.path()).is_err());
}
