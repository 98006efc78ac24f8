use p2o_core::analyze::{self, Analysis};
use p2o_core::document::{self, HttpMethod};

const PETSTORE: &str = include_str!("fixtures/petstore.json");

#[test]
fn analyze_petstore_endpoints() {
    let doc = document::from_json(PETSTORE).expect("should parse petstore");
    let endpoints = analyze::endpoints(&doc);

    // Path-level `parameters` is not an operation
    assert_eq!(endpoints.len(), 5);

    let listed: Vec<(&str, &str)> = endpoints
        .iter()
        .map(|ep| (ep.method.as_str(), ep.path.as_str()))
        .collect();
    assert_eq!(
        listed,
        vec![
            ("GET", "/pets"),
            ("POST", "/pets"),
            ("GET", "/pets/{petId}"),
            ("DELETE", "/pets/{petId}"),
            ("GET", "/store/inventory"),
        ]
    );

    let list_pets = &endpoints[0];
    assert_eq!(list_pets.summary.as_deref(), Some("List all pets"));
    assert_eq!(
        list_pets.description.as_deref(),
        Some("Returns every pet in the store.")
    );
    assert_eq!(list_pets.parameter_count, 1);
    assert_eq!(endpoints[1].parameter_count, 0);
}

#[test]
fn analyze_petstore_statistics() {
    let doc = document::from_json(PETSTORE).unwrap();
    let analysis = Analysis::of(&doc);

    assert_eq!(
        analysis.method_stats,
        vec![
            (HttpMethod::Get, 3),
            (HttpMethod::Post, 1),
            (HttpMethod::Delete, 1)
        ]
    );

    let tags: Vec<(&str, usize)> = analysis
        .tag_stats
        .iter()
        .map(|(tag, count)| (tag.as_str(), *count))
        .collect();
    assert_eq!(
        tags,
        vec![("pets", 3), ("lookup", 1), ("admin", 1), ("store", 1)]
    );

    for pair in analysis.tag_stats.windows(2) {
        assert!(pair[0].1 >= pair[1].1, "tag stats must be descending");
    }
}

#[test]
fn analyze_petstore_models() {
    let doc = document::from_json(PETSTORE).unwrap();

    let models = analyze::models(&doc);
    let names: Vec<&str> = models.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["Pet", "Pets", "Error"]);

    let analysis = Analysis::of(&doc);
    assert_eq!(analysis.models[0].kind, "object");
    assert_eq!(analysis.models[0].property_count, 3);
    assert_eq!(analysis.models[1].kind, "array");
}

#[test]
fn analyze_document_without_paths() {
    let doc = document::from_json(r#"{"openapi": "3.0.0", "info": {"title": "Empty"}}"#).unwrap();
    let analysis = Analysis::of(&doc);

    assert!(analysis.endpoints.is_empty());
    assert!(analysis.method_stats.is_empty());
    assert!(analysis.tag_stats.is_empty());
    assert!(analysis.models.is_empty());
}

#[test]
fn analyze_excludes_path_level_keys() {
    let doc = document::from_json(
        r#"{
            "paths": {
                "/things": {
                    "get": {"summary": "list"},
                    "post": {"summary": "create"},
                    "parameters": [{"name": "q", "in": "query"}]
                }
            }
        }"#,
    )
    .unwrap();

    let endpoints = analyze::endpoints(&doc);
    let methods: Vec<HttpMethod> = endpoints.iter().map(|ep| ep.method).collect();
    assert_eq!(methods, vec![HttpMethod::Get, HttpMethod::Post]);
}

#[test]
fn analyze_tag_counts_example() {
    // A:3, B:5, C:1 spread over operations in encounter order A, B, C
    let mut paths = serde_json::Map::new();
    let mut n = 0;
    for (tag, count) in [("A", 3), ("B", 5), ("C", 1)] {
        for _ in 0..count {
            n += 1;
            paths.insert(
                format!("/op{n}"),
                serde_json::json!({"get": {"tags": [tag]}}),
            );
        }
    }
    let doc = document::from_value(serde_json::json!({ "paths": paths })).unwrap();

    let endpoints = analyze::endpoints(&doc);
    assert_eq!(endpoints.len(), 9);
    assert_eq!(
        analyze::tag_stats(&endpoints),
        vec![
            ("B".to_string(), 5),
            ("A".to_string(), 3),
            ("C".to_string(), 1)
        ]
    );
}
