use minijinja::context;

use p2o_core::SpecDocument;
use p2o_core::analyze::Analysis;

use super::rows;
use crate::{RenderError, environment};

/// API information, per-method and per-tag counts.
pub fn render(doc: &SpecDocument, analysis: &Analysis) -> Result<String, RenderError> {
    let mut env = environment();
    env.add_template(
        "overview.txt.j2",
        include_str!("../../templates/overview.txt.j2"),
    )?;
    let tmpl = env.get_template("overview.txt.j2")?;

    let methods = rows(
        analysis
            .method_stats
            .iter()
            .map(|(method, count)| (method.as_str(), *count)),
    );
    let tags = rows(
        analysis
            .tag_stats
            .iter()
            .map(|(tag, count)| (tag.as_str(), *count)),
    );

    Ok(tmpl.render(context! {
        title => doc.title().filter(|t| !t.is_empty()).unwrap_or("N/A"),
        version => doc
            .version_text()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "N/A".to_string()),
        description => doc
            .description()
            .filter(|d| !d.is_empty())
            .unwrap_or("No description provided"),
        openapi => doc.openapi().unwrap_or("N/A"),
        server_count => doc.server_count(),
        endpoint_count => analysis.endpoints.len(),
        model_count => analysis.models.len(),
        methods => methods,
        tags => tags,
        security_count => doc.security_count(),
    })?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_json(json: &str) -> String {
        let doc: SpecDocument = serde_json::from_str(json).unwrap();
        render(&doc, &Analysis::of(&doc)).unwrap()
    }

    #[test]
    fn test_fallbacks_for_missing_info() {
        let text = render_json(r#"{"openapi": "3.0.0"}"#);
        assert!(text.contains("Title:            N/A"));
        assert!(text.contains("Version:          N/A"));
        assert!(text.contains("Description:      No description provided"));
        assert!(text.contains("OpenAPI Version:  3.0.0"));
        assert!(text.contains("  (none)"));
        assert!(!text.contains("Tags"));
        assert!(!text.contains("Security"));
    }

    #[test]
    fn test_counts() {
        let text = render_json(
            r#"{
                "openapi": "3.0.3",
                "info": {"title": "Demo", "version": "2.1"},
                "paths": {
                    "/a": {"get": {"tags": ["x"]}, "delete": {"tags": ["x", "y"]}},
                    "/b": {"get": {}}
                },
                "security": [{"key": []}]
            }"#,
        );
        assert!(text.contains("Title:            Demo"));
        assert!(text.contains("Endpoints:        3"));
        assert!(text.contains("  GET    2\n"));
        assert!(text.contains("  DELETE 1"));
        assert!(text.contains("  x 2\n  y 1"));
        assert!(text.contains("Security schemes defined: 1"));
    }

    #[test]
    fn test_numeric_version_is_shown() {
        let text = render_json(r#"{"openapi": "3.0.0", "info": {"title": "X", "version": 1}}"#);
        assert!(text.contains("Version:          1\n"));
    }
}
