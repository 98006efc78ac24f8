pub mod views;

use minijinja::Environment;
use thiserror::Error;

use p2o_core::analyze::Analysis;
use p2o_core::session::{Phase, Session, Tab};
use p2o_core::{SpecDocument, export};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error(transparent)]
    Export(#[from] p2o_core::error::ExportError),
}

/// Render one tab of a document.
pub fn render_tab(doc: &SpecDocument, tab: Tab) -> Result<String, RenderError> {
    let analysis = Analysis::of(doc);
    log::trace!(
        "rendering {tab} with {} endpoints",
        analysis.endpoints.len()
    );

    match tab {
        Tab::Overview => views::overview::render(doc, &analysis),
        Tab::Endpoints => views::endpoints::render(&analysis),
        Tab::Models => views::models::render(&analysis),
        Tab::Raw => Ok(export::to_pretty_json(doc)?),
    }
}

/// Render what the session currently shows: the error if there is one,
/// otherwise the active tab of the stored document.
pub fn render_session(session: &Session) -> Result<String, RenderError> {
    if let Some(error) = session.error() {
        return Ok(format!("error: {error}"));
    }
    match (session.phase(), session.document()) {
        (Phase::Loading, _) => Ok("Processing...".to_string()),
        (_, Some(doc)) => render_tab(doc, session.tab()),
        (_, None) => Ok(
            "Paste a Postman Collection API URL to generate an OpenAPI specification.".to_string(),
        ),
    }
}

/// Tab bar with the active tab bracketed and the endpoint count shown.
pub fn render_tab_bar(doc: &SpecDocument, active: Tab) -> String {
    let endpoint_count = p2o_core::analyze::endpoints(doc).len();
    Tab::ALL
        .iter()
        .map(|tab| {
            let label = match tab {
                Tab::Endpoints => format!("Endpoints ({endpoint_count})"),
                Tab::Overview => "Overview".to_string(),
                Tab::Models => "Models".to_string(),
                Tab::Raw => "Raw JSON".to_string(),
            };
            if *tab == active {
                format!("[{label}]")
            } else {
                format!(" {label} ")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env
}
