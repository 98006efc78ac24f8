pub mod endpoints;
pub mod models;
pub mod stats;

pub use endpoints::{Endpoint, endpoints};
pub use models::{ModelSummary, model_summaries, models};
pub use stats::{MethodStats, TagStats, method_stats, tag_stats};

use crate::document::SpecDocument;

/// Everything derived from a document for display. Built from scratch on
/// every render; nothing is cached between documents.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub endpoints: Vec<Endpoint>,
    pub method_stats: MethodStats,
    pub tag_stats: TagStats,
    pub models: Vec<ModelSummary>,
}

impl Analysis {
    pub fn of(doc: &SpecDocument) -> Self {
        let endpoints = endpoints(doc);
        let method_stats = method_stats(&endpoints);
        let tag_stats = tag_stats(&endpoints);
        Self {
            endpoints,
            method_stats,
            tag_stats,
            models: model_summaries(doc),
        }
    }
}
