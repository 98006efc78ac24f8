pub mod analyze;
pub mod client;
pub mod clipboard;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod extract;
pub mod session;

pub use client::{PostmanClient, Transformer};
pub use document::SpecDocument;
pub use extract::{CollectionId, extract_collection_id};
pub use session::{Session, Tab};
