use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::client::Transformer;
use crate::clipboard;
use crate::document::SpecDocument;
use crate::error::{SessionError, TransformError};
use crate::export;
use crate::extract::{CollectionId, extract_collection_id};

/// View over the current document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Overview,
    Endpoints,
    Models,
    Raw,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::Endpoints, Tab::Models, Tab::Raw];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Endpoints => "endpoints",
            Tab::Models => "models",
            Tab::Raw => "raw",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown tab {s:?} (expected overview, endpoints, models or raw)")
            })
    }
}

/// Where the session is in its submit cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Displaying,
    Error,
}

/// Ticket for an accepted submission. Completing with a ticket that is no
/// longer the latest one is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: CollectionId,
    seq: u64,
}

/// State of one user session: the current document, the current error, and
/// the selected tab. Every user action goes through a method on this value.
#[derive(Debug, Clone, Default)]
pub struct Session {
    phase: Phase,
    document: Option<SpecDocument>,
    error: Option<String>,
    tab: Tab,
    seq: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn document(&self) -> Option<&SpecDocument> {
        self.document.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Validate a submission and enter the loading phase.
    ///
    /// Empty input and a missing API key are reported without touching the
    /// stored document. Once both checks pass the stored document is
    /// cleared, so an unrecognised URL or a pending request shows no stale
    /// result. On success the returned ticket must be passed to
    /// [`Session::complete`] with the transformation result.
    pub fn begin_submit(
        &mut self,
        input: &str,
        api_key: Option<&str>,
    ) -> Result<Submission, SessionError> {
        if self.is_loading() {
            return Err(SessionError::Busy);
        }

        let id = self.validate(input, api_key).inspect_err(|e| {
            self.error = Some(e.to_string());
            self.phase = Phase::Error;
        })?;

        log::debug!("extracted collection id {id}");
        self.seq += 1;
        self.phase = Phase::Loading;
        self.error = None;
        Ok(Submission { id, seq: self.seq })
    }

    fn validate(
        &mut self,
        input: &str,
        api_key: Option<&str>,
    ) -> Result<CollectionId, SessionError> {
        if input.trim().is_empty() {
            return Err(SessionError::EmptyInput);
        }
        if api_key.is_none_or(|key| key.trim().is_empty()) {
            return Err(SessionError::MissingApiKey);
        }
        self.document = None;
        extract_collection_id(input).ok_or(SessionError::InvalidUrl)
    }

    /// Apply the outcome of a transformation. Returns `false` if the ticket
    /// is stale and the result was dropped.
    pub fn complete(
        &mut self,
        submission: Submission,
        result: Result<SpecDocument, TransformError>,
    ) -> bool {
        if submission.seq != self.seq || !self.is_loading() {
            log::debug!("dropping stale result for {}", submission.id);
            return false;
        }

        match result {
            Ok(doc) => {
                self.document = Some(doc);
                self.error = None;
                self.tab = Tab::Overview;
                self.phase = Phase::Displaying;
            }
            Err(e) => {
                log::error!("error processing collection {}: {e}", submission.id);
                self.document = None;
                self.error = Some(e.to_string());
                self.phase = Phase::Error;
            }
        }
        true
    }

    /// Run one full submission: validate, transform, apply.
    pub async fn submit<T: Transformer>(
        &mut self,
        input: &str,
        api_key: Option<&str>,
        transformer: &T,
    ) -> Result<(), SessionError> {
        let submission = self.begin_submit(input, api_key)?;
        let result = transformer.transform(&submission.id).await;
        self.complete(submission, result);
        Ok(())
    }

    fn require_document(&self) -> Result<&SpecDocument, SessionError> {
        self.document.as_ref().ok_or(SessionError::NoDocument)
    }

    /// The stored document as indented JSON.
    pub fn export_json(&self) -> Result<String, SessionError> {
        Ok(export::to_pretty_json(self.require_document()?)?)
    }

    /// Write the stored document to `dir` and return the file path.
    pub fn download(&self, dir: &Path) -> Result<PathBuf, SessionError> {
        Ok(export::download(self.require_document()?, dir)?)
    }

    /// Copy the stored document to the system clipboard.
    ///
    /// Clipboard failures are logged and reported as `Ok(false)`; they never
    /// change the session.
    pub fn copy_to_clipboard(&self) -> Result<bool, SessionError> {
        let text = self.export_json()?;
        match clipboard::copy_to_clipboard(&text) {
            Ok(tool) => {
                log::debug!("copied {} bytes with {tool}", text.len());
                Ok(true)
            }
            Err(e) => {
                log::warn!("failed to copy: {e}");
                Ok(false)
            }
        }
    }
}
