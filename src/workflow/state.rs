//! Workflow-owned display state and result types.

use serde::Serialize;

/// What the display surface renders: the last submitted topic, the poem on
/// display and whether a submission is still being resolved.
///
/// `poem` is cleared when a submission starts and assigned exactly once when
/// it settles; `is_loading` is true strictly in between.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowState {
    pub topic: String,
    pub poem: String,
    pub is_loading: bool,
}

/// Where a displayed poem came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoemSource {
    /// Returned by the remote generation service.
    Remote,
    /// Served from the curated anthology.
    Curated,
    /// Synthesized from the generic verse template.
    Improvised,
}

impl PoemSource {
    pub fn label(&self) -> &'static str {
        match self {
            PoemSource::Remote => "remote",
            PoemSource::Curated => "curated",
            PoemSource::Improvised => "improvised",
        }
    }
}

/// A settled submission: the poem text and its provenance.
#[derive(Debug, Clone)]
pub struct GeneratedPoem {
    pub text: String,
    pub source: PoemSource,
}
