//! Errors returned to callers of the analysis engine.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an analysis request, or that a single check can raise.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// A required input text was missing or blank.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The résumé document could not be turned into text.
    #[error("unreadable document {}: {reason}", .path.display())]
    UnreadableDocument { path: PathBuf, reason: String },
    /// A ratio was requested over an empty set of terms.
    #[error("division undefined: {0}")]
    DivisionUndefined(String),
    /// The shared async runtime could not be started.
    #[error("analysis runtime unavailable: {0}")]
    Runtime(String),
}

impl AnalysisError {
    pub fn unreadable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        AnalysisError::UnreadableDocument {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
