//! Resumecheck - résumé quality gate.
//!
//! Resumecheck compares a résumé with a job description and reports what to
//! improve. Each check produces a finding with an attention flag; the report
//! suggests improvements when any finding is flagged.
//!
//! # Architecture
//!
//! - `checks`: the individual checks and the `Analyzer` that runs them
//! - `style`: grammar/style services (LanguageTool, offline rules)
//! - `extract`: turning résumé files (text, PDF, DOCX) into plain text
//! - `profile`: YAML profile with term lists and thresholds
//! - `report`: output formatting (pretty, JSON)
//! - `text`: tokenization shared by the checks
//!
//! # Example
//!
//! ```no_run
//! let report = resumecheck::analyze(
//!     "Experience\n- Led a team of five engineers",
//!     "Senior engineer to lead a team",
//! )?;
//! if report.overall_verdict() {
//!     for finding in report.flagged() {
//!         println!("{}: {}", finding.check, finding.summary);
//!     }
//! }
//! # Ok::<(), resumecheck::AnalysisError>(())
//! ```

pub mod checks;
pub mod cli;
pub mod error;
pub mod extract;
pub mod profile;
pub mod report;
pub mod style;
pub mod text;

pub use checks::{analyze, AnalysisReport, Analyzer, CheckId, Finding, FindingDetails};
pub use error::AnalysisError;
pub use extract::{
    DocumentExtractor, DocxExtractor, PdfExtractor, PlainTextExtractor, ResumeExtractor,
};
pub use profile::Profile;
pub use style::{LanguageToolClient, LocalStyleService, StyleError, StyleIssue, StyleService};

use once_cell::sync::OnceCell;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::runtime::Runtime;

/// Whether process-wide state has been initialized.
static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Runtime that executes style-service requests.
static RUNTIME: OnceCell<Runtime> = OnceCell::new();

/// Initialize process-wide state: the shared regexes, the HTTP client and
/// the runtime used for style requests.
///
/// Call this once at startup. This is idempotent - calling it multiple
/// times is safe, and the analyzer calls it itself.
pub fn init() {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    checks::prime_bullets();
    style::prime_rules();
    if let Err(e) = style::http_client() {
        tracing::warn!(error = %e, "HTTP client unavailable, remote style checks will fail");
    }
    if let Err(e) = runtime() {
        tracing::warn!(error = %e, "style runtime unavailable");
    }
}

/// The shared runtime, started on first use.
pub(crate) fn runtime() -> Result<&'static Runtime, AnalysisError> {
    RUNTIME.get_or_try_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("resumecheck-style")
            .enable_all()
            .build()
            .map_err(|e| AnalysisError::Runtime(e.to_string()))
    })
}
