//! Analyzer that runs every check and aggregates the findings.

use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::Lazy;
use rayon::prelude::*;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::error::AnalysisError;
use crate::profile::Profile;
use crate::style::{LocalStyleService, StyleError, StyleIssue, StyleService};

use super::{
    bullets_finding, check_keywords, check_length, impact_finding, sections_finding, style,
    AnalysisReport, CheckId, Finding, FindingDetails,
};

type StyleOutcome = Result<Vec<StyleIssue>, StyleError>;

/// Runs the checks for one résumé/job-description pair at a time.
///
/// Checks run in a fixed order: keyword match, style, length, sections,
/// impact language, bullet format. The style request runs on the shared
/// runtime while the local checks execute.
///
/// `analyze` blocks the calling thread until the style request finishes or
/// times out. It is safe to call from inside a tokio runtime, but async
/// callers should prefer [`Analyzer::analyze_async`], which yields instead.
pub struct Analyzer {
    profile: Profile,
    style: Option<Arc<dyn StyleService>>,
}

impl Analyzer {
    /// Create an analyzer whose style service is chosen by the profile.
    pub fn new(profile: Profile) -> anyhow::Result<Self> {
        let style = if profile.style.enabled {
            Some(crate::style::from_config(&profile.style)?)
        } else {
            None
        };
        crate::init();
        Ok(Self { profile, style })
    }

    /// Create an analyzer with an explicit style service.
    pub fn with_style_service(profile: Profile, service: Arc<dyn StyleService>) -> Self {
        crate::init();
        Self {
            profile,
            style: Some(service),
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Name of the style service, if the style check is enabled.
    pub fn style_service_name(&self) -> Option<&str> {
        self.style.as_deref().map(|s| s.name())
    }

    /// Analyze one résumé against a job description.
    ///
    /// Fails with `InvalidInput` before any check runs when either text is
    /// empty or whitespace only.
    #[tracing::instrument(skip_all)]
    pub fn analyze(
        &self,
        resume: &str,
        job_description: &str,
    ) -> Result<AnalysisReport, AnalysisError> {
        validate_inputs(resume, job_description)?;
        let runtime = crate::runtime()?;

        let pending = self.spawn_style(runtime, resume);
        let local = self.local_findings(resume, job_description);
        let style = match pending {
            Some(handle) => self.style_from_outcome(wait_blocking(runtime, handle)),
            None => style::unavailable("disabled in profile"),
        };

        Ok(assemble(local, style))
    }

    /// Same as [`Analyzer::analyze`], for callers inside an async context.
    pub async fn analyze_async(
        &self,
        resume: &str,
        job_description: &str,
    ) -> Result<AnalysisReport, AnalysisError> {
        validate_inputs(resume, job_description)?;
        let runtime = crate::runtime()?;

        let pending = self.spawn_style(runtime, resume);
        let local = self.local_findings(resume, job_description);
        let style = match pending {
            Some(handle) => self.style_from_outcome(flatten(handle.await)),
            None => style::unavailable("disabled in profile"),
        };

        Ok(assemble(local, style))
    }

    /// Analyze several résumés against the same job description in
    /// parallel. Results are in input order.
    pub fn analyze_many<S>(
        &self,
        resumes: &[S],
        job_description: &str,
    ) -> Vec<Result<AnalysisReport, AnalysisError>>
    where
        S: AsRef<str> + Sync,
    {
        resumes
            .par_iter()
            .map(|resume| self.analyze(resume.as_ref(), job_description))
            .collect()
    }

    fn spawn_style(
        &self,
        runtime: &Runtime,
        resume: &str,
    ) -> Option<JoinHandle<StyleOutcome>> {
        let service = Arc::clone(self.style.as_ref()?);
        let text = resume.to_string();
        let locale = self.profile.style.locale.clone();
        let timeout = Duration::from_millis(self.profile.style.timeout_ms);

        debug!(service = service.name(), %locale, "starting style check");
        Some(runtime.spawn(async move {
            style::check_style(service.as_ref(), &text, &locale, timeout).await
        }))
    }

    fn style_from_outcome(&self, outcome: StyleOutcome) -> Finding {
        let service = self.style_service_name().unwrap_or("style");
        if let Err(e) = &outcome {
            warn!(service, error = %e, "style check unavailable, continuing without it");
        }
        style::style_finding(service, outcome, &self.profile.thresholds)
    }

    fn local_findings(&self, resume: &str, job_description: &str) -> LocalFindings {
        let p = &self.profile;

        let keyword = match check_keywords(resume, job_description, &p.thresholds) {
            Ok(finding) => finding,
            Err(e) => {
                error!(error = %e, "keyword check failed");
                check_failed(CheckId::KeywordMatch, &e)
            }
        };

        LocalFindings {
            keyword,
            length: check_length(resume, &p.thresholds),
            sections: sections_finding(resume, &p.sections),
            impact: impact_finding(resume, &p.soft_skills, &p.action_verbs),
            bullets: bullets_finding(resume),
        }
    }
}

/// A panicked or cancelled style task counts as an unavailable service.
fn flatten(joined: Result<StyleOutcome, tokio::task::JoinError>) -> StyleOutcome {
    joined.unwrap_or_else(|e| Err(StyleError::Unavailable(format!("style task failed: {}", e))))
}

/// Wait for the style task from synchronous code.
///
/// `Runtime::block_on` panics when the caller is itself on a runtime
/// thread, so in that case the result is handed over a channel fed by the
/// style runtime's workers. On a multi-thread runtime the wait goes through
/// `block_in_place` so the caller's other tasks keep running.
fn wait_blocking(runtime: &Runtime, handle: JoinHandle<StyleOutcome>) -> StyleOutcome {
    let caller = match Handle::try_current() {
        Ok(caller) => caller,
        Err(_) => return flatten(runtime.block_on(handle)),
    };

    let (tx, rx) = std::sync::mpsc::sync_channel(1);
    runtime.spawn(async move {
        let _ = tx.send(handle.await);
    });

    let received = match caller.runtime_flavor() {
        RuntimeFlavor::MultiThread => tokio::task::block_in_place(|| rx.recv()),
        _ => rx.recv(),
    };
    match received {
        Ok(joined) => flatten(joined),
        Err(_) => Err(StyleError::Unavailable(
            "style task dropped before completing".to_string(),
        )),
    }
}

struct LocalFindings {
    keyword: Finding,
    length: Finding,
    sections: Finding,
    impact: Finding,
    bullets: Finding,
}

fn assemble(local: LocalFindings, style: Finding) -> AnalysisReport {
    let findings = vec![
        local.keyword,
        style,
        local.length,
        local.sections,
        local.impact,
        local.bullets,
    ];

    for f in &findings {
        debug!(
            check = f.check.as_str(),
            needs_attention = f.needs_attention,
            summary = %f.summary,
            "check finished"
        );
    }

    let report = AnalysisReport::from_findings(findings);
    info!(
        improvements_suggested = report.overall_verdict(),
        flagged = report.flagged().count(),
        degraded = report.is_degraded(),
        "analysis complete"
    );
    report
}

fn validate_inputs(resume: &str, job_description: &str) -> Result<(), AnalysisError> {
    if resume.trim().is_empty() {
        return Err(AnalysisError::InvalidInput(
            "resume text is empty".to_string(),
        ));
    }
    if job_description.trim().is_empty() {
        return Err(AnalysisError::InvalidInput(
            "job description is empty".to_string(),
        ));
    }
    Ok(())
}

fn check_failed(check: CheckId, error: &AnalysisError) -> Finding {
    Finding::new(
        check,
        format!("Check failed: {}", error),
        FindingDetails::CheckFailed {
            reason: error.to_string(),
        },
    )
    .flag("This check could not run on the given input.")
}

static DEFAULT_ANALYZER: Lazy<Analyzer> = Lazy::new(|| {
    Analyzer::with_style_service(Profile::default(), Arc::new(LocalStyleService::new()))
});

/// Analyze with the default profile and the offline style rules.
///
/// Blocks the calling thread like [`Analyzer::analyze`]; it does not panic
/// when called from inside a tokio runtime.
pub fn analyze(resume: &str, job_description: &str) -> Result<AnalysisReport, AnalysisError> {
    DEFAULT_ANALYZER.analyze(resume, job_description)
}
