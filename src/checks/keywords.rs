//! Lexical overlap between the résumé and the job description.

use crate::error::AnalysisError;
use crate::profile::Thresholds;
use crate::text;

use super::{CheckId, Finding, FindingDetails};

/// Overlap of distinct job-description tokens with the résumé.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordMatch {
    pub match_count: usize,
    pub total_job_terms: usize,
    /// `match_count / total_job_terms * 100`, in [0, 100]
    pub percentage: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Compare the distinct lowercased tokens of both texts.
///
/// Fails with `DivisionUndefined` when the job description has no tokens.
pub fn keyword_match(resume: &str, job_description: &str) -> Result<KeywordMatch, AnalysisError> {
    let resume_terms = text::token_set(resume);
    let job_terms = text::token_set(job_description);

    if job_terms.is_empty() {
        return Err(AnalysisError::DivisionUndefined(
            "job description has no terms".to_string(),
        ));
    }

    let (matched, missing): (Vec<String>, Vec<String>) = job_terms
        .iter()
        .cloned()
        .partition(|term| resume_terms.contains(term));

    let match_count = matched.len();
    let total_job_terms = job_terms.len();
    Ok(KeywordMatch {
        match_count,
        total_job_terms,
        percentage: match_count as f64 / total_job_terms as f64 * 100.0,
        matched,
        missing,
    })
}

/// Run the keyword check and wrap the result as a finding.
pub fn check_keywords(
    resume: &str,
    job_description: &str,
    thresholds: &Thresholds,
) -> Result<Finding, AnalysisError> {
    let m = keyword_match(resume, job_description)?;
    let summary = format!(
        "{}/{} job terms found ({:.2}%)",
        m.match_count, m.total_job_terms, m.percentage
    );
    let low = m.percentage < thresholds.min_keyword_match_percent;

    Ok(Finding::new(
        CheckId::KeywordMatch,
        summary,
        FindingDetails::KeywordMatch {
            match_count: m.match_count,
            total_job_terms: m.total_job_terms,
            percentage: m.percentage,
            matched: m.matched,
            missing: m.missing,
        },
    )
    .flag_if(low, "Add more job-specific keywords."))
}
