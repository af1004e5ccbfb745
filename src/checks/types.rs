//! Core types for analysis results.

use serde::{Deserialize, Serialize};

use crate::style::StyleIssue;

/// Identifiers for the individual checks, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckId {
    #[serde(rename = "keyword_match")]
    KeywordMatch,
    #[serde(rename = "style")]
    Style,
    #[serde(rename = "length")]
    Length,
    #[serde(rename = "sections")]
    Sections,
    #[serde(rename = "impact_language")]
    ImpactLanguage,
    #[serde(rename = "bullet_format")]
    BulletFormat,
}

impl CheckId {
    /// Every check, in execution order.
    pub const ALL: [CheckId; 6] = [
        CheckId::KeywordMatch,
        CheckId::Style,
        CheckId::Length,
        CheckId::Sections,
        CheckId::ImpactLanguage,
        CheckId::BulletFormat,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckId::KeywordMatch => "keyword_match",
            CheckId::Style => "style",
            CheckId::Length => "length",
            CheckId::Sections => "sections",
            CheckId::ImpactLanguage => "impact_language",
            CheckId::BulletFormat => "bullet_format",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        CheckId::ALL.into_iter().find(|id| id.as_str() == s)
    }

    /// Heading used by the pretty report.
    pub fn title(&self) -> &'static str {
        match self {
            CheckId::KeywordMatch => "Keyword Match",
            CheckId::Style => "Grammar & Style",
            CheckId::Length => "Length",
            CheckId::Sections => "Sections",
            CheckId::ImpactLanguage => "Impact Language",
            CheckId::BulletFormat => "Bullet Points",
        }
    }
}

impl std::fmt::Display for CheckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Length classification of a résumé.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthVerdict {
    TooShort,
    Good,
    TooLong,
}

impl std::fmt::Display for LengthVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LengthVerdict::TooShort => write!(f, "too short"),
            LengthVerdict::Good => write!(f, "good length"),
            LengthVerdict::TooLong => write!(f, "too long"),
        }
    }
}

/// Whether one expected section was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionPresence {
    pub name: String,
    pub present: bool,
}

/// Check-specific data carried by a finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FindingDetails {
    KeywordMatch {
        match_count: usize,
        total_job_terms: usize,
        percentage: f64,
        /// Job terms found in the résumé, sorted
        matched: Vec<String>,
        /// Job terms missing from the résumé, sorted
        missing: Vec<String>,
    },
    Style {
        /// Total issues reported by the service
        issue_count: usize,
        /// The first few issues, in service order
        issues: Vec<StyleIssue>,
    },
    /// The style service failed or timed out.
    StyleUnavailable { reason: String },
    Length {
        word_count: usize,
        verdict: LengthVerdict,
    },
    Sections { sections: Vec<SectionPresence> },
    ImpactLanguage {
        soft_skills: Vec<String>,
        action_verbs: Vec<String>,
    },
    BulletFormat {
        bullet_lines: usize,
        inconsistent: usize,
    },
    /// A check raised an error instead of producing a result.
    CheckFailed { reason: String },
}

/// The result of one check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub check: CheckId,
    pub summary: String,
    pub needs_attention: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    pub details: FindingDetails,
}

impl Finding {
    pub fn new(check: CheckId, summary: impl Into<String>, details: FindingDetails) -> Self {
        Self {
            check,
            summary: summary.into(),
            needs_attention: false,
            suggestion: None,
            details,
        }
    }

    /// Flag the finding and attach advice.
    pub fn flag(mut self, suggestion: impl Into<String>) -> Self {
        self.needs_attention = true;
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Set the attention flag, attaching advice only when flagged.
    pub fn flag_if(self, condition: bool, suggestion: impl Into<String>) -> Self {
        if condition {
            self.flag(suggestion)
        } else {
            self
        }
    }

    /// Whether this finding records a failure rather than a result.
    pub fn is_degraded(&self) -> bool {
        matches!(
            self.details,
            FindingDetails::StyleUnavailable { .. } | FindingDetails::CheckFailed { .. }
        )
    }
}

/// All findings for one résumé/job-description pair.
///
/// Built only by the analyzer, so `overall_verdict` always equals the OR of
/// the findings' attention flags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    findings: Vec<Finding>,
    /// True when improvements are suggested
    overall_verdict: bool,
}

impl AnalysisReport {
    pub(crate) fn from_findings(findings: Vec<Finding>) -> Self {
        let overall_verdict = findings.iter().any(|f| f.needs_attention);
        Self {
            findings,
            overall_verdict,
        }
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn overall_verdict(&self) -> bool {
        self.overall_verdict
    }

    /// Look up the finding for a check.
    pub fn finding(&self, check: CheckId) -> Option<&Finding> {
        self.findings.iter().find(|f| f.check == check)
    }

    /// Findings with the attention flag set.
    pub fn flagged(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.needs_attention)
    }

    /// Whether any check could not run to completion.
    pub fn is_degraded(&self) -> bool {
        self.findings.iter().any(Finding::is_degraded)
    }

    /// One-line verdict for display.
    pub fn verdict_message(&self) -> &'static str {
        if self.overall_verdict {
            "Your resume could use some improvements. See the suggestions above."
        } else {
            "Your resume looks well-optimized for the job description."
        }
    }
}
