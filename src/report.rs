//! Output formatting for resumecheck results.
//!
//! Supports two output formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::Serialize;

use crate::checks::{AnalysisReport, Finding, FindingDetails};

/// How many missing job terms the pretty output lists.
const MISSING_TERMS_SHOWN: usize = 10;

/// The report for one résumé, labelled with where it came from.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeReport {
    pub source: String,
    #[serde(flatten)]
    pub report: AnalysisReport,
}

// =============================================================================
// JSON Format
// =============================================================================

/// Top-level JSON document.
#[derive(Serialize)]
pub struct JsonReport<'a> {
    pub version: &'static str,
    pub job: &'a str,
    pub profile: &'a str,
    /// True when any résumé has suggested improvements
    pub improvements_suggested: bool,
    pub resumes: &'a [ResumeReport],
}

/// Render results as pretty-printed JSON.
pub fn render_json(job: &str, profile: &str, results: &[ResumeReport]) -> anyhow::Result<String> {
    let report = JsonReport {
        version: env!("CARGO_PKG_VERSION"),
        job,
        profile,
        improvements_suggested: results.iter().any(|r| r.report.overall_verdict()),
        resumes: results,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Write results in JSON format to stdout.
pub fn write_json(job: &str, profile: &str, results: &[ResumeReport]) -> anyhow::Result<()> {
    println!("{}", render_json(job, profile, results)?);
    Ok(())
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Write results in pretty (human-readable) format.
pub fn write_pretty(job: &str, profile: &str, results: &[ResumeReport]) {
    // Header
    println!();
    print!("  ");
    print!("{}", "resumecheck".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    print!("  {}", "Job:      ".dimmed());
    println!("{}", job);
    print!("  {}", "Profile:  ".dimmed());
    println!("{}", profile);
    println!();

    for result in results {
        write_resume(result);
    }
}

fn write_resume(result: &ResumeReport) {
    let report = &result.report;

    print!("  {}", "Resume:   ".dimmed());
    println!("{}", result.source.blue());
    println!();

    for finding in report.findings() {
        write_finding(finding);
    }

    write_verdict(report);
    println!();
}

fn write_finding(finding: &Finding) {
    write_status_tag(finding);
    print!(" {:<18}", finding.check.title().bold());
    println!("{}", finding.summary);

    match &finding.details {
        FindingDetails::KeywordMatch { missing, .. } if finding.needs_attention => {
            let shown: Vec<&str> = missing
                .iter()
                .take(MISSING_TERMS_SHOWN)
                .map(String::as_str)
                .collect();
            let more = missing.len().saturating_sub(shown.len());
            let suffix = if more > 0 {
                format!(" (+{} more)", more)
            } else {
                String::new()
            };
            println!(
                "             {} {}{}",
                "missing:".dimmed(),
                shown.join(" "),
                suffix.dimmed()
            );
        }
        FindingDetails::Style { issues, .. } if !issues.is_empty() => {
            println!("             {}", "Top issues:".dimmed());
            for issue in issues {
                println!("             - {}", issue.message);
            }
        }
        FindingDetails::Sections { sections } => {
            for section in sections {
                let mark = if section.present {
                    "✓".green()
                } else {
                    "✗".red()
                };
                println!("             {} {}", mark, title_case(&section.name));
            }
        }
        _ => {}
    }

    if let Some(suggestion) = &finding.suggestion {
        println!("             {} {}", "→".yellow(), suggestion);
    }
    println!();
}

fn write_status_tag(finding: &Finding) {
    if finding.is_degraded() && !finding.needs_attention {
        print!("    {}", "SKIP".dimmed());
    } else if finding.needs_attention {
        print!("    {}", "WARN".yellow());
    } else {
        print!("    {}", " OK ".green());
    }
}

fn write_verdict(report: &AnalysisReport) {
    if report.overall_verdict() {
        print!("  {}", "✗ IMPROVE".yellow());
        let checks: Vec<&str> = report.flagged().map(|f| f.check.as_str()).collect();
        print!("  {}", format!("({})", checks.join(", ")).dimmed());
    } else {
        print!("  {}", "✓ READY".green());
    }
    println!();
    println!("  {}", report.verdict_message());

    if report.is_degraded() {
        let skipped: Vec<&str> = report
            .findings()
            .iter()
            .filter(|f| f.is_degraded())
            .map(|f| f.check.as_str())
            .collect();
        println!(
            "  {}",
            format!("Not fully checked: {}", skipped.join(", ")).dimmed()
        );
    }
}

/// "certifications" -> "Certifications", "problem solving" -> "Problem Solving".
fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("certifications"), "Certifications");
        assert_eq!(title_case("problem solving"), "Problem Solving");
        assert_eq!(title_case(""), "");
    }
}
