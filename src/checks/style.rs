//! Grammar/style check backed by a [`StyleService`].
//!
//! The service is the only part of an analysis that can fail for reasons
//! outside the input. Failures and timeouts become a `StyleUnavailable`
//! finding; they never abort the report.

use std::time::Duration;

use crate::profile::Thresholds;
use crate::style::{StyleError, StyleIssue, StyleService};

use super::{CheckId, Finding, FindingDetails};

/// Call the service, giving up after `timeout`.
pub async fn check_style(
    service: &dyn StyleService,
    text: &str,
    locale: &str,
    timeout: Duration,
) -> Result<Vec<StyleIssue>, StyleError> {
    match tokio::time::timeout(timeout, service.check(text, locale)).await {
        Ok(result) => result,
        Err(_) => Err(StyleError::Timeout(
            u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        )),
    }
}

/// Turn the service outcome into a finding.
///
/// Keeps the total issue count and the first `style_preview_limit` issues.
pub fn style_finding(
    service_name: &str,
    outcome: Result<Vec<StyleIssue>, StyleError>,
    thresholds: &Thresholds,
) -> Finding {
    match outcome {
        Ok(mut issues) => {
            let issue_count = issues.len();
            issues.truncate(thresholds.style_preview_limit);
            let plural = if issue_count != 1 { "s" } else { "" };
            Finding::new(
                CheckId::Style,
                format!("{} issue{} reported by {}", issue_count, plural, service_name),
                FindingDetails::Style {
                    issue_count,
                    issues,
                },
            )
            .flag_if(
                issue_count > thresholds.max_style_issues,
                "Fix grammar to improve professionalism.",
            )
        }
        Err(e) => unavailable(e.to_string()),
    }
}

/// The finding recorded when no style result could be obtained.
pub fn unavailable(reason: impl Into<String>) -> Finding {
    let reason = reason.into();
    Finding::new(
        CheckId::Style,
        format!("Style check unavailable: {}", reason),
        FindingDetails::StyleUnavailable { reason },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Fixed(usize);

    #[async_trait]
    impl StyleService for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn check(&self, _text: &str, _locale: &str) -> Result<Vec<StyleIssue>, StyleError> {
            Ok((0..self.0)
                .map(|i| StyleIssue::new(format!("issue {}", i)))
                .collect())
        }
    }

    struct Stalled;

    #[async_trait]
    impl StyleService for Stalled {
        fn name(&self) -> &str {
            "stalled"
        }

        async fn check(&self, _text: &str, _locale: &str) -> Result<Vec<StyleIssue>, StyleError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_preview_keeps_first_issues_in_order() {
        let issues: Vec<_> = (0..12).map(|i| StyleIssue::new(format!("issue {}", i))).collect();
        let finding = style_finding("fixed", Ok(issues), &Thresholds::default());

        assert!(finding.needs_attention);
        match &finding.details {
            FindingDetails::Style {
                issue_count,
                issues,
            } => {
                assert_eq!(*issue_count, 12);
                let messages: Vec<_> = issues.iter().map(|i| i.message.as_str()).collect();
                assert_eq!(
                    messages,
                    vec!["issue 0", "issue 1", "issue 2", "issue 3", "issue 4"]
                );
            }
            other => panic!("unexpected details: {:?}", other),
        }
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let ten: Vec<_> = (0..10).map(|_| StyleIssue::new("x")).collect();
        let finding = style_finding("fixed", Ok(ten), &Thresholds::default());
        assert!(!finding.needs_attention);
        assert_eq!(finding.summary, "10 issues reported by fixed");
    }

    #[test]
    fn test_failure_becomes_unavailable_finding() {
        let finding = style_finding(
            "languagetool",
            Err(StyleError::Status(503)),
            &Thresholds::default(),
        );
        assert!(!finding.needs_attention);
        assert!(finding.is_degraded());
        assert_eq!(
            finding.details,
            FindingDetails::StyleUnavailable {
                reason: "style service returned HTTP 503".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_check_style_passes_through_results() {
        let issues = check_style(&Fixed(3), "text", "en-US", Duration::from_secs(1))
            .await
            .unwrap();
        assert_eq!(issues.len(), 3);
    }

    #[tokio::test]
    async fn test_check_style_times_out() {
        let err = check_style(&Stalled, "text", "en-US", Duration::from_millis(20))
            .await
            .unwrap_err();
        assert!(matches!(err, StyleError::Timeout(20)));
    }
}
