//! Résumé length classification.

use crate::profile::Thresholds;
use crate::text;

use super::{CheckId, Finding, FindingDetails, LengthVerdict};

/// Count words and classify them against `[min_words, max_words]`.
///
/// Both bounds are inclusive: a résumé of exactly `min_words` or
/// `max_words` words is a good length.
pub fn length_analysis(resume: &str, thresholds: &Thresholds) -> (usize, LengthVerdict) {
    let word_count = text::word_count(resume);
    let verdict = if word_count < thresholds.min_words {
        LengthVerdict::TooShort
    } else if word_count > thresholds.max_words {
        LengthVerdict::TooLong
    } else {
        LengthVerdict::Good
    };
    (word_count, verdict)
}

pub fn check_length(resume: &str, thresholds: &Thresholds) -> Finding {
    let (word_count, verdict) = length_analysis(resume, thresholds);
    let details = FindingDetails::Length {
        word_count,
        verdict,
    };

    match verdict {
        LengthVerdict::TooShort => Finding::new(
            CheckId::Length,
            format!("Too short ({} words)", word_count),
            details,
        )
        .flag("Add more details."),
        LengthVerdict::TooLong => Finding::new(
            CheckId::Length,
            format!("Too long ({} words)", word_count),
            details,
        )
        .flag("Consider trimming."),
        LengthVerdict::Good => Finding::new(
            CheckId::Length,
            format!("Good length ({} words)", word_count),
            details,
        ),
    }
}
