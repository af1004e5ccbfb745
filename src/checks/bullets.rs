//! Bullet-list formatting consistency.
//!
//! Only `-` and `•` are recognized bullet markers. A well-formed bullet is
//! the marker immediately followed by a space and then content (lines are
//! trimmed first, so there is always content after the space); anything
//! else starting with a marker is inconsistent. Lines using other markers
//! such as `*` are not bullets at all.

use lazy_static::lazy_static;
use regex::Regex;

use super::{CheckId, Finding, FindingDetails};

lazy_static! {
    /// Marker immediately followed by a space
    static ref WELL_FORMED: Regex = Regex::new(r"^[-•] ").unwrap();
}

pub(crate) fn prime() {
    lazy_static::initialize(&WELL_FORMED);
}

/// Counts of bullet lines and of badly formatted ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulletCounts {
    pub bullet_lines: usize,
    pub inconsistent: usize,
}

fn is_bullet(trimmed: &str) -> bool {
    trimmed.starts_with('-') || trimmed.starts_with('•')
}

/// Count bullet lines and the ones not matching `^[-•] ` after trimming.
pub fn bullet_point_consistency(resume: &str) -> BulletCounts {
    let mut counts = BulletCounts {
        bullet_lines: 0,
        inconsistent: 0,
    };
    for line in resume.lines() {
        let trimmed = line.trim();
        if !is_bullet(trimmed) {
            continue;
        }
        counts.bullet_lines += 1;
        if !WELL_FORMED.is_match(trimmed) {
            counts.inconsistent += 1;
        }
    }
    counts
}

pub fn bullets_finding(resume: &str) -> Finding {
    let counts = bullet_point_consistency(resume);
    let summary = format!(
        "{} total, {} inconsistent",
        counts.bullet_lines, counts.inconsistent
    );
    Finding::new(
        CheckId::BulletFormat,
        summary,
        FindingDetails::BulletFormat {
            bullet_lines: counts.bullet_lines,
            inconsistent: counts.inconsistent,
        },
    )
    .flag_if(counts.inconsistent > 0, "Fix inconsistent bullet formatting.")
}
