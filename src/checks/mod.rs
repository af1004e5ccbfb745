//! Résumé checks and the analyzer that aggregates them.

mod bullets;
mod impact;
mod keywords;
mod length;
mod runner;
mod sections;
mod style;
mod types;

pub use bullets::{bullet_point_consistency, bullets_finding, BulletCounts};
pub use impact::{find_impact_language, impact_finding, ImpactLanguage};
pub use keywords::{check_keywords, keyword_match, KeywordMatch};
pub use length::{check_length, length_analysis};
pub use runner::{analyze, Analyzer};
pub use sections::{check_sections, sections_finding};
pub use style::{check_style, style_finding};
pub use types::{AnalysisReport, CheckId, Finding, FindingDetails, LengthVerdict, SectionPresence};

pub(crate) use bullets::prime as prime_bullets;
