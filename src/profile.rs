//! Profile schema definitions for resumecheck.
//!
//! A profile holds the term lists and thresholds the checks use. Every
//! field has a default, so an empty YAML document is a valid profile and
//! matches the built-in English heuristics.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default profile file names to search for in the working directory.
pub const DEFAULT_PROFILE_NAMES: &[&str] = &["resumecheck.yaml", ".resumecheck.yaml"];

/// Top-level profile definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Section names looked up in the résumé, in report order.
    #[serde(default = "default_sections")]
    pub sections: Vec<String>,
    #[serde(default = "default_soft_skills")]
    pub soft_skills: Vec<String>,
    #[serde(default = "default_action_verbs")]
    pub action_verbs: Vec<String>,
    #[serde(default)]
    pub thresholds: Thresholds,
    #[serde(default)]
    pub style: StyleConfig,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: "default".to_string(),
            description: None,
            sections: default_sections(),
            soft_skills: default_soft_skills(),
            action_verbs: default_action_verbs(),
            thresholds: Thresholds::default(),
            style: StyleConfig::default(),
        }
    }
}

impl Profile {
    /// Parse a profile from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::parse_str(&content)
    }

    /// Parse a profile from YAML text.
    pub fn parse_str(content: &str) -> anyhow::Result<Self> {
        if content.trim().is_empty() {
            return Ok(Profile::default());
        }
        let profile: Profile = serde_yaml::from_str(content)?;
        Ok(profile)
    }
}

fn owned(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| t.to_string()).collect()
}

fn default_sections() -> Vec<String> {
    owned(&[
        "experience",
        "education",
        "skills",
        "projects",
        "certifications",
    ])
}

fn default_soft_skills() -> Vec<String> {
    owned(&[
        "teamwork",
        "communication",
        "leadership",
        "problem solving",
        "adaptability",
    ])
}

fn default_action_verbs() -> Vec<String> {
    owned(&["led", "created", "developed", "implemented", "achieved"])
}

/// Numeric limits used by the checks.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Thresholds {
    /// Keyword overlap below this percentage is flagged (default: 50)
    #[serde(default = "default_min_keyword_match")]
    pub min_keyword_match_percent: f64,
    /// More style issues than this are flagged (default: 10)
    #[serde(default = "default_max_style_issues")]
    pub max_style_issues: usize,
    /// How many style issues to keep in the report (default: 5)
    #[serde(default = "default_style_preview_limit")]
    pub style_preview_limit: usize,
    /// Fewer words than this is "too short" (default: 300)
    #[serde(default = "default_min_words")]
    pub min_words: usize,
    /// More words than this is "too long" (default: 800)
    #[serde(default = "default_max_words")]
    pub max_words: usize,
}

fn default_min_keyword_match() -> f64 {
    50.0
}

fn default_max_style_issues() -> usize {
    10
}

fn default_style_preview_limit() -> usize {
    5
}

fn default_min_words() -> usize {
    300
}

fn default_max_words() -> usize {
    800
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_keyword_match_percent: default_min_keyword_match(),
            max_style_issues: default_max_style_issues(),
            style_preview_limit: default_style_preview_limit(),
            min_words: default_min_words(),
            max_words: default_max_words(),
        }
    }
}

/// Which style service backs the style check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StyleBackend {
    /// LanguageTool HTTP API
    #[default]
    LanguageTool,
    /// Built-in offline rules
    Local,
}

impl std::fmt::Display for StyleBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleBackend::LanguageTool => write!(f, "languagetool"),
            StyleBackend::Local => write!(f, "local"),
        }
    }
}

/// Configuration for the style check.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StyleConfig {
    /// Whether the style check runs at all (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub service: StyleBackend,
    /// LanguageTool check endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Request timeout in milliseconds (default: 10000)
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,
}

fn default_true() -> bool {
    true
}

fn default_endpoint() -> String {
    "https://api.languagetool.org/v2/check".to_string()
}

fn default_locale() -> String {
    "en-US".to_string()
}

fn default_timeout() -> u64 {
    10_000
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            service: StyleBackend::default(),
            endpoint: default_endpoint(),
            locale: default_locale(),
            timeout_ms: default_timeout(),
        }
    }
}

/// Find a profile file: working directory first, then the user config dir.
pub fn discover() -> Option<PathBuf> {
    for name in DEFAULT_PROFILE_NAMES {
        let path = PathBuf::from(name);
        if path.exists() {
            return Some(path);
        }
    }
    directories::ProjectDirs::from("", "", "resumecheck")
        .map(|dirs| dirs.config_dir().join("profile.yaml"))
        .filter(|path| path.exists())
}

/// Validate a profile for correctness.
pub fn validate(profile: &Profile) -> anyhow::Result<()> {
    check_terms("sections", &profile.sections)?;
    check_terms("soft_skills", &profile.soft_skills)?;
    check_terms("action_verbs", &profile.action_verbs)?;

    let t = &profile.thresholds;
    if !(0.0..=100.0).contains(&t.min_keyword_match_percent) {
        anyhow::bail!(
            "thresholds.min_keyword_match_percent must be between 0 and 100, got {}",
            t.min_keyword_match_percent
        );
    }
    if t.min_words > t.max_words {
        anyhow::bail!(
            "thresholds.min_words ({}) is greater than thresholds.max_words ({})",
            t.min_words,
            t.max_words
        );
    }

    if profile.style.enabled {
        if profile.style.timeout_ms == 0 {
            anyhow::bail!("style.timeout_ms must be positive");
        }
        if profile.style.locale.trim().is_empty() {
            anyhow::bail!("style.locale must not be empty");
        }
        if profile.style.service == StyleBackend::LanguageTool
            && !profile.style.endpoint.starts_with("http")
        {
            anyhow::bail!("invalid style.endpoint {:?}", profile.style.endpoint);
        }
    }

    Ok(())
}

fn check_terms(field: &str, terms: &[String]) -> anyhow::Result<()> {
    if terms.is_empty() {
        anyhow::bail!("{} must list at least one term", field);
    }
    if let Some(blank) = terms.iter().position(|t| t.trim().is_empty()) {
        anyhow::bail!("{}[{}] is blank", field, blank);
    }
    Ok(())
}
