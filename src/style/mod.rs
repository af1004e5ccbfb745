//! Grammar and style services.
//!
//! The style check talks to a [`StyleService`] rather than to a concrete
//! engine, so the service can be:
//! - LanguageTool over HTTP ([`LanguageToolClient`])
//! - the built-in offline rules ([`LocalStyleService`])
//! - a test double

mod languagetool;
mod local;

pub use languagetool::LanguageToolClient;
pub use local::LocalStyleService;

pub(crate) use local::prime as prime_rules;

use async_trait::async_trait;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use crate::profile::{StyleBackend, StyleConfig};

/// Errors that can occur while calling a style service.
#[derive(Error, Debug)]
pub enum StyleError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("request timed out after {0} ms")]
    Timeout(u64),
    #[error("style service returned HTTP {0}")]
    Status(u16),
    #[error("style service unavailable: {0}")]
    Unavailable(String),
}

/// One grammar or style problem reported by a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleIssue {
    pub message: String,
    /// Character offset of the problem in the checked text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replacements: Vec<String>,
}

impl StyleIssue {
    /// An issue with only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            offset: None,
            length: None,
            rule_id: None,
            replacements: Vec::new(),
        }
    }

    /// Attach the span the issue refers to.
    pub fn at(mut self, offset: usize, length: usize) -> Self {
        self.offset = Some(offset);
        self.length = Some(length);
        self
    }
}

/// A grammar/style checker.
///
/// Issues must be returned in the order the engine reports them; the style
/// check keeps only a prefix of the list.
#[async_trait]
pub trait StyleService: Send + Sync {
    /// Short name used in logs and report summaries.
    fn name(&self) -> &str;

    /// Check `text` for the given locale (e.g. "en-US").
    async fn check(&self, text: &str, locale: &str) -> Result<Vec<StyleIssue>, StyleError>;
}

static HTTP_CLIENT: OnceCell<reqwest::Client> = OnceCell::new();

/// Shared HTTP client for all remote style services.
pub(crate) fn http_client() -> Result<&'static reqwest::Client, StyleError> {
    HTTP_CLIENT.get_or_try_init(|| {
        reqwest::Client::builder()
            .user_agent(concat!("resumecheck/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(StyleError::Network)
    })
}

/// Build the service selected by the profile.
pub fn from_config(config: &StyleConfig) -> Result<Arc<dyn StyleService>, StyleError> {
    let service: Arc<dyn StyleService> = match config.service {
        StyleBackend::LanguageTool => Arc::new(LanguageToolClient::new(&config.endpoint)?),
        StyleBackend::Local => Arc::new(LocalStyleService::new()),
    };
    Ok(service)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_selects_backend() {
        let mut config = StyleConfig::default();
        assert_eq!(from_config(&config).unwrap().name(), "languagetool");

        config.service = StyleBackend::Local;
        assert_eq!(from_config(&config).unwrap().name(), "local");
    }

    #[test]
    fn test_issue_serializes_without_empty_fields() {
        let issue = StyleIssue::new("Possible typo").at(4, 3);
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["message"], "Possible typo");
        assert_eq!(json["offset"], 4);
        assert!(json.get("rule_id").is_none());
        assert!(json.get("replacements").is_none());
    }
}
