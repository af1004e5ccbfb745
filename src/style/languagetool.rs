//! LanguageTool HTTP client.
//!
//! Checks text via: POST {endpoint} with form fields `text` and `language`.
//! The public endpoint is https://api.languagetool.org/v2/check; a
//! self-hosted server exposes the same API.

use async_trait::async_trait;
use serde::Deserialize;

use super::{http_client, StyleError, StyleIssue, StyleService};

/// Maximum replacement suggestions kept per issue.
const MAX_REPLACEMENTS: usize = 3;

/// Client for a LanguageTool server.
pub struct LanguageToolClient {
    http: &'static reqwest::Client,
    endpoint: String,
}

impl LanguageToolClient {
    /// Create a client for the given check endpoint.
    pub fn new(endpoint: &str) -> Result<Self, StyleError> {
        Ok(Self {
            http: http_client()?,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[derive(Deserialize)]
struct CheckResponse {
    #[serde(default)]
    matches: Vec<Match>,
}

#[derive(Deserialize)]
struct Match {
    message: String,
    #[serde(default)]
    offset: Option<usize>,
    #[serde(default)]
    length: Option<usize>,
    #[serde(default)]
    replacements: Vec<Replacement>,
    #[serde(default)]
    rule: Option<Rule>,
}

#[derive(Deserialize)]
struct Replacement {
    value: String,
}

#[derive(Deserialize)]
struct Rule {
    id: String,
}

impl From<Match> for StyleIssue {
    fn from(m: Match) -> Self {
        StyleIssue {
            message: m.message,
            offset: m.offset,
            length: m.length,
            rule_id: m.rule.map(|r| r.id),
            replacements: m
                .replacements
                .into_iter()
                .take(MAX_REPLACEMENTS)
                .map(|r| r.value)
                .collect(),
        }
    }
}

/// Decode a LanguageTool check response body.
fn parse_response(body: &str) -> Result<Vec<StyleIssue>, StyleError> {
    let response: CheckResponse = serde_json::from_str(body)
        .map_err(|e| StyleError::Unavailable(format!("malformed response: {}", e)))?;
    Ok(response.matches.into_iter().map(StyleIssue::from).collect())
}

#[async_trait]
impl StyleService for LanguageToolClient {
    fn name(&self) -> &str {
        "languagetool"
    }

    async fn check(&self, text: &str, locale: &str) -> Result<Vec<StyleIssue>, StyleError> {
        let response = self
            .http
            .post(&self.endpoint)
            .form(&[("text", text), ("language", locale)])
            .send()
            .await?;

        match response.status().as_u16() {
            200 => {
                let body = response.text().await?;
                parse_response(&body)
            }
            429 => Err(StyleError::Unavailable("rate limited".to_string())),
            status => Err(StyleError::Status(status)),
        }
    }
}
