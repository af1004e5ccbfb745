//! Offline style rules.
//!
//! A small rule set for when no LanguageTool server is reachable. It only
//! catches mechanical problems: repeated words, runs of spaces, spacing
//! before punctuation, sentences starting in lowercase and a lowercase
//! pronoun "i". Issues come back sorted by position.

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;

use super::{StyleError, StyleIssue, StyleService};

lazy_static! {
    /// A word, for repeated-word detection
    static ref WORD: Regex = Regex::new(r"[A-Za-z']+").unwrap();
    /// Two or more spaces between non-space characters
    static ref SPACE_RUN: Regex = Regex::new(r"\S( {2,})\S").unwrap();
    /// Whitespace before a comma, semicolon or colon
    static ref SPACE_BEFORE_PUNCT: Regex = Regex::new(r"\w([ \t]+)[,;:]").unwrap();
    /// Sentence end followed by a lowercase letter on the same line
    static ref LOWERCASE_START: Regex = Regex::new(r"[.!?][ \t]+([a-z])").unwrap();
    /// A standalone "i"; the surrounding characters are checked separately
    static ref LOWERCASE_I: Regex = Regex::new(r"\bi\b").unwrap();
}

/// Compile the rule regexes ahead of the first check.
pub(crate) fn prime() {
    lazy_static::initialize(&WORD);
    lazy_static::initialize(&SPACE_RUN);
    lazy_static::initialize(&SPACE_BEFORE_PUNCT);
    lazy_static::initialize(&LOWERCASE_START);
    lazy_static::initialize(&LOWERCASE_I);
}

/// Style service backed by built-in rules. Only English is supported.
#[derive(Debug, Default, Clone)]
pub struct LocalStyleService;

impl LocalStyleService {
    pub fn new() -> Self {
        Self
    }

    /// Run every rule over `text`.
    pub fn check_text(&self, text: &str) -> Vec<StyleIssue> {
        let mut found: Vec<(usize, usize, &'static str, String)> = Vec::new();

        let mut previous: Option<regex::Match> = None;
        for word in WORD.find_iter(text) {
            if let Some(prev) = previous {
                let gap = &text[prev.end()..word.start()];
                if !gap.is_empty()
                    && gap.chars().all(|c| c == ' ' || c == '\t')
                    && prev.as_str().eq_ignore_ascii_case(word.as_str())
                {
                    found.push((
                        prev.start(),
                        word.end(),
                        "REPEATED_WORD",
                        format!("Possible typo: the word \"{}\" is repeated.", word.as_str()),
                    ));
                }
            }
            previous = Some(word);
        }

        for caps in SPACE_RUN.captures_iter(text) {
            if let Some(run) = caps.get(1) {
                found.push((
                    run.start(),
                    run.end(),
                    "WHITESPACE_RULE",
                    "Possible typo: you repeated a whitespace.".to_string(),
                ));
            }
        }

        for caps in SPACE_BEFORE_PUNCT.captures_iter(text) {
            if let Some(gap) = caps.get(1) {
                found.push((
                    gap.start(),
                    gap.end() + 1,
                    "SPACE_BEFORE_PUNCTUATION",
                    "Don't put a space before the punctuation mark.".to_string(),
                ));
            }
        }

        for caps in LOWERCASE_START.captures_iter(text) {
            if let Some(letter) = caps.get(1) {
                found.push((
                    letter.start(),
                    letter.end(),
                    "UPPERCASE_SENTENCE_START",
                    "This sentence does not start with an uppercase letter.".to_string(),
                ));
            }
        }

        for pronoun in LOWERCASE_I.find_iter(text) {
            if is_pronoun(text, pronoun.start(), pronoun.end()) {
                found.push((
                    pronoun.start(),
                    pronoun.end(),
                    "I_LOWERCASE",
                    "The personal pronoun \"I\" should be uppercase.".to_string(),
                ));
            }
        }

        found.sort_by_key(|(start, _, _, _)| *start);
        found
            .into_iter()
            .map(|(start, end, rule, message)| {
                let offset = text[..start].chars().count();
                let length = text[start..end].chars().count();
                let mut issue = StyleIssue::new(message).at(offset, length);
                issue.rule_id = Some(rule.to_string());
                issue
            })
            .collect()
    }
}

/// Whether the "i" at `start..end` stands alone: preceded by whitespace or
/// "(" and followed by whitespace or punctuation, or at either end of text.
fn is_pronoun(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    let opens = before.map_or(true, |c| c.is_whitespace() || c == '(');
    let closes = after.map_or(true, |c| c.is_whitespace() || ",.;:!?')".contains(c));
    opens && closes
}

#[async_trait]
impl StyleService for LocalStyleService {
    fn name(&self) -> &str {
        "local"
    }

    async fn check(&self, text: &str, locale: &str) -> Result<Vec<StyleIssue>, StyleError> {
        if !locale.to_ascii_lowercase().starts_with("en") {
            return Err(StyleError::Unavailable(format!(
                "offline rules do not support locale {}",
                locale
            )));
        }
        Ok(self.check_text(text))
    }
}
