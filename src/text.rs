//! Text normalization shared by the checks.
//!
//! Every check works on the same lexical view of the text: whitespace
//! tokens, compared case-insensitively. No stemming and no punctuation
//! stripping, so `python,` and `python` are different tokens.

use std::collections::BTreeSet;

/// Split text into whitespace-delimited tokens.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Number of whitespace-delimited tokens.
pub fn word_count(text: &str) -> usize {
    tokens(text).count()
}

/// Distinct lowercased tokens, in sorted order.
pub fn token_set(text: &str) -> BTreeSet<String> {
    tokens(text).map(str::to_lowercase).collect()
}

/// Lowercased copy of the text, used for substring lookups.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Terms from `terms` that occur anywhere in `folded` (already lowercased),
/// in the order they were declared.
pub fn terms_present<'a>(folded: &str, terms: &'a [String]) -> Vec<&'a str> {
    terms
        .iter()
        .map(String::as_str)
        .filter(|term| contains_term(folded, term))
        .collect()
}

/// Case-insensitive substring test against already-lowercased text.
///
/// Matches anywhere, including inside longer words: "skills" is found in
/// "unskilled skillset", and "led" in "skilled".
pub fn contains_term(folded: &str, term: &str) -> bool {
    folded.contains(&term.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_ignores_repeated_whitespace() {
        assert_eq!(word_count("  one\ttwo\n\nthree  "), 3);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count(" \n\t "), 0);
    }

    #[test]
    fn test_token_set_lowercases_and_dedups() {
        let set = token_set("Rust rust RUST, Go");
        let tokens: Vec<_> = set.iter().map(String::as_str).collect();
        assert_eq!(tokens, vec!["go", "rust", "rust,"]);
    }

    #[test]
    fn test_terms_present_keeps_declaration_order() {
        let terms = vec![
            "teamwork".to_string(),
            "leadership".to_string(),
            "communication".to_string(),
        ];
        let folded = fold_case("Strong COMMUNICATION and Teamwork");
        assert_eq!(terms_present(&folded, &terms), vec!["teamwork", "communication"]);
    }

    #[test]
    fn test_contains_term_matches_inside_words() {
        let folded = fold_case("An unskilled worker");
        assert!(contains_term(&folded, "skill"));
        assert!(contains_term(&folded, "Skill"));
        assert!(!contains_term(&folded, "skills"));
    }
}
