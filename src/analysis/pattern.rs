//! Alternation pattern construction.
//!
//! Builds one word-boundary-anchored alternation out of a list of literal
//! phrases and compiles it. Building the pattern string is pure and kept
//! separate from compilation so the exact pattern can be inspected.

use regex::{Regex, RegexBuilder};

use crate::config::MatcherConfig;
use crate::error::Result;

/// Build the alternation pattern for a priority-ordered phrase list.
///
/// Each phrase is escaped so it matches literally, then all phrases are
/// joined into a single capturing group anchored on both sides by an ASCII
/// word boundary: `(?-u:\b)(p1|p2|...)(?-u:\b)`. Only `[0-9A-Za-z_]` count
/// as word characters, so a phrase next to a non-ASCII letter still matches.
/// The alternation order is the phrase order, and the regex engine prefers
/// earlier alternatives, so callers pass the list longest first.
///
/// Returns `None` for an empty list: an empty group would match the empty
/// string at every word boundary.
pub fn build_pattern<S: AsRef<str>>(phrases: &[S]) -> Option<String> {
    if phrases.is_empty() {
        return None;
    }

    let alternation = phrases
        .iter()
        .map(|phrase| regex::escape(phrase.as_ref()))
        .collect::<Vec<_>>()
        .join("|");

    Some(format!(r"(?-u:\b)({alternation})(?-u:\b)"))
}

/// Compile a pattern produced by [`build_pattern`] as a case-insensitive regex.
pub fn compile_pattern(pattern: &str, config: &MatcherConfig) -> Result<Regex> {
    let regex = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .size_limit(config.size_limit)
        .dfa_size_limit(config.dfa_size_limit)
        .build()?;

    Ok(regex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StopscanError;

    #[test]
    fn test_build_pattern_single() {
        assert_eq!(build_pattern(&["the"]).as_deref(), Some(r"(?-u:\b)(the)(?-u:\b)"));
    }

    #[test]
    fn test_build_pattern_preserves_order() {
        let pattern = build_pattern(&["for the most part", "for"]).unwrap();
        assert_eq!(pattern, r"(?-u:\b)(for the most part|for)(?-u:\b)");
    }

    #[test]
    fn test_build_pattern_escapes_metacharacters() {
        let phrases = ["c++", "a.b", "(x|y)", "$5", "[?]", r"back\slash"];
        let pattern = build_pattern(&phrases).unwrap();
        let regex = compile_pattern(&pattern, &MatcherConfig::default()).unwrap();

        assert!(regex.is_match("use a.b here"));
        assert!(!regex.is_match("use axb here"));
        assert!(regex.is_match(r"a back\slash b"));
        assert!(!regex.is_match("x"));
        assert!(!regex.is_match("y"));
    }

    #[test]
    fn test_build_pattern_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(build_pattern(&empty), None);
    }

    #[test]
    fn test_compile_is_case_insensitive() {
        let pattern = build_pattern(&["the"]).unwrap();
        let regex = compile_pattern(&pattern, &MatcherConfig::default()).unwrap();
        assert!(regex.is_match("THE end"));
        assert!(regex.is_match("tHe end"));
    }

    #[test]
    fn test_compile_respects_word_boundaries() {
        let pattern = build_pattern(&["cat"]).unwrap();
        let regex = compile_pattern(&pattern, &MatcherConfig::default()).unwrap();
        assert!(regex.is_match("a cat."));
        assert!(!regex.is_match("category"));
        assert!(!regex.is_match("bobcat"));
        assert!(!regex.is_match("cat_food"));
    }

    #[test]
    fn test_compile_uses_ascii_word_boundaries() {
        let pattern = build_pattern(&["na", "the"]).unwrap();
        let regex = compile_pattern(&pattern, &MatcherConfig::default()).unwrap();
        assert!(regex.is_match("naïve"));
        assert!(regex.is_match("éthe"));
        assert!(!regex.is_match("nab"));
    }

    #[test]
    fn test_compile_size_limit_exceeded() {
        let phrases: Vec<String> = (0..2000).map(|i| format!("phrase number {i}")).collect();
        let pattern = build_pattern(&phrases).unwrap();
        let config = MatcherConfig::builder().size_limit(1024).build();

        let err = compile_pattern(&pattern, &config).unwrap_err();
        assert!(matches!(err, StopscanError::InvalidPattern(_)));
    }
}
