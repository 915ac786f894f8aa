//! The stopword matcher.
//!
//! A [`StopwordMatcher`] is built once from a newline-delimited list of stop
//! phrases and then reused for any number of analyses. It holds no scan
//! state of its own: every call keeps its position in a local cursor, so one
//! matcher can serve many threads at once.

use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use log::{debug, trace, warn};
use regex::Regex;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::analysis::pattern::{build_pattern, compile_pattern};
use crate::analysis::phrase::StopPhrases;
use crate::analysis::result::{AnalysisResult, StopwordMatch, unique_in_order};
use crate::analysis::tokenizer::tokenize;
use crate::config::MatcherConfig;
use crate::error::{Result, StopscanError};

/// Detects stop phrases in text and extracts the remaining content tokens.
///
/// # Examples
///
/// ```
/// use stopscan::StopwordMatcher;
///
/// let matcher = StopwordMatcher::new("a\nan\nthe").unwrap();
/// let result = matcher.analyze("The quick brown fox jumps over the lazy dog.");
///
/// assert_eq!(result.stopwords_found, vec!["the"]);
/// assert_eq!(result.non_stopwords.len(), 7);
/// assert_eq!(result.ratio, Some(1.0 / 7.0));
/// ```
#[derive(Debug, Clone)]
pub struct StopwordMatcher {
    phrases: StopPhrases,
    pattern: Option<String>,
    /// `None` when the phrase list is empty; such a matcher matches nothing.
    regex: Option<Regex>,
}

impl StopwordMatcher {
    /// Build a matcher from a newline-delimited stopword list with the
    /// default configuration.
    pub fn new(list: &str) -> Result<Self> {
        Self::with_config(list, MatcherConfig::default())
    }

    /// Build a matcher from a newline-delimited stopword list.
    pub fn with_config(list: &str, config: MatcherConfig) -> Result<Self> {
        let phrases = StopPhrases::parse(list);

        let Some(pattern) = build_pattern(phrases.as_slice()) else {
            if config.reject_empty {
                return Err(StopscanError::invalid_pattern(
                    "stopword list contains no phrases",
                ));
            }
            warn!("Stopword list is empty after normalization; matcher will match nothing");
            return Ok(Self {
                phrases,
                pattern: None,
                regex: None,
            });
        };

        let regex = compile_pattern(&pattern, &config)?;

        debug!(
            "Built stopword matcher: {} phrases, pattern length {} bytes",
            phrases.len(),
            pattern.len()
        );

        Ok(Self {
            phrases,
            pattern: Some(pattern),
            regex: Some(regex),
        })
    }

    /// Build a matcher from raw bytes, which must be valid UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let list = std::str::from_utf8(bytes).map_err(|e| {
            StopscanError::invalid_input(format!("stopword list is not valid UTF-8: {e}"))
        })?;
        Self::new(list)
    }

    /// Build a matcher from everything `reader` yields.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes)
    }

    /// Build a matcher from a stopword list file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// The normalized phrases, in matching priority order.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// The alternation pattern the matcher was compiled from, if any.
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Find every stop-phrase occurrence in `text`, duplicates included.
    ///
    /// The text is lowercased first; offsets refer to the lowercased copy.
    pub fn find_matches(&self, text: &str) -> Vec<StopwordMatch> {
        self.scan(&text.to_lowercase())
    }

    /// Analyze `text`, reporting distinct stop phrases, distinct content
    /// tokens, and their ratio.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let normalized = text.to_lowercase();
        let matches = self.scan(&normalized);

        let stopwords_found = unique_in_order(matches.iter().map(|m| m.phrase.as_str()));
        let cleaned = remove_matches(&normalized, &matches);
        let non_stopwords = unique_in_order(tokenize(&cleaned));

        AnalysisResult::new(stopwords_found, non_stopwords)
    }

    /// Analyze many texts. Results are returned in input order.
    #[cfg(feature = "parallel")]
    pub fn analyze_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<AnalysisResult> {
        trace!("Analyzing batch of {} texts in parallel", texts.len());
        texts.par_iter().map(|text| self.analyze(text.as_ref())).collect()
    }

    /// Analyze many texts. Results are returned in input order.
    #[cfg(not(feature = "parallel"))]
    pub fn analyze_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<AnalysisResult> {
        trace!("Analyzing batch of {} texts", texts.len());
        texts.iter().map(|text| self.analyze(text.as_ref())).collect()
    }

    /// Scan already-lowercased text from left to right.
    ///
    /// Each step asks for the leftmost match at or after `pos` and resumes at
    /// that match's end, so matches never overlap. Searching from an offset
    /// (rather than slicing) keeps the preceding character visible to `\b`.
    fn scan(&self, normalized: &str) -> Vec<StopwordMatch> {
        let Some(regex) = &self.regex else {
            return Vec::new();
        };

        let mut matches = Vec::new();
        let mut pos = 0;

        while let Some(caps) = regex.captures_at(normalized, pos) {
            let Some(phrase) = caps.get(1) else {
                break;
            };
            matches.push(StopwordMatch {
                phrase: phrase.as_str().to_owned(),
                start: phrase.start(),
                end: phrase.end(),
            });

            // Phrases are never empty, so every match moves the cursor forward.
            pos = phrase.end();
        }

        matches
    }
}

impl FromStr for StopwordMatcher {
    type Err = StopscanError;

    fn from_str(list: &str) -> Result<Self> {
        Self::new(list)
    }
}

/// Replace each matched span with a single space so the words on either side
/// stay separate tokens.
fn remove_matches(normalized: &str, matches: &[StopwordMatch]) -> String {
    let mut cleaned = String::with_capacity(normalized.len());
    let mut last = 0;

    for m in matches {
        cleaned.push_str(&normalized[last..m.start]);
        cleaned.push(' ');
        last = m.end;
    }
    cleaned.push_str(&normalized[last..]);

    cleaned
}
