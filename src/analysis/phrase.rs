//! Stop-phrase list normalization.

use std::cmp::Reverse;
use std::ops::Deref;

/// A normalized, priority-ordered list of stop phrases.
///
/// Every entry is trimmed, lowercased and non-empty. Entries are ordered by
/// descending character length so that a longer phrase is always tried
/// before any shorter phrase it contains. Phrases of equal length keep the
/// order in which they appeared in the source list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopPhrases {
    phrases: Vec<String>,
}

impl StopPhrases {
    /// Parse a newline-delimited stopword list.
    ///
    /// Lines may end in `\n` or `\r\n`. A byte order mark at either end of a
    /// line is trimmed like whitespace. Blank lines are dropped. Duplicates are
    /// kept; they do not change what the matcher finds.
    pub fn parse(list: &str) -> Self {
        let mut phrases: Vec<String> = list
            .lines()
            .map(|line| line.trim_matches(is_trimmable).to_lowercase())
            .filter(|line| !line.is_empty())
            .collect();

        phrases.sort_by_key(|phrase| Reverse(phrase.chars().count()));

        Self { phrases }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.phrases
    }
}

fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

impl Deref for StopPhrases {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.phrases
    }
}
