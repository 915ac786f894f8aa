//! # Stopscan
//!
//! Stopword and stop-phrase detection over free-form text.
//!
//! A [`StopwordMatcher`] compiles a newline-delimited list of stop phrases
//! into a single word-boundary-anchored pattern, then analyzes texts against
//! it: which stop phrases occur, which content tokens remain, and the ratio
//! between the two.
//!
//! ## Features
//!
//! - Longest-phrase-first matching ("for the most part" beats "for")
//! - Whole-word matching only ("cat" never matches inside "category")
//! - Case-insensitive on both the list and the text
//! - Immutable, thread-safe matcher; parallel batch analysis with `rayon`
//!
//! ```
//! use stopscan::StopwordMatcher;
//!
//! let matcher = StopwordMatcher::new("the\nfor the most part").unwrap();
//! let result = matcher.analyze("For the most part, the cat slept.");
//!
//! assert_eq!(result.stopwords_found, vec!["for the most part", "the"]);
//! assert_eq!(result.non_stopwords, vec!["cat", "slept"]);
//! ```

pub mod analysis;
pub mod config;
pub mod error;

// Re-exports for the public API
pub use analysis::{AnalysisResult, StopPhrases, StopwordMatch, StopwordMatcher, tokenize};
pub use config::{MatcherConfig, MatcherConfigBuilder};
pub use error::{Result, StopscanError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
