//! Stopword analysis.
//!
//! Analysis happens in two phases:
//!
//! ```text
//! Build: List → StopPhrases → Pattern → Compiled Matcher
//! Scan:  Text → Lowercase → Matches → Cleaned Text → Tokens → AnalysisResult
//! ```
//!
//! # Modules
//!
//! - [`phrase`]: Stopword list parsing and priority ordering
//! - [`pattern`]: Escaped alternation building and compilation
//! - [`matcher`]: The reusable [`StopwordMatcher`]
//! - [`tokenizer`]: ASCII alphanumeric tokenization
//! - [`result`]: Analysis output types

pub mod matcher;
pub mod pattern;
pub mod phrase;
pub mod result;
pub mod tokenizer;

// Re-exports
pub use matcher::StopwordMatcher;
pub use pattern::{build_pattern, compile_pattern};
pub use phrase::StopPhrases;
pub use result::{AnalysisResult, StopwordMatch};
pub use tokenizer::tokenize;
