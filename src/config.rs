use serde::{Deserialize, Serialize};

/// Default limit on the compiled program size, in bytes.
pub const DEFAULT_SIZE_LIMIT: usize = 64 * (1 << 20);

/// Default cache budget for the lazy DFA, in bytes.
pub const DEFAULT_DFA_SIZE_LIMIT: usize = 16 * (1 << 20);

/// Configuration for building a [`StopwordMatcher`](crate::StopwordMatcher).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Upper bound on the size of the compiled alternation.
    /// Lists that exceed it fail with `InvalidPattern`.
    pub size_limit: usize,

    /// Upper bound on the lazy DFA cache used while scanning.
    pub dfa_size_limit: usize,

    /// Fail construction when the list holds no phrases after normalization.
    /// When false, an empty list yields a matcher that matches nothing.
    pub reject_empty: bool,
}

impl MatcherConfig {
    pub fn new() -> Self {
        Self {
            size_limit: DEFAULT_SIZE_LIMIT,
            dfa_size_limit: DEFAULT_DFA_SIZE_LIMIT,
            reject_empty: false,
        }
    }

    pub fn builder() -> MatcherConfigBuilder {
        MatcherConfigBuilder::default()
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default)]
pub struct MatcherConfigBuilder {
    size_limit: Option<usize>,
    dfa_size_limit: Option<usize>,
    reject_empty: bool,
}

impl MatcherConfigBuilder {
    pub fn size_limit(mut self, bytes: usize) -> Self {
        self.size_limit = Some(bytes);
        self
    }

    pub fn dfa_size_limit(mut self, bytes: usize) -> Self {
        self.dfa_size_limit = Some(bytes);
        self
    }

    pub fn reject_empty(mut self, reject: bool) -> Self {
        self.reject_empty = reject;
        self
    }

    pub fn build(self) -> MatcherConfig {
        MatcherConfig {
            size_limit: self.size_limit.unwrap_or(DEFAULT_SIZE_LIMIT),
            dfa_size_limit: self.dfa_size_limit.unwrap_or(DEFAULT_DFA_SIZE_LIMIT),
            reject_empty: self.reject_empty,
        }
    }
}
