use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// One stop-phrase occurrence found while scanning a text.
///
/// `start` and `end` are byte offsets into the lowercased text the scan ran
/// over, not into the caller's original string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopwordMatch {
    /// The matched phrase, lowercased.
    pub phrase: String,
    pub start: usize,
    pub end: usize,
}

/// Outcome of analyzing a single text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Distinct stop phrases found, in order of first occurrence.
    pub stopwords_found: Vec<String>,

    /// Distinct content tokens left after stop phrases were removed,
    /// in order of first occurrence.
    pub non_stopwords: Vec<String>,

    /// `stopwords_found.len() / non_stopwords.len()`, or `None` when there
    /// are no content tokens.
    pub ratio: Option<f64>,
}

impl AnalysisResult {
    pub(crate) fn new(stopwords_found: Vec<String>, non_stopwords: Vec<String>) -> Self {
        let ratio = if non_stopwords.is_empty() {
            None
        } else {
            Some(stopwords_found.len() as f64 / non_stopwords.len() as f64)
        };

        Self {
            stopwords_found,
            non_stopwords,
            ratio,
        }
    }
}

/// Collect items into a `Vec`, keeping only the first occurrence of each.
pub(crate) fn unique_in_order<I, T>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut seen: AHashSet<String> = AHashSet::new();
    let mut unique = Vec::new();

    for item in items {
        let item = item.as_ref();
        if !seen.contains(item) {
            seen.insert(item.to_owned());
            unique.push(item.to_owned());
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_computed() {
        let result = AnalysisResult::new(
            vec!["the".to_string()],
            vec!["cat".to_string(), "dog".to_string()],
        );
        assert_eq!(result.ratio, Some(0.5));
    }

    #[test]
    fn test_ratio_absent_without_tokens() {
        let result = AnalysisResult::new(vec!["the".to_string()], Vec::new());
        assert_eq!(result.ratio, None);

        let result = AnalysisResult::new(Vec::new(), Vec::new());
        assert_eq!(result.ratio, None);
    }

    #[test]
    fn test_ratio_zero_without_stopwords() {
        let result = AnalysisResult::new(Vec::new(), vec!["cat".to_string()]);
        assert_eq!(result.ratio, Some(0.0));
    }

    #[test]
    fn test_unique_in_order() {
        let unique = unique_in_order(["b", "a", "b", "c", "a"]);
        assert_eq!(unique, vec!["b", "a", "c"]);
    }
}
