/// Split text into runs of ASCII letters and digits.
///
/// Every other character is a delimiter, and empty segments produced by
/// adjacent or leading/trailing delimiters are dropped. No case folding
/// happens here; the matcher lowercases text before it gets this far.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|s| !s.is_empty())
}
