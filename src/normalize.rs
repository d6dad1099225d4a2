//! Token normalization for training passages and query fragments.

/// Returns true for characters dropped during normalization.
fn is_punctuation(ch: char) -> bool {
    ch.is_ascii_punctuation()
        || matches!(
            ch,
            '\u{2018}'..='\u{201F}' // curly quotes
                | '\u{2010}'..='\u{2015}' // hyphens and dashes
                | '\u{2026}' // ellipsis
                | '\u{00A1}' // inverted exclamation
                | '\u{00BF}' // inverted question
                | '\u{00AB}'
                | '\u{00BB}'
        )
}

/// Trims, lowercases and strips punctuation from a single word.
///
/// An empty result means the input held no usable token.
///
/// ```
/// use autocomplete::normalize::normalize;
///
/// assert_eq!(normalize("  Hello, "), "hello");
/// assert_eq!(normalize("don't"), "dont");
/// assert_eq!(normalize("..."), "");
/// ```
pub fn normalize(word: &str) -> String {
    let stripped: String = word
        .chars()
        .filter(|ch| !is_punctuation(*ch))
        .flat_map(char::to_lowercase)
        .collect();
    // Trim last: stripping can expose whitespace that sat next to punctuation.
    stripped.trim().to_string()
}

/// Splits a passage on whitespace and yields every non-empty normalized token.
pub fn tokens(passage: &str) -> impl Iterator<Item = String> + '_ {
    passage
        .split_whitespace()
        .map(normalize)
        .filter(|token| !token.is_empty())
}
