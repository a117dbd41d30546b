//! Word-level text manipulation.

/// Reverse the order of whitespace-delimited words.
///
/// Each word's internal character order is preserved. Whitespace runs
/// collapse to a single space and surrounding whitespace is dropped, so
/// reversing twice round-trips only single-spaced text.
pub fn reverse_string(text: &str) -> String {
    let mut words: Vec<&str> = text.split_whitespace().collect();
    words.reverse();
    words.join(" ")
}

/// Check whether text reads the same forwards and backwards.
///
/// Comparison ignores case and anything that is not an ASCII letter or
/// digit. Text that normalizes to zero or one character is trivially a
/// palindrome.
pub fn is_palindrome(text: &str) -> bool {
    let normalized: Vec<char> = text
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    normalized.iter().eq(normalized.iter().rev())
}
