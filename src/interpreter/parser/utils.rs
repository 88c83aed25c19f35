/// Returns `true` if `word` is a number literal: one or more ASCII digits.
#[must_use]
pub fn is_number(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit())
}

/// Returns `true` if `word` is a valid variable name: one or more ASCII
/// letters.
///
/// # Example
/// ```
/// use smartcalc::interpreter::parser::utils::is_identifier;
///
/// assert!(is_identifier("total"));
/// assert!(!is_identifier("total2"));
/// assert!(!is_identifier("snake_case"));
/// assert!(!is_identifier(""));
/// ```
#[must_use]
pub fn is_identifier(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Returns `true` if `word` contains both ASCII letters and ASCII digits.
///
/// Such a word is neither a number nor a variable name and is reported as an
/// invalid identifier rather than an invalid expression.
#[must_use]
pub fn is_mixed_identifier(word: &str) -> bool {
    word.bytes().any(|b| b.is_ascii_alphabetic()) && word.bytes().any(|b| b.is_ascii_digit())
}
