//! Character-class counting for minimum-count rules.

/// Counts the characters of `text` that belong to `class`.
pub(crate) fn count_matching(text: &str, class: fn(char) -> bool) -> usize {
    text.chars().filter(|&c| class(c)).count()
}

/// Returns `true` (rule violated) iff `text` contains strictly fewer than
/// `min` characters of `class`.
pub(crate) fn below_minimum(text: &str, class: fn(char) -> bool, min: usize) -> bool {
    count_matching(text, class) < min
}

/// An ASCII digit.
pub(crate) fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// An uppercase letter (Unicode case).
pub(crate) fn is_upper(c: char) -> bool {
    c.is_uppercase()
}

/// A lowercase letter (Unicode case).
pub(crate) fn is_lower(c: char) -> bool {
    c.is_lowercase()
}

/// A character outside alphanumerics and whitespace. Underscore counts as
/// special here, unlike a regex word class.
pub(crate) fn is_special(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace()
}
