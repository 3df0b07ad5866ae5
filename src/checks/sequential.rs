//! Sequential-run detection across multiple scripts and orderings.

use super::catalog::{
    ARABIC_ABJADI, ARABIC_HIJAI, ARABIC_INDIC_DIGITS, ASCII_DIGITS, LATIN_LOWER, windows,
};

/// Checks whether `text` contains an ascending run of at least `min_length`
/// consecutive letters or digits from any of the reference sequences.
///
/// Whitespace is stripped before matching and letter matching is
/// case-insensitive. For Arabic-Indic digits the effective run length is
/// `min_length - 1` (when `min_length > 1`), one shorter than for ASCII
/// digits. The reference implementation behaves this way and callers may
/// depend on it, so the asymmetry is kept rather than normalized.
pub(crate) fn has_sequential_run(text: &str, min_length: usize) -> bool {
    let stripped: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let lowered = stripped.to_lowercase();

    for alphabet in [LATIN_LOWER, ARABIC_HIJAI, ARABIC_ABJADI] {
        if windows(alphabet, min_length)
            .iter()
            .any(|w| lowered.contains(w.as_str()))
        {
            return true;
        }
    }

    let indic_run = if min_length > 1 {
        min_length - 1
    } else {
        min_length
    };
    has_ascending_digit_run(&stripped, ASCII_DIGITS, min_length)
        || has_ascending_digit_run(&stripped, ARABIC_INDIC_DIGITS, indic_run)
}

/// Looks for `min_run` contiguous positions where each holds a digit of
/// `digits` followed by its successor, or a digit at the end of a word.
///
/// This mirrors the lookahead-pair pattern of the reference implementation:
/// the run may end early on the highest digit or on a word boundary.
fn has_ascending_digit_run(text: &str, digits: &str, min_run: usize) -> bool {
    if min_run == 0 {
        return false;
    }
    let order: Vec<char> = digits.chars().collect();
    let chars: Vec<char> = text.chars().collect();
    let mut run = 0usize;

    for i in 0..chars.len() {
        let counts = match order.iter().position(|&d| d == chars[i]) {
            Some(idx) => {
                let successor = order.get(idx + 1).copied();
                match chars.get(i + 1).copied() {
                    Some(next) => Some(next) == successor || !is_word_char(next),
                    None => true,
                }
            }
            None => false,
        };
        if counts {
            run += 1;
            if run >= min_run {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
