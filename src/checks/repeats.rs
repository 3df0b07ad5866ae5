//! Consecutive-occurrence detection.

/// Returns `true` iff any single character repeats `max` or more times
/// consecutively in `text`.
pub(crate) fn has_repeated_run(text: &str, max: usize) -> bool {
    if max == 0 {
        return false;
    }
    let mut prev: Option<char> = None;
    let mut run = 0usize;
    for c in text.chars() {
        if prev == Some(c) {
            run += 1;
        } else {
            prev = Some(c);
            run = 1;
        }
        if run >= max {
            return true;
        }
    }
    false
}
