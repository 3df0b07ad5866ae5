//! Reference alphabets and numeral sequences for sequential-run detection.

/// Latin lowercase alphabet in standard order.
pub(crate) const LATIN_LOWER: &str = "abcdefghijklmnopqrstuvwxyz";

/// Arabic abjad in Hijaʼi (common dictionary) order.
pub(crate) const ARABIC_HIJAI: &str = "أبتثجحخدذرزسشصضطظعغفقكلمنهوي";

/// Arabic abjad in Abjadi (numerical-value) order. Distinct from the
/// Hijaʼi ordering; either is colloquially "sequential" to native
/// speakers, so both are checked independently.
pub(crate) const ARABIC_ABJADI: &str = "أبجدهوزحطيكلمنسعفصقرشت";

/// ASCII digits in ascending order.
pub(crate) const ASCII_DIGITS: &str = "0123456789";

/// Arabic-Indic digits in ascending order.
pub(crate) const ARABIC_INDIC_DIGITS: &str = "٠١٢٣٤٥٦٧٨٩";

/// Returns every contiguous window of `length` characters of `sequence`,
/// sliding by one position.
///
/// If `length` exceeds the sequence size, returns a single window
/// covering the whole sequence.
pub(crate) fn windows(sequence: &str, length: usize) -> Vec<String> {
    let chars: Vec<char> = sequence.chars().collect();
    if length == 0 {
        return Vec::new();
    }
    if length >= chars.len() {
        return vec![sequence.to_string()];
    }
    chars.windows(length).map(|w| w.iter().collect()).collect()
}
