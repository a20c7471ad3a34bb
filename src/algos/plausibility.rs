use crate::constants::{COMMON_WORDS, MATCH_RATIO, MIN_WORD_LEN};

/// Coarse check for whether a candidate decryption reads like English.
///
/// The text is uppercased, stripped of everything but ASCII letters and
/// whitespace, and split into words. It passes when at least
/// `max(1, floor(MATCH_RATIO * words))` of those words are longer than
/// `MIN_WORD_LEN` and appear in the common word list. Empty text never passes.
pub fn is_likely_english(text: &str) -> bool {
    let cleaned: String = text
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_whitespace())
        .collect();

    let words: Vec<&str> = cleaned.split_whitespace().collect();
    let matches = words
        .iter()
        .filter(|word| word.len() > MIN_WORD_LEN && COMMON_WORDS.contains(*word))
        .count();

    matches >= threshold(words.len())
}

fn threshold(word_count: usize) -> usize {
    ((word_count as f64 * MATCH_RATIO).floor() as usize).max(1)
}
