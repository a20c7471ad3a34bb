use std::collections::{BTreeMap, HashSet};

pub const ALPHABET_LEN: i64 = 26;

pub const MOST_FREQUENT_ENGLISH: char = 'E';

/// A token counts towards plausibility only when strictly longer than this.
pub const MIN_WORD_LEN: usize = 2;

/// Share of tokens that must be common words for a candidate to look like English.
pub const MATCH_RATIO: f64 = 0.3;

pub const TOP_LETTERS: usize = 10;

/// Relative letter frequencies of English text, in percent.
pub const ENGLISH_FREQUENCY_TABLE: [(char, f64); 26] = [
    ('E', 12.02),
    ('T', 9.10),
    ('A', 8.12),
    ('O', 7.68),
    ('I', 6.97),
    ('N', 6.75),
    ('S', 6.33),
    ('H', 6.09),
    ('R', 5.99),
    ('D', 4.25),
    ('L', 4.03),
    ('C', 2.78),
    ('U', 2.76),
    ('M', 2.41),
    ('W', 2.36),
    ('F', 2.23),
    ('G', 2.02),
    ('Y', 1.97),
    ('P', 1.93),
    ('B', 1.29),
    ('V', 0.98),
    ('K', 0.77),
    ('J', 0.15),
    ('X', 0.15),
    ('Q', 0.10),
    ('Z', 0.07),
];

// Two-letter entries never pass the length filter; they stay so the list
// reads like ordinary English.
pub const COMMON_WORD_LIST: &[&str] = &[
    "THE", "AND", "FOR", "ARE", "BUT", "NOT", "YOU", "ALL", "CAN", "HER", "WAS", "ONE", "OUR",
    "HAD", "BY", "WORD", "WHAT", "SAID", "EACH", "WHICH", "SHE", "DO", "HOW", "THEIR", "IF",
    "WILL", "UP", "OTHER", "ABOUT", "OUT", "MANY", "THEN", "THEM", "THESE", "SO", "SOME", "WOULD",
    "MAKE", "LIKE", "INTO", "HIM", "IS", "HAS", "TWO", "MORE", "VERY", "TO", "OF", "IN", "IT",
    "WITH", "BE", "THIS", "HAVE", "FROM",
];

/// Sample ciphertexts, all encrypted with shift 3.
pub const EXAMPLES: [(&str, &str); 3] = [
    ("WKLV LV D VHFUHW PHVVDJH", "Secret Message"),
    ("FDHVDU FLSKHU LV HDV WR FUDFN", "About Caesar Cipher"),
    ("KHOOR ZRUOG", "Classic Greeting"),
];

lazy_static! {
    pub static ref ENGLISH_FREQUENCIES: BTreeMap<char, f64> =
        ENGLISH_FREQUENCY_TABLE.iter().copied().collect();
    pub static ref COMMON_WORDS: HashSet<&'static str> =
        COMMON_WORD_LIST.iter().copied().collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_table_covers_alphabet_and_sums_to_about_100() {
        assert_eq!(ENGLISH_FREQUENCIES.len(), 26);
        assert!(('A'..='Z').all(|c| ENGLISH_FREQUENCIES.contains_key(&c)));

        let total: f64 = ENGLISH_FREQUENCIES.values().sum();
        assert!((total - 100.0).abs() < 1.0, "total was {total}");
    }

    #[test]
    fn common_words_are_uppercase() {
        assert!(COMMON_WORDS.len() >= 50);
        assert!(COMMON_WORDS
            .iter()
            .all(|w| w.chars().all(|c| c.is_ascii_uppercase())));
    }
}
