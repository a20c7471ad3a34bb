use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::utils::normalize_shift;

/// A Caesar key: the amount added to each letter during encryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Shift(u8);

impl Shift {
    pub fn new(shift: i64) -> Self {
        Shift(normalize_shift(shift))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn inverse(self) -> Self {
        Shift::new(-i64::from(self.0))
    }

    pub fn all() -> impl Iterator<Item = Shift> {
        (0..26).map(Shift)
    }
}

impl From<i64> for Shift {
    fn from(shift: i64) -> Self {
        Shift::new(shift)
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecryptionCandidate {
    pub shift: Shift,
    pub text: String,
    pub plausible: bool,
}

/// Result of frequency analysis over a ciphertext.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyReport {
    /// Percentages rounded to two decimals; only letters that occur are present.
    pub frequencies: BTreeMap<char, f64>,
    pub counts: BTreeMap<char, usize>,
    pub total_letters: usize,
    /// Length of the analysed text in characters.
    pub text_length: usize,
    pub top_letter: char,
    pub suggested_shift: Shift,
    pub suggested_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LetterComparison {
    pub letter: char,
    pub english: f64,
    pub ciphertext: f64,
}

/// A report plus its top-N rankings and the full 26-letter comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencySummary<'a> {
    #[serde(flatten)]
    pub report: &'a FrequencyReport,
    pub top_observed: Vec<(char, f64)>,
    pub top_reference: Vec<(char, f64)>,
    pub comparison: Vec<LetterComparison>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_undoes_the_shift() {
        assert_eq!(Shift::new(3).inverse(), Shift::new(23));
        assert_eq!(Shift::new(0).inverse(), Shift::new(0));
        assert_eq!(Shift::new(-5).value(), 21);
    }

    #[test]
    fn all_lists_every_key_once() {
        let keys: Vec<u8> = Shift::all().map(Shift::value).collect();
        assert_eq!(keys, (0..26).collect::<Vec<u8>>());
    }

    #[test]
    fn display_respects_padding() {
        assert_eq!(format!("{:>2}", Shift::new(7)), " 7");
    }
}
