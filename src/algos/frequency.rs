use std::cmp::Ordering;
use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::algos::ceasar::decrypt;
use crate::constants::{ENGLISH_FREQUENCIES, MOST_FREQUENT_ENGLISH};
use crate::errors::{CipherError, Result};
use crate::structs::{FrequencyReport, FrequencySummary, LetterComparison, Shift};
use crate::utils::round2;

/// Counts letter frequencies in `text` and suggests the shift that would turn
/// its most frequent letter into 'E'.
///
/// Ties for the most frequent letter go to the alphabetically first letter.
pub fn analyze_frequency(text: &str) -> Result<FrequencyReport> {
    let mut counts: BTreeMap<char, usize> = BTreeMap::new();
    for c in text.chars().filter(char::is_ascii_alphabetic) {
        *counts.entry(c.to_ascii_uppercase()).or_insert(0) += 1;
    }

    let total_letters: usize = counts.values().sum();
    if total_letters == 0 {
        warn!("frequency analysis refused: no letters");
        return Err(CipherError::invalid_input(
            "frequency analysis needs at least one letter",
        ));
    }

    let frequencies: BTreeMap<char, f64> = counts
        .iter()
        .map(|(&letter, &count)| {
            (letter, round2(count as f64 / total_letters as f64 * 100.0))
        })
        .collect();

    // Raw counts avoid ties introduced by rounding.
    let mut top_letter = MOST_FREQUENT_ENGLISH;
    let mut top_count = 0;
    for (&letter, &count) in &counts {
        if count > top_count {
            top_letter = letter;
            top_count = count;
        }
    }

    let suggested_shift = Shift::new(top_letter as i64 - MOST_FREQUENT_ENGLISH as i64);
    let suggested_text = decrypt(text, i64::from(suggested_shift.value()));

    debug!(%top_letter, %suggested_shift, total_letters, "frequency analysis finished");

    Ok(FrequencyReport {
        frequencies,
        counts,
        total_letters,
        text_length: text.chars().count(),
        top_letter,
        suggested_shift,
        suggested_text,
    })
}

impl FrequencyReport {
    /// The `n` most frequent ciphertext letters with their percentages.
    ///
    /// Ranked on raw counts, like `top_letter`, so the first entry always
    /// names the letter the suggestion is based on.
    pub fn top_observed(&self, n: usize) -> Vec<(char, f64)> {
        let mut ranked: Vec<(char, usize)> =
            self.counts.iter().map(|(&c, &count)| (c, count)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        ranked
            .into_iter()
            .take(n)
            .map(|(c, _)| (c, self.frequencies.get(&c).copied().unwrap_or(0.0)))
            .collect()
    }

    pub fn top_reference(n: usize) -> Vec<(char, f64)> {
        let mut ranked: Vec<(char, f64)> =
            ENGLISH_FREQUENCIES.iter().map(|(&c, &f)| (c, f)).collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        ranked.truncate(n);
        ranked
    }

    /// Everything a host needs to show the analysis next to English.
    pub fn summary(&self, top: usize) -> FrequencySummary<'_> {
        FrequencySummary {
            report: self,
            top_observed: self.top_observed(top),
            top_reference: Self::top_reference(top),
            comparison: self.comparison(),
        }
    }

    /// All 26 letters with English and ciphertext percentages side by side.
    pub fn comparison(&self) -> Vec<LetterComparison> {
        ('A'..='Z')
            .map(|letter| LetterComparison {
                letter,
                english: ENGLISH_FREQUENCIES.get(&letter).copied().unwrap_or(0.0),
                ciphertext: self.frequencies.get(&letter).copied().unwrap_or(0.0),
            })
            .collect()
    }
}
