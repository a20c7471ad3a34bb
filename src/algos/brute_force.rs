use tracing::{debug, warn};

use crate::algos::ceasar::decrypt;
use crate::algos::plausibility::is_likely_english;
use crate::errors::{CipherError, Result};
use crate::structs::{DecryptionCandidate, Shift};

/// Decrypts `text` under every shift from 0 to 25, flagging candidates that
/// look like English. Text that is empty after trimming is rejected.
pub fn brute_force(text: &str) -> Result<Vec<DecryptionCandidate>> {
    if text.trim().is_empty() {
        warn!("brute force refused: no ciphertext");
        return Err(CipherError::invalid_input("enter some encrypted text first"));
    }

    let candidates: Vec<DecryptionCandidate> = Shift::all()
        .map(|shift| {
            let text = decrypt(text, i64::from(shift.value()));
            let plausible = is_likely_english(&text);
            DecryptionCandidate {
                shift,
                text,
                plausible,
            }
        })
        .collect();

    debug!(
        plausible = candidates.iter().filter(|c| c.plausible).count(),
        "brute force finished"
    );

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_blank_text() {
        assert!(matches!(brute_force(""), Err(CipherError::InvalidInput { .. })));
        assert!(matches!(brute_force(" \t\n"), Err(CipherError::InvalidInput { .. })));
    }

    #[test]
    fn yields_every_shift_in_order() {
        let candidates = brute_force("KHOOR ZRUOG").unwrap();
        assert_eq!(candidates.len(), 26);
        for (i, candidate) in candidates.iter().enumerate() {
            assert_eq!(candidate.shift.value() as usize, i);
        }
        assert_eq!(candidates[0].text, "KHOOR ZRUOG");
        assert_eq!(candidates[3].text, "HELLO WORLD");
    }

    #[test]
    fn flags_the_secret_message() {
        let candidates = brute_force("WKLV LV D VHFUHW PHVVDJH").unwrap();
        let hit = &candidates[3];
        assert_eq!(hit.text, "THIS IS A SECRET MESSAGE");
        assert!(hit.plausible);
        assert!(!candidates[0].plausible);
    }

    #[test]
    fn text_without_letters_is_still_enumerated() {
        let candidates = brute_force("1234 !!").unwrap();
        assert!(candidates.iter().all(|c| c.text == "1234 !!" && !c.plausible));
    }
}
