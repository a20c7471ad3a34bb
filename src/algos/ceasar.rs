use crate::structs::Shift;
use crate::traits::{Decryptor, Encryptor};

fn rotate(c: char, by: u8) -> char {
    let base = match c {
        'A'..='Z' => b'A',
        'a'..='z' => b'a',
        _ => return c,
    };
    (base + (c as u8 - base + by) % 26) as char
}

/// Moves every ASCII letter forward by `shift`, keeping its case. Anything
/// else passes through untouched.
fn caesar_cipher(text: &str, shift: Shift) -> String {
    text.chars().map(|c| rotate(c, shift.value())).collect()
}

/// Decrypts `text` that was encrypted with `shift`. Any integer is accepted
/// and reduced modulo 26 first.
pub fn decrypt(text: &str, shift: i64) -> String {
    caesar_cipher(text, Shift::new(shift).inverse())
}

/// Same as `decrypt` with the shift negated.
pub fn encrypt(text: &str, shift: i64) -> String {
    caesar_cipher(text, Shift::new(shift))
}

impl Encryptor for Shift {
    fn encrypt(&self, message: &str) -> String {
        caesar_cipher(message, *self)
    }
}

impl Decryptor for Shift {
    fn decrypt(&self, message: &str) -> String {
        caesar_cipher(message, self.inverse())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decrypt_keeps_case_and_non_letters() {
        assert_eq!(decrypt("AB12 cd!", 3), "XY12 za!");
    }

    #[test]
    fn decrypt_known_message() {
        assert_eq!(
            decrypt("WKLV LV D VHFUHW PHVVDJH", 3),
            "THIS IS A SECRET MESSAGE"
        );
        assert_eq!(decrypt("KHOOR ZRUOG", 3), "HELLO WORLD");
    }

    #[test]
    fn out_of_range_shifts_are_normalized() {
        assert_eq!(decrypt("abc", -1), decrypt("abc", 25));
        assert_eq!(decrypt("abc", 29), decrypt("abc", 3));
        assert_eq!(decrypt("abc", i64::MIN), decrypt("abc", i64::MIN.rem_euclid(26)));
    }

    #[test]
    fn non_latin_letters_pass_through() {
        assert_eq!(decrypt("Ünïcødé ß 日本", 5), "Üiïxøyé ß 日本");
    }

    #[test]
    fn encrypt_is_decrypt_with_negated_shift() {
        assert_eq!(encrypt("Hello, World", 3), "Khoor, Zruog");
        assert_eq!(encrypt("Hello, World", 3), decrypt("Hello, World", -3));
    }

    #[test]
    fn shift_traits_invert_each_other() {
        let key = Shift::new(11);
        let secret = key.encrypt("Attack at dawn");
        assert_ne!(secret, "Attack at dawn");
        assert_eq!(key.decrypt(&secret), "Attack at dawn");
        assert_eq!(key.decrypt(&secret), decrypt(&secret, 11));
    }
}
