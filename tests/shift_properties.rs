use caesar_breaker::{analyze_frequency, decrypt, encrypt, is_likely_english, Decryptor, Shift};
use proptest::prelude::*;

proptest! {
    #[test]
    fn decrypt_then_reverse_is_identity(s in ".{0,200}", shift in any::<i32>()) {
        let shift = i64::from(shift);
        prop_assert_eq!(decrypt(&decrypt(&s, shift), -shift), s);
    }

    #[test]
    fn zero_shift_is_identity(s in ".{0,200}") {
        prop_assert_eq!(decrypt(&s, 0), s);
    }

    #[test]
    fn shifts_are_periodic(s in "[a-zA-Z0-9 ,.!]{0,100}", shift in -1000i64..1000) {
        let base = decrypt(&s, shift);
        prop_assert_eq!(&decrypt(&s, shift + 26), &base);
        prop_assert_eq!(&decrypt(&s, shift - 26), &base);
    }

    #[test]
    fn encrypt_matches_negated_decrypt(s in ".{0,100}", shift in -100i64..100) {
        prop_assert_eq!(encrypt(&s, shift), decrypt(&s, -shift));
    }

    #[test]
    fn shift_key_agrees_with_free_function(s in ".{0,100}", shift in -100i64..100) {
        prop_assert_eq!(Shift::new(shift).decrypt(&s), decrypt(&s, shift));
    }

    #[test]
    fn non_letters_never_change(s in ".{0,100}", shift in 0i64..26) {
        let out = decrypt(&s, shift);
        prop_assert_eq!(out.chars().count(), s.chars().count());
        for (a, b) in s.chars().zip(out.chars()) {
            if !a.is_ascii_alphabetic() {
                prop_assert_eq!(a, b);
            } else {
                prop_assert_eq!(a.is_ascii_uppercase(), b.is_ascii_uppercase());
            }
        }
    }

    #[test]
    fn frequencies_sum_to_about_100(s in "[a-zA-Z ]{1,300}") {
        prop_assume!(s.chars().any(|c| c.is_ascii_alphabetic()));
        let report = analyze_frequency(&s).unwrap();
        let total: f64 = report.frequencies.values().sum();
        let tolerance = 0.01 * report.frequencies.len() as f64;
        prop_assert!((total - 100.0).abs() <= tolerance, "total {}", total);
    }

    #[test]
    fn text_without_letters_is_never_english(s in "[0-9 ,.!?\\-]{0,50}") {
        prop_assert!(!is_likely_english(&s));
    }
}
