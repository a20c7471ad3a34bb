use crate::constants::ALPHABET_LEN;

pub fn normalize_shift(shift: i64) -> u8 {
    shift.rem_euclid(ALPHABET_LEN) as u8
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
