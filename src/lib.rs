//! Caesar cipher cryptanalysis: manual decryption at a chosen shift,
//! brute-force enumeration of all 26 shifts with English-likeness
//! highlighting, and frequency-analysis-based shift suggestion.

#[macro_use]
extern crate lazy_static;

pub mod algos;
pub mod constants;
pub mod errors;
pub mod structs;
pub mod traits;
pub mod utils;

pub use crate::algos::brute_force::brute_force;
pub use crate::algos::ceasar::{decrypt, encrypt};
pub use crate::algos::frequency::analyze_frequency;
pub use crate::algos::plausibility::is_likely_english;
pub use crate::errors::{CipherError, Result};
pub use crate::structs::{DecryptionCandidate, FrequencyReport, FrequencySummary, Shift};
pub use crate::traits::{Decryptor, Encryptor};
