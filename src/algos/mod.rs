pub mod brute_force;
pub mod ceasar;
pub mod frequency;
pub mod plausibility;
