pub mod generator;
pub mod manager;
pub mod player;
pub mod ranking;
pub mod retirement;

use crate::logic::types::convert;

// Anything that grows old and may retire.
pub trait Aging {
    fn age(&self) -> u8;
    fn vitality(&self) -> f64;
}

// Arithmetic mean, 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / convert::usize_to_f64(values.len())
}
