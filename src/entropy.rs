//! Entropy calculator.
//!
//! Treats every position as an independent uniform draw over the alphabet,
//! so structured passwords are over-estimated. Callers rely on that exact
//! figure for scoring.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::charset::{CharsetOptions, charset_size};
use crate::config::EntropyThresholds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum EntropyRating {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl fmt::Display for EntropyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntropyRating::Poor => "Poor",
            EntropyRating::Fair => "Fair",
            EntropyRating::Good => "Good",
            EntropyRating::Excellent => "Excellent",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyCalculator {
    thresholds: EntropyThresholds,
}

impl EntropyCalculator {
    pub fn new(thresholds: EntropyThresholds) -> Self {
        Self { thresholds }
    }

    /// `length * log2(charset_size)`, or `0.0` when either is zero.
    pub fn entropy(length: usize, charset_size: usize) -> f64 {
        if length == 0 || charset_size == 0 {
            return 0.0;
        }
        length as f64 * (charset_size as f64).log2()
    }

    /// `charset_size ^ length` as a float; saturates to infinity for huge keyspaces.
    pub fn combinations(length: usize, charset_size: usize) -> f64 {
        if length == 0 || charset_size == 0 {
            return 0.0;
        }
        (charset_size as f64).powi(i32::try_from(length).unwrap_or(i32::MAX))
    }

    /// Entropy of a password generated with `options`.
    pub fn entropy_from_options(length: usize, options: &CharsetOptions) -> f64 {
        Self::entropy(length, charset_size(options))
    }

    pub fn rating(&self, bits: f64) -> EntropyRating {
        if bits >= self.thresholds.excellent {
            EntropyRating::Excellent
        } else if bits >= self.thresholds.good {
            EntropyRating::Good
        } else if bits >= self.thresholds.fair {
            EntropyRating::Fair
        } else {
            EntropyRating::Poor
        }
    }
}
