//! Engine configuration.
//!
//! A single immutable value handed to each component's constructor. There is
//! no ambient global state: two generators built from different configs never
//! observe each other.

use crate::error::{PasswordError, Result};

/// Shortest password the generator accepts.
pub const MIN_PASSWORD_LENGTH: usize = 4;
/// Longest password the generator accepts.
pub const MAX_PASSWORD_LENGTH: usize = 128;
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;
/// Assumed attacker throughput, in guesses per second.
pub const BRUTE_FORCE_RATE: f64 = 1_000_000_000.0;

/// Score thresholds separating the four strength labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthThresholds {
    /// Scores below this are `Weak`.
    pub weak: u8,
    /// Scores below this (and at least `weak`) are `Medium`.
    pub medium: u8,
    /// Scores at or above this are `Very Strong`.
    pub strong: u8,
}

impl Default for StrengthThresholds {
    fn default() -> Self {
        Self {
            weak: 40,
            medium: 60,
            strong: 80,
        }
    }
}

/// Entropy thresholds (bits) used for the qualitative entropy rating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropyThresholds {
    pub fair: f64,
    pub good: f64,
    pub excellent: f64,
}

impl Default for EntropyThresholds {
    fn default() -> Self {
        Self {
            fair: 40.0,
            good: 60.0,
            excellent: 80.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub min_length: usize,
    pub max_length: usize,
    pub default_length: usize,
    pub brute_force_rate: f64,
    pub thresholds: StrengthThresholds,
    pub entropy_thresholds: EntropyThresholds,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_length: MIN_PASSWORD_LENGTH,
            max_length: MAX_PASSWORD_LENGTH,
            default_length: DEFAULT_PASSWORD_LENGTH,
            brute_force_rate: BRUTE_FORCE_RATE,
            thresholds: StrengthThresholds::default(),
            entropy_thresholds: EntropyThresholds::default(),
        }
    }
}

impl EngineConfig {
    /// Checks the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns `PasswordError::InvalidConfig` if:
    /// - `min_length` is zero or greater than `max_length`
    /// - `default_length` falls outside `[min_length, max_length]`
    /// - `brute_force_rate` is not a positive finite number
    /// - either threshold table is not strictly ascending
    pub fn validate(&self) -> Result<()> {
        if self.min_length == 0 {
            return Err(PasswordError::InvalidConfig(
                "min_length must be at least 1".to_string(),
            ));
        }
        if self.min_length > self.max_length {
            return Err(PasswordError::InvalidConfig(format!(
                "min_length {} exceeds max_length {}",
                self.min_length, self.max_length
            )));
        }
        if !(self.min_length..=self.max_length).contains(&self.default_length) {
            return Err(PasswordError::InvalidConfig(format!(
                "default_length {} outside [{}, {}]",
                self.default_length, self.min_length, self.max_length
            )));
        }
        if !self.brute_force_rate.is_finite() || self.brute_force_rate <= 0.0 {
            return Err(PasswordError::InvalidConfig(
                "brute_force_rate must be a positive number".to_string(),
            ));
        }

        let t = &self.thresholds;
        if !(t.weak < t.medium && t.medium < t.strong && t.strong <= 100) {
            return Err(PasswordError::InvalidConfig(
                "strength thresholds must be ascending and within 0-100".to_string(),
            ));
        }

        let e = &self.entropy_thresholds;
        if !(e.fair < e.good && e.good < e.excellent) {
            return Err(PasswordError::InvalidConfig(
                "entropy thresholds must be ascending".to_string(),
            ));
        }

        Ok(())
    }
}
