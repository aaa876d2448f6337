//! Password generator.
//!
//! Draws one character from every enabled category, fills the rest from the
//! combined alphabet, then shuffles so the guaranteed characters do not sit
//! at fixed positions. Every draw comes from the OS CSPRNG and there is no
//! rejection loop: generation only fails on invalid input.

use secrecy::SecretString;
use secrecy::zeroize::Zeroize;

use crate::charset::{CharsetOptions, build_charset, required_subalphabets};
use crate::config::EngineConfig;
use crate::entropy::EntropyCalculator;
use crate::error::{PasswordError, Result};
use crate::random;

#[derive(Debug, Clone, Copy)]
pub struct PasswordGenerator {
    min_length: usize,
    max_length: usize,
    default_length: usize,
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self {
            min_length: config.min_length,
            max_length: config.max_length,
            default_length: config.default_length,
        }
    }
}

impl PasswordGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a generator from a validated configuration.
    pub fn with_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            min_length: config.min_length,
            max_length: config.max_length,
            default_length: config.default_length,
        })
    }

    /// Generates a password of exactly `length` characters.
    ///
    /// # Errors
    ///
    /// - `InvalidLength` if `length` is outside the configured bounds, or
    ///   shorter than the number of enabled categories
    /// - `InvalidCharset` if no category is enabled
    pub fn generate(&self, length: usize, options: &CharsetOptions) -> Result<SecretString> {
        if length < self.min_length || length > self.max_length {
            #[cfg(feature = "tracing")]
            tracing::warn!(length, "rejected password length");
            return Err(PasswordError::InvalidLength {
                requested: length,
                min: self.min_length,
                max: self.max_length,
            });
        }

        let charset = build_charset(options)?;
        let required = required_subalphabets(options);

        if required.len() > length {
            return Err(PasswordError::InvalidLength {
                requested: length,
                min: required.len(),
                max: self.max_length,
            });
        }

        let mut chars: Vec<u8> = Vec::with_capacity(length);
        for &alphabet in &required {
            chars.push(random::choice(alphabet)?);
        }
        for _ in required.len()..length {
            chars.push(random::choice(&charset[..])?);
        }

        let mut shuffled = random::shuffle(&chars[..]);
        chars.zeroize();

        let password: String = shuffled.iter().map(|&b| char::from(b)).collect();
        shuffled.zeroize();

        #[cfg(feature = "tracing")]
        tracing::debug!(length, categories = required.len(), "password generated");

        Ok(SecretString::new(password.into()))
    }

    /// Generates a password using the configured default length.
    pub fn generate_default(&self, options: &CharsetOptions) -> Result<SecretString> {
        self.generate(self.default_length, options)
    }

    /// Generates `count` independent passwords.
    ///
    /// The first failure aborts the batch; no partial result is returned.
    pub fn generate_multiple(
        &self,
        count: usize,
        length: usize,
        options: &CharsetOptions,
    ) -> Result<Vec<SecretString>> {
        (0..count).map(|_| self.generate(length, options)).collect()
    }

    /// Entropy, in bits, of a password generated with these parameters.
    pub fn calculate_entropy(&self, length: usize, options: &CharsetOptions) -> f64 {
        EntropyCalculator::entropy_from_options(length, options)
    }
}

/// Generates a password with the default configuration.
pub fn generate_password(length: usize, options: &CharsetOptions) -> Result<SecretString> {
    PasswordGenerator::new().generate(length, options)
}
