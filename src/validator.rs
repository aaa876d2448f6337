//! Password policy validator.
//!
//! A failed check is a normal outcome reported in `ValidationResult::errors`,
//! not an `Err`. Only a malformed policy is an error.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::analyzer::PasswordAnalyzer;
use crate::error::Result;
use crate::patterns::contains_digit;
use crate::policy::PasswordPolicy;
use crate::scorer::Strength;

/// Score under which a valid password still gets a warning.
const WEAK_SCORE_WARNING: u8 = 60;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub score: u8,
    pub strength: Strength,
}

#[derive(Debug, Clone)]
pub struct PolicyValidator {
    policy: PasswordPolicy,
    analyzer: PasswordAnalyzer,
}

impl PolicyValidator {
    /// # Errors
    ///
    /// `PolicyViolation` if `policy` is malformed (for example a deserialized
    /// policy whose `min_length` exceeds its `max_length`).
    pub fn new(policy: PasswordPolicy) -> Result<Self> {
        Self::with_analyzer(policy, PasswordAnalyzer::new())
    }

    pub fn with_analyzer(policy: PasswordPolicy, analyzer: PasswordAnalyzer) -> Result<Self> {
        policy.check()?;
        Ok(Self { policy, analyzer })
    }

    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    /// Checks `password` against the policy, then against the analyzer.
    ///
    /// # Returns
    /// A `ValidationResult` whose `errors` list every failed rule in check
    /// order. Warnings are only added when there are no errors.
    pub fn validate(&self, password: &SecretString) -> ValidationResult {
        let pwd = password.expose_secret();
        let policy = &self.policy;
        let length = pwd.chars().count();
        let mut errors = Vec::new();

        if length < policy.min_length() {
            errors.push(format!(
                "Password must be at least {} characters",
                policy.min_length()
            ));
        }
        if length > policy.max_length() {
            errors.push(format!(
                "Password must not exceed {} characters",
                policy.max_length()
            ));
        }

        if policy.require_uppercase() && !pwd.chars().any(|c| c.is_uppercase()) {
            errors.push("Password must contain at least one uppercase letter".to_string());
        }
        if policy.require_lowercase() && !pwd.chars().any(|c| c.is_lowercase()) {
            errors.push("Password must contain at least one lowercase letter".to_string());
        }
        if policy.require_numbers() && !contains_digit(pwd) {
            errors.push("Password must contain at least one number".to_string());
        }
        if policy.require_symbols() && !pwd.chars().any(|c| !c.is_alphanumeric()) {
            errors.push("Password must contain at least one symbol".to_string());
        }

        let report = self.analyzer.analyze(password);

        if policy.forbid_common_patterns() && report.patterns.has_common_patterns {
            errors.push("Password contains common weak patterns".to_string());
        }
        if policy.forbid_sequential() && report.patterns.has_sequential {
            errors.push("Password contains sequential characters".to_string());
        }
        if let Some(min_entropy) = policy.min_entropy() {
            if report.entropy < min_entropy {
                errors.push(format!(
                    "Password entropy too low ({:.1} < {:.1} bits)",
                    report.entropy, min_entropy
                ));
            }
        }

        let mut warnings = Vec::new();
        if errors.is_empty() {
            if report.score < WEAK_SCORE_WARNING {
                warnings.push("Password is weak. Consider making it stronger.".to_string());
            }
            if !policy.require_symbols() && !report.classes.has_symbols {
                warnings.push("Adding symbols would significantly improve strength".to_string());
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            errors = errors.len(),
            warnings = warnings.len(),
            score = report.score,
            "password validated"
        );

        ValidationResult {
            valid: errors.is_empty(),
            errors,
            warnings,
            score: report.score,
            strength: report.strength,
        }
    }
}

/// Validates `password` against `policy` with the default analyzer.
pub fn validate_password(
    password: &SecretString,
    policy: &PasswordPolicy,
) -> Result<ValidationResult> {
    Ok(PolicyValidator::new(policy.clone())?.validate(password))
}
