//! Password policy rules and configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{PasswordError, Result};

pub const DEFAULT_POLICY_MIN_LENGTH: usize = 8;
pub const DEFAULT_POLICY_MAX_LENGTH: usize = 128;

/// One human-readable rule of a policy, for display next to a password field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PolicyRule {
    pub name: &'static str,
    pub description: String,
    pub error_message: String,
}

/// Requirements a password must meet. Immutable once built.
///
/// Fields missing from a deserialized policy take their default values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PasswordPolicy {
    min_length: usize,
    max_length: usize,
    require_uppercase: bool,
    require_lowercase: bool,
    require_numbers: bool,
    require_symbols: bool,
    min_entropy: Option<f64>,
    forbid_common_patterns: bool,
    forbid_sequential: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_POLICY_MIN_LENGTH,
            max_length: DEFAULT_POLICY_MAX_LENGTH,
            require_uppercase: true,
            require_lowercase: true,
            require_numbers: true,
            require_symbols: false,
            min_entropy: None,
            forbid_common_patterns: true,
            forbid_sequential: true,
        }
    }
}

impl PasswordPolicy {
    /// Starts from the default policy.
    pub fn builder() -> PolicyBuilder {
        PolicyBuilder::default()
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn require_uppercase(&self) -> bool {
        self.require_uppercase
    }

    pub fn require_lowercase(&self) -> bool {
        self.require_lowercase
    }

    pub fn require_numbers(&self) -> bool {
        self.require_numbers
    }

    pub fn require_symbols(&self) -> bool {
        self.require_symbols
    }

    pub fn min_entropy(&self) -> Option<f64> {
        self.min_entropy
    }

    pub fn forbid_common_patterns(&self) -> bool {
        self.forbid_common_patterns
    }

    pub fn forbid_sequential(&self) -> bool {
        self.forbid_sequential
    }

    /// Lists the rules this policy enforces.
    pub fn rules(&self) -> Vec<PolicyRule> {
        let mut rules = vec![PolicyRule {
            name: "min_length",
            description: format!("Minimum {} characters", self.min_length),
            error_message: format!("Password must be at least {} characters", self.min_length),
        }];

        let required = [
            (self.require_uppercase, "uppercase", "uppercase letter"),
            (self.require_lowercase, "lowercase", "lowercase letter"),
            (self.require_numbers, "numbers", "number"),
            (self.require_symbols, "symbols", "symbol"),
        ];
        for (enabled, name, what) in required {
            if enabled {
                rules.push(PolicyRule {
                    name,
                    description: format!("At least one {}", what),
                    error_message: format!("Password must contain at least one {}", what),
                });
            }
        }

        if self.forbid_common_patterns {
            rules.push(PolicyRule {
                name: "no_common_patterns",
                description: "No common weak patterns".to_string(),
                error_message: "Password contains common weak patterns".to_string(),
            });
        }
        if self.forbid_sequential {
            rules.push(PolicyRule {
                name: "no_sequential",
                description: "No sequential characters".to_string(),
                error_message: "Password contains sequential characters".to_string(),
            });
        }
        if let Some(bits) = self.min_entropy {
            rules.push(PolicyRule {
                name: "min_entropy",
                description: format!("At least {:.1} bits of entropy", bits),
                error_message: format!("Password entropy below {:.1} bits", bits),
            });
        }

        rules
    }

    /// Malformed-policy checks shared by the builder and deserialized policies.
    pub fn check(&self) -> Result<()> {
        let mut violations = Vec::new();

        if self.min_length == 0 {
            violations.push("min_length must be at least 1".to_string());
        }
        if self.min_length > self.max_length {
            violations.push(format!(
                "min_length {} exceeds max_length {}",
                self.min_length, self.max_length
            ));
        }
        if let Some(bits) = self.min_entropy {
            if !bits.is_finite() || bits < 0.0 {
                violations.push("min_entropy must be a non-negative number".to_string());
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(PasswordError::PolicyViolation { violations })
        }
    }
}

/// Builder for [`PasswordPolicy`]; unset options keep their defaults.
#[derive(Debug, Clone, Default)]
pub struct PolicyBuilder {
    policy: PasswordPolicy,
}

impl PolicyBuilder {
    pub fn min_length(mut self, value: usize) -> Self {
        self.policy.min_length = value;
        self
    }

    pub fn max_length(mut self, value: usize) -> Self {
        self.policy.max_length = value;
        self
    }

    pub fn require_uppercase(mut self, value: bool) -> Self {
        self.policy.require_uppercase = value;
        self
    }

    pub fn require_lowercase(mut self, value: bool) -> Self {
        self.policy.require_lowercase = value;
        self
    }

    pub fn require_numbers(mut self, value: bool) -> Self {
        self.policy.require_numbers = value;
        self
    }

    pub fn require_symbols(mut self, value: bool) -> Self {
        self.policy.require_symbols = value;
        self
    }

    pub fn min_entropy(mut self, bits: f64) -> Self {
        self.policy.min_entropy = Some(bits);
        self
    }

    pub fn forbid_common_patterns(mut self, value: bool) -> Self {
        self.policy.forbid_common_patterns = value;
        self
    }

    pub fn forbid_sequential(mut self, value: bool) -> Self {
        self.policy.forbid_sequential = value;
        self
    }

    /// # Errors
    ///
    /// `PolicyViolation` listing every malformed option.
    pub fn build(self) -> Result<PasswordPolicy> {
        self.policy.check()?;
        Ok(self.policy)
    }
}
