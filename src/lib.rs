//! Password generation, strength analysis and policy validation library
//!
//! This library generates passwords from the operating system CSPRNG and
//! evaluates arbitrary passwords against heuristic and policy-based
//! criteria. Passwords are handled as `SecretString` and are never stored or
//! logged.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based analysis with cancellation support
//! - `tracing`: Enables logging via tracing crate (never logs password content)
//! - `serde`: Derives `Serialize` for reports and `Deserialize` for options and policies
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_forge::{CharsetOptions, PasswordPolicy, analyze_password, generate_password, validate_password};
//! use secrecy::SecretString;
//!
//! let generated = generate_password(16, &CharsetOptions::all()).expect("valid options");
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let report = analyze_password(&password);
//! println!("Score: {} ({})", report.score, report.strength);
//! println!("Crack time: {}", report.crack_time);
//!
//! let result = validate_password(&password, &PasswordPolicy::default()).expect("valid policy");
//! println!("Valid: {}", result.valid);
//! # drop(generated);
//! ```

// Internal modules
mod analyzer;
mod charset;
mod config;
mod crack_time;
mod entropy;
mod error;
mod generator;
mod patterns;
mod policy;
mod scorer;
mod sections;
mod validator;

pub mod random;

// Public API
pub use analyzer::{AnalysisReport, PasswordAnalyzer, analyze_password};
pub use charset::{
    Category, CharsetOptions, DIGITS, LOWERCASE, SYMBOLS, UPPERCASE, build_charset,
    charset_size, required_subalphabets,
};
pub use config::{
    BRUTE_FORCE_RATE, DEFAULT_PASSWORD_LENGTH, EngineConfig, EntropyThresholds,
    MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH, StrengthThresholds,
};
pub use crack_time::{CrackTime, CrackTimeEstimator, SecurityLevel};
pub use entropy::{EntropyCalculator, EntropyRating};
pub use error::{PasswordError, Result};
pub use generator::{PasswordGenerator, generate_password};
pub use patterns::{PatternFlags, detect_all, detected_names};
pub use policy::{PasswordPolicy, PolicyBuilder, PolicyRule};
pub use scorer::{ScoreFactors, Strength, StrengthScorer};
pub use sections::CharacterClasses;
pub use validator::{PolicyValidator, ValidationResult, validate_password};

#[cfg(feature = "async")]
pub use analyzer::analyze_password_tx;
