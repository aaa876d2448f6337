//! Password analyzer - main analysis logic.
//!
//! Runs the pattern detector, entropy calculator, strength scorer and crack
//! time estimator over one password and assembles a fresh `AnalysisReport`.
//! Nothing is cached between calls.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "serde")]
use serde::Serialize;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::config::EngineConfig;
use crate::crack_time::{CrackTime, CrackTimeEstimator, SecurityLevel};
use crate::entropy::EntropyCalculator;
use crate::error::Result;
use crate::patterns::{self, PatternFlags};
use crate::scorer::{ScoreFactors, Strength, StrengthScorer};
use crate::sections::CharacterClasses;

/// Entropy below this triggers the "increase complexity" advice.
const LOW_ENTROPY_BITS: f64 = 40.0;

const EMPTY_PASSWORD_ADVICE: &str = "Enter a password to analyze";
const ALL_GOOD_ADVICE: &str = "Password meets security best practices!";

/// Read-only report on one password.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AnalysisReport {
    pub length: usize,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub classes: CharacterClasses,
    /// Fraction of the four character classes present.
    pub diversity_score: f64,
    /// Bits, over the classes actually present in the password.
    pub entropy: f64,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub patterns: PatternFlags,
    pub detected_patterns: Vec<String>,
    pub score: u8,
    pub strength: Strength,
    pub crack_time: CrackTime,
    pub security_level: SecurityLevel,
    pub recommendations: Vec<String>,
}

impl AnalysisReport {
    fn empty() -> Self {
        Self {
            length: 0,
            classes: CharacterClasses::default(),
            diversity_score: 0.0,
            entropy: 0.0,
            patterns: PatternFlags::default(),
            detected_patterns: Vec::new(),
            score: 0,
            strength: Strength::Weak,
            crack_time: CrackTime::Instant,
            security_level: SecurityLevel::VeryWeak,
            recommendations: vec![EMPTY_PASSWORD_ADVICE.to_string()],
        }
    }

    pub fn factors(&self) -> ScoreFactors {
        ScoreFactors {
            length: self.length,
            classes: self.classes,
            entropy: self.entropy,
            patterns: self.patterns,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordAnalyzer {
    scorer: StrengthScorer,
    estimator: CrackTimeEstimator,
}

impl PasswordAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an analyzer from a validated configuration.
    pub fn with_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            scorer: StrengthScorer::new(config.thresholds),
            estimator: CrackTimeEstimator::new(config.brute_force_rate),
        })
    }

    /// Analyzes `password` and returns a detailed report.
    ///
    /// The empty password short-circuits to a fixed report without running
    /// any scanner.
    pub fn analyze(&self, password: &SecretString) -> AnalysisReport {
        let pwd = password.expose_secret();
        if pwd.is_empty() {
            return AnalysisReport::empty();
        }

        let length = pwd.chars().count();
        let classes = CharacterClasses::classify(pwd);
        let patterns = patterns::detect_all(pwd);
        let entropy = EntropyCalculator::entropy(length, classes.alphabet_size());

        let factors = ScoreFactors {
            length,
            classes,
            entropy,
            patterns,
        };
        let score = self.scorer.score(&factors);
        let strength = self.scorer.strength(score);
        let crack_time = self.estimator.estimate_from_entropy(entropy);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            length,
            classes = classes.count(),
            score,
            %strength,
            "password analyzed"
        );

        AnalysisReport {
            length,
            classes,
            diversity_score: classes.diversity(),
            entropy,
            patterns,
            detected_patterns: patterns.names().into_iter().map(String::from).collect(),
            score,
            strength,
            crack_time,
            security_level: crack_time.security_level(),
            recommendations: recommendations(&factors),
        }
    }

    /// Like [`analyze`](Self::analyze), but returns `None` without doing any
    /// work if `token` is already cancelled.
    #[cfg(feature = "async")]
    pub fn analyze_cancellable(
        &self,
        password: &SecretString,
        token: &CancellationToken,
    ) -> Option<AnalysisReport> {
        if token.is_cancelled() {
            #[cfg(feature = "tracing")]
            tracing::debug!("analysis cancelled before start");
            return None;
        }
        Some(self.analyze(password))
    }
}

/// Improvement advice, in fixed order. Each condition adds independently.
fn recommendations(factors: &ScoreFactors) -> Vec<String> {
    let mut advice = Vec::new();

    if factors.length < 8 {
        advice.push("Increase length to at least 8 characters");
    } else if factors.length < 12 {
        advice.push("Consider increasing length to 12+ characters");
    }

    let classes = &factors.classes;
    if !classes.has_uppercase {
        advice.push("Add uppercase letters (A-Z)");
    }
    if !classes.has_lowercase {
        advice.push("Add lowercase letters (a-z)");
    }
    if !classes.has_numbers {
        advice.push("Add numbers (0-9)");
    }
    if !classes.has_symbols {
        advice.push("Add symbols (!@#$...)");
    }

    let patterns = &factors.patterns;
    if patterns.has_common_patterns {
        advice.push("Avoid common words and patterns");
    }
    if patterns.has_sequential {
        advice.push("Avoid sequential characters (abc, 123)");
    }
    if patterns.has_keyboard_patterns {
        advice.push("Avoid keyboard patterns (qwerty)");
    }
    if patterns.has_repeated_chars {
        advice.push("Avoid repeated characters (aaa, 111)");
    }
    if patterns.has_date_pattern {
        advice.push("Avoid dates (birthdays, anniversaries)");
    }
    if patterns.has_number_only_suffix {
        advice.push("Avoid ending the password with a run of digits");
    }

    if factors.entropy < LOW_ENTROPY_BITS {
        advice.push("Significantly increase password complexity");
    }

    if advice.is_empty() {
        advice.push(ALL_GOOD_ADVICE);
    }

    advice.into_iter().map(String::from).collect()
}

/// Analyzes `password` with the default configuration.
pub fn analyze_password(password: &SecretString) -> AnalysisReport {
    PasswordAnalyzer::new().analyze(password)
}

/// Async version that sends the report via channel.
///
/// Nothing is sent if `token` is cancelled before the analysis starts.
#[cfg(feature = "async")]
pub async fn analyze_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<AnalysisReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    let Some(report) = PasswordAnalyzer::new().analyze_cancellable(password, &token) else {
        return;
    };

    if let Err(_e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password analysis report: receiver dropped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(value: &str) -> SecretString {
        SecretString::new(value.to_string().into())
    }

    #[test]
    fn test_analyze_empty_password() {
        let report = analyze_password(&secret(""));

        assert_eq!(report.score, 0);
        assert_eq!(report.strength, Strength::Weak);
        assert_eq!(report.entropy, 0.0);
        assert_eq!(report.crack_time.to_string(), "Instant");
        assert_eq!(report.security_level, SecurityLevel::VeryWeak);
        assert_eq!(report.recommendations, vec!["Enter a password to analyze"]);
        assert!(report.detected_patterns.is_empty());
    }

    #[test]
    fn test_analyze_common_password_with_suffix() {
        let report = analyze_password(&secret("password123"));

        assert!(report.patterns.has_common_patterns);
        assert!(report.patterns.has_number_only_suffix);
        assert!(matches!(report.strength, Strength::Weak | Strength::Medium));
        // 20 (length) + 12 (variety) + 18 (entropy) - 40 (patterns)
        assert_eq!(report.score, 10);
        assert_eq!(report.length, 11);
        assert!(report.classes.has_lowercase);
        assert!(report.classes.has_numbers);
        assert_eq!(report.diversity_score, 0.5);
    }

    #[test]
    fn test_analyze_strong_password() {
        let report = analyze_password(&secret("Zy8#kPm2!vQx7&Rw"));

        assert_eq!(report.length, 16);
        assert_eq!(report.diversity_score, 1.0);
        assert_eq!(report.patterns, PatternFlags::default());
        // 28 + 25 + 30 (104.9 bits) + 15
        assert_eq!(report.score, 98);
        assert_eq!(report.strength, Strength::VeryStrong);
        assert_eq!(report.crack_time, CrackTime::Millennia);
        assert_eq!(report.security_level, SecurityLevel::VeryStrong);
        assert_eq!(
            report.recommendations,
            vec!["Password meets security best practices!"]
        );
    }

    #[test]
    fn test_entropy_uses_present_classes() {
        let report = analyze_password(&secret("abcdefgh"));
        let expected = 8.0 * 26f64.log2();
        assert!((report.entropy - expected).abs() < 1e-9);
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let analyzer = PasswordAnalyzer::new();
        let pwd = secret("Tr0ub4dor&3");
        assert_eq!(analyzer.analyze(&pwd), analyzer.analyze(&pwd));
    }

    #[test]
    fn test_recommendations_order() {
        let report = analyze_password(&secret("aaa"));
        assert_eq!(
            report.recommendations,
            vec![
                "Increase length to at least 8 characters",
                "Add uppercase letters (A-Z)",
                "Add numbers (0-9)",
                "Add symbols (!@#$...)",
                "Avoid repeated characters (aaa, 111)",
                "Significantly increase password complexity",
            ]
        );
    }

    #[test]
    fn test_recommendations_for_medium_length() {
        let report = analyze_password(&secret("Zy8#kPm2!v"));
        assert_eq!(
            report.recommendations,
            vec!["Consider increasing length to 12+ characters"]
        );
    }

    #[test]
    fn test_detected_pattern_names() {
        let report = analyze_password(&secret("qwerty1990-01-01"));
        assert_eq!(
            report.detected_patterns,
            vec![
                "Common weak patterns",
                "Sequential characters",
                "Keyboard patterns",
                "Date patterns",
                "Numbers-only suffix",
            ]
        );
    }

    #[test]
    fn test_score_boundaries() {
        let analyzer = PasswordAnalyzer::new();
        for pwd in ["", "a", "password", "MyPass123!", "VeryStrongPassword123!@#"] {
            let report = analyzer.analyze(&secret(pwd));
            assert!(report.score <= 100);
        }
    }

    #[test]
    fn test_with_config_rate_changes_crack_time() {
        let config = EngineConfig {
            brute_force_rate: 1.0,
            ..EngineConfig::default()
        };
        let analyzer = PasswordAnalyzer::with_config(&config).unwrap();
        // "ab": 2 * log2(26) bits, 676 / 2 = 338 seconds
        let report = analyzer.analyze(&secret("ab"));
        assert_eq!(report.crack_time, CrackTime::Minutes(5));
        assert_eq!(report.security_level, SecurityLevel::Weak);
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let config = EngineConfig {
            min_length: 0,
            ..EngineConfig::default()
        };
        assert!(PasswordAnalyzer::with_config(&config).is_err());
    }

    #[test]
    fn test_report_debug_has_no_password() {
        let report = analyze_password(&secret("Sup3rSecretValue!"));
        let debug = format!("{:?}", report);
        assert!(!debug.contains("Sup3rSecretValue"));
    }
}

#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(value: &str) -> SecretString {
        SecretString::new(value.to_string().into())
    }

    #[tokio::test]
    async fn test_analyze_with_cancellation() {
        let token = CancellationToken::new();
        token.cancel();

        let report = PasswordAnalyzer::new().analyze_cancellable(&secret("SomePassword123!"), &token);
        assert!(report.is_none());
    }

    #[tokio::test]
    async fn test_analyze_without_cancellation() {
        let token = CancellationToken::new();
        let report = PasswordAnalyzer::new().analyze_cancellable(&secret("TestPass123!"), &token);
        assert!(report.is_some());
    }

    #[tokio::test]
    async fn test_analyze_password_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        analyze_password_tx(&secret("TestPass123!"), token, tx).await;

        let report = rx.recv().await.expect("Should receive report");
        assert_eq!(report.length, 12);
    }

    #[tokio::test]
    async fn test_analyze_password_tx_cancelled_sends_nothing() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        analyze_password_tx(&secret("TestPass123!"), token, tx).await;

        assert!(rx.recv().await.is_none());
    }
}
