//! Pattern detector - scanners for well-known weak password shapes.
//!
//! All checks are read-only over the password text. Lowercased copies used
//! for case-insensitive matching are wrapped in `Zeroizing` so they are wiped
//! on drop.

use std::sync::LazyLock;

use regex::Regex;
use secrecy::zeroize::Zeroizing;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Known-weak tokens, matched as case-insensitive substrings.
pub const COMMON_PATTERNS: &[&str] = &[
    "password", "pass", "123456", "12345678", "qwerty", "abc123", "monkey", "letmein", "trustno1",
    "dragon", "baseball", "iloveyou", "master", "sunshine", "ashley", "bailey", "shadow",
    "superman", "qazwsx", "michael", "football", "welcome", "jesus", "ninja", "mustang", "admin",
    "login", "passw0rd", "p@ssword", "test", "user",
];

/// Three-character runs; each is also checked reversed.
pub const SEQUENTIAL_PATTERNS: &[&str] = &[
    "abc", "bcd", "cde", "def", "efg", "fgh", "ghi", "hij", "ijk", "jkl", "klm", "lmn", "mno",
    "nop", "opq", "pqr", "qrs", "rst", "stu", "tuv", "uvw", "vwx", "wxy", "xyz", "123", "234",
    "345", "456", "567", "678", "789", "qwe", "wer", "ert", "rty", "tyu", "yui", "uio", "iop",
    "asd", "sdf", "dfg", "ghj", "hjk", "zxc", "xcv", "cvb", "vbn", "bnm",
];

pub const KEYBOARD_PATTERNS: &[&str] = &[
    "qwerty",
    "asdfgh",
    "zxcvbn",
    "1qaz2wsx",
    "qazwsx",
    "qwertyuiop",
    "asdfghjkl",
    "zxcvbnm",
];

/// Minimum run length for the repeated-character check.
pub const MIN_REPEAT: usize = 3;

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{2,4}[/-]\d{1,2}[/-]\d{1,2}").expect("date pattern is a valid regex")
});

static NUMERIC_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+$").expect("suffix pattern is a valid regex"));

static DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d").expect("digit pattern is a valid regex"));

/// Result of running every scanner over one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PatternFlags {
    pub has_common_patterns: bool,
    pub has_sequential: bool,
    pub has_keyboard_patterns: bool,
    pub has_repeated_chars: bool,
    pub has_date_pattern: bool,
    pub has_number_only_suffix: bool,
}

impl PatternFlags {
    /// Human-readable names of the raised flags, in check order.
    pub fn names(&self) -> Vec<&'static str> {
        [
            (self.has_common_patterns, "Common weak patterns"),
            (self.has_sequential, "Sequential characters"),
            (self.has_keyboard_patterns, "Keyboard patterns"),
            (self.has_repeated_chars, "Repeated characters"),
            (self.has_date_pattern, "Date patterns"),
            (self.has_number_only_suffix, "Numbers-only suffix"),
        ]
        .into_iter()
        .filter_map(|(hit, name)| hit.then_some(name))
        .collect()
    }

    pub fn any(&self) -> bool {
        !self.names().is_empty()
    }
}

fn lowercase(password: &str) -> Zeroizing<String> {
    Zeroizing::new(password.to_lowercase())
}

/// True if `password` contains any Unicode decimal digit (`\d`), such as
/// `7` or the Arabic-Indic `\u{0663}`.
pub(crate) fn contains_digit(password: &str) -> bool {
    DIGIT.is_match(password)
}

/// Checks for known-weak tokens from [`COMMON_PATTERNS`], ignoring case.
///
/// # Returns
/// `true` if any token occurs as a substring.
pub fn has_common_patterns(password: &str) -> bool {
    let lower = lowercase(password);
    COMMON_PATTERNS.iter().any(|p| lower.contains(p))
}

/// Checks for three-character runs from [`SEQUENTIAL_PATTERNS`], forwards or
/// backwards, ignoring case.
pub fn has_sequential_patterns(password: &str) -> bool {
    let lower = lowercase(password);
    SEQUENTIAL_PATTERNS.iter().any(|p| {
        let reversed: String = p.chars().rev().collect();
        lower.contains(p) || lower.contains(reversed.as_str())
    })
}

/// Checks for keyboard walks from [`KEYBOARD_PATTERNS`], ignoring case.
///
/// # Returns
/// `true` if any walk occurs as a substring.
pub fn has_keyboard_patterns(password: &str) -> bool {
    let lower = lowercase(password);
    KEYBOARD_PATTERNS.iter().any(|p| lower.contains(p))
}

/// True if any character occurs `MIN_REPEAT` or more times in a row.
pub fn has_repeated_characters(password: &str) -> bool {
    let mut run = 0;
    let mut prev = None;
    for c in password.chars() {
        if prev == Some(c) {
            run += 1;
        } else {
            run = 1;
            prev = Some(c);
        }
        if run >= MIN_REPEAT {
            return true;
        }
    }
    false
}

/// Loose date shape such as `1990-01-01` or `12/3/4`, not calendar-checked.
pub fn has_date_pattern(password: &str) -> bool {
    DATE_PATTERN.is_match(password)
}

/// True if the password ends in one or more digits.
pub fn has_number_suffix(password: &str) -> bool {
    NUMERIC_SUFFIX.is_match(password)
}

/// Runs every scanner over `password`.
///
/// # Returns
/// A `PatternFlags` with one flag per scanner.
pub fn detect_all(password: &str) -> PatternFlags {
    PatternFlags {
        has_common_patterns: has_common_patterns(password),
        has_sequential: has_sequential_patterns(password),
        has_keyboard_patterns: has_keyboard_patterns(password),
        has_repeated_chars: has_repeated_characters(password),
        has_date_pattern: has_date_pattern(password),
        has_number_only_suffix: has_number_suffix(password),
    }
}

/// Names of the weak patterns found in `password`.
///
/// # Returns
/// Display names in check order; empty when nothing was found.
pub fn detected_names(password: &str) -> Vec<&'static str> {
    detect_all(password).names()
}
