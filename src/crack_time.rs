//! Crack time estimator for brute-force attack resistance.
//!
//! Estimates are average case: an attacker searches half the keyspace. The
//! time magnitude (`CrackTime`) is both the displayed label and the input to
//! the security classification, so the two can never disagree.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::config::BRUTE_FORCE_RATE;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const MONTH: f64 = 30.0 * DAY;
const YEAR: f64 = 365.0 * DAY;

/// Time band an estimate falls into. Counts are whole units, truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum CrackTime {
    Instant,
    UnderOneSecond,
    Seconds(u64),
    Minutes(u64),
    Hours(u64),
    Days(u64),
    Months(u64),
    Years(u64),
    Centuries,
    Millennia,
}

impl CrackTime {
    pub fn from_seconds(seconds: f64) -> Self {
        if seconds < 0.001 {
            CrackTime::Instant
        } else if seconds < 1.0 {
            CrackTime::UnderOneSecond
        } else if seconds < MINUTE {
            CrackTime::Seconds(seconds as u64)
        } else if seconds < HOUR {
            CrackTime::Minutes((seconds / MINUTE) as u64)
        } else if seconds < DAY {
            CrackTime::Hours((seconds / HOUR) as u64)
        } else if seconds < MONTH {
            CrackTime::Days((seconds / DAY) as u64)
        } else if seconds < YEAR {
            CrackTime::Months((seconds / MONTH) as u64)
        } else if seconds < 100.0 * YEAR {
            CrackTime::Years((seconds / YEAR) as u64)
        } else if seconds < 1_000.0 * YEAR {
            CrackTime::Centuries
        } else {
            CrackTime::Millennia
        }
    }

    pub fn security_level(&self) -> SecurityLevel {
        match self {
            CrackTime::Instant | CrackTime::UnderOneSecond | CrackTime::Seconds(_) => {
                SecurityLevel::VeryWeak
            }
            CrackTime::Minutes(_) | CrackTime::Hours(_) => SecurityLevel::Weak,
            CrackTime::Days(_) => SecurityLevel::Moderate,
            CrackTime::Months(_) => SecurityLevel::Good,
            CrackTime::Years(_) => SecurityLevel::Strong,
            CrackTime::Centuries | CrackTime::Millennia => SecurityLevel::VeryStrong,
        }
    }
}

fn plural(f: &mut fmt::Formatter<'_>, n: u64, unit: &str) -> fmt::Result {
    if n == 1 {
        write!(f, "{} {}", n, unit)
    } else {
        write!(f, "{} {}s", n, unit)
    }
}

impl fmt::Display for CrackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CrackTime::Instant => f.write_str("Instant"),
            CrackTime::UnderOneSecond => f.write_str("Less than 1 second"),
            CrackTime::Seconds(n) => plural(f, n, "second"),
            CrackTime::Minutes(n) => plural(f, n, "minute"),
            CrackTime::Hours(n) => plural(f, n, "hour"),
            CrackTime::Days(n) => plural(f, n, "day"),
            CrackTime::Months(n) => plural(f, n, "month"),
            CrackTime::Years(n) => plural(f, n, "year"),
            CrackTime::Centuries => f.write_str("Centuries"),
            CrackTime::Millennia => f.write_str("Millennia+"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum SecurityLevel {
    VeryWeak,
    Weak,
    Moderate,
    Good,
    Strong,
    VeryStrong,
}

impl SecurityLevel {
    pub fn description(&self) -> &'static str {
        match self {
            SecurityLevel::VeryWeak => "Very Weak - Crackable instantly",
            SecurityLevel::Weak => "Weak - Crackable in hours",
            SecurityLevel::Moderate => "Moderate - Crackable in days",
            SecurityLevel::Good => "Good - Crackable in months",
            SecurityLevel::Strong => "Strong - Crackable in years",
            SecurityLevel::VeryStrong => "Very Strong - Crackable in centuries+",
        }
    }
}

impl fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SecurityLevel::VeryWeak => "Very Weak",
            SecurityLevel::Weak => "Weak",
            SecurityLevel::Moderate => "Moderate",
            SecurityLevel::Good => "Good",
            SecurityLevel::Strong => "Strong",
            SecurityLevel::VeryStrong => "Very Strong",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrackTimeEstimator {
    attempts_per_second: f64,
}

impl Default for CrackTimeEstimator {
    fn default() -> Self {
        Self::new(BRUTE_FORCE_RATE)
    }
}

impl CrackTimeEstimator {
    /// `attempts_per_second` is assumed positive; `EngineConfig::validate` enforces it.
    pub fn new(attempts_per_second: f64) -> Self {
        Self {
            attempts_per_second,
        }
    }

    pub fn attempts_per_second(&self) -> f64 {
        self.attempts_per_second
    }

    pub fn estimate_from_entropy(&self, bits: f64) -> CrackTime {
        if bits <= 0.0 {
            return CrackTime::Instant;
        }
        let seconds = bits.exp2() / (2.0 * self.attempts_per_second);
        CrackTime::from_seconds(seconds)
    }

    pub fn estimate_from_length_and_charset(&self, length: usize, charset_size: usize) -> CrackTime {
        if length == 0 || charset_size == 0 {
            return CrackTime::Instant;
        }
        let exponent = i32::try_from(length).unwrap_or(i32::MAX);
        let combinations = (charset_size as f64).powi(exponent);
        CrackTime::from_seconds(combinations / (2.0 * self.attempts_per_second))
    }

    /// Rough `length * sqrt(charset_size)` figure.
    ///
    /// Not Shannon entropy and not used by any estimate; kept for display.
    pub fn simplified_entropy(length: usize, charset_size: usize) -> f64 {
        if length == 0 || charset_size == 0 {
            return 0.0;
        }
        length as f64 * (charset_size as f64).sqrt()
    }

    pub fn security_level(&self, bits: f64) -> SecurityLevel {
        self.estimate_from_entropy(bits).security_level()
    }
}
