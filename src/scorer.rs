//! Strength scorer - combines the score sections into a 0-100 score.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::config::StrengthThresholds;
use crate::patterns::PatternFlags;
use crate::sections::{
    CharacterClasses, SectionScore, entropy_section, length_section, pattern_section,
    variety_section,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Strength {
    Weak,
    Medium,
    Strong,
    #[cfg_attr(feature = "serde", serde(rename = "Very Strong"))]
    VeryStrong,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        };
        f.write_str(label)
    }
}

/// Everything the scorer looks at, borrowed from an analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreFactors {
    pub length: usize,
    pub classes: CharacterClasses,
    pub entropy: f64,
    pub patterns: PatternFlags,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StrengthScorer {
    thresholds: StrengthThresholds,
}

impl StrengthScorer {
    pub fn new(thresholds: StrengthThresholds) -> Self {
        Self { thresholds }
    }

    /// Sum of the length, variety, entropy and pattern sections, clamped to `[0, 100]`.
    pub fn score(&self, factors: &ScoreFactors) -> u8 {
        let sections: [(&str, SectionScore); 4] = [
            ("length", length_section(factors.length)),
            ("variety", variety_section(factors.classes.diversity())),
            ("entropy", entropy_section(factors.entropy)),
            ("pattern", pattern_section(&factors.patterns)),
        ];

        let mut total: SectionScore = 0;
        for (_section_name, points) in sections {
            #[cfg(feature = "tracing")]
            tracing::trace!(section = _section_name, points, "score section");
            total += points;
        }

        total.clamp(0, 100) as u8
    }

    pub fn strength(&self, score: u8) -> Strength {
        if score >= self.thresholds.strong {
            Strength::VeryStrong
        } else if score >= self.thresholds.medium {
            Strength::Strong
        } else if score >= self.thresholds.weak {
            Strength::Medium
        } else {
            Strength::Weak
        }
    }
}
