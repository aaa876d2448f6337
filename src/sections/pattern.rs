//! Pattern section - bonuses for clean passwords, penalties for weak patterns.

use super::SectionScore;
use crate::patterns::PatternFlags;

const NO_COMMON_BONUS: SectionScore = 10;
const NO_SEQUENTIAL_BONUS: SectionScore = 5;
const COMMON_PENALTY: SectionScore = 25;
const SEQUENTIAL_PENALTY: SectionScore = 15;
const KEYBOARD_PENALTY: SectionScore = 10;
const REPEATED_PENALTY: SectionScore = 10;
const DATE_PENALTY: SectionScore = 5;

/// Net pattern adjustment, between -65 and +15.
///
/// A numeric suffix is reported by the detector but not scored here.
pub fn pattern_section(flags: &PatternFlags) -> SectionScore {
    let mut score = 0;

    if flags.has_common_patterns {
        score -= COMMON_PENALTY;
    } else {
        score += NO_COMMON_BONUS;
    }

    if flags.has_sequential {
        score -= SEQUENTIAL_PENALTY;
    } else {
        score += NO_SEQUENTIAL_BONUS;
    }

    if flags.has_keyboard_patterns {
        score -= KEYBOARD_PENALTY;
    }
    if flags.has_repeated_chars {
        score -= REPEATED_PENALTY;
    }
    if flags.has_date_pattern {
        score -= DATE_PENALTY;
    }

    score
}
