//! Entropy section - up to 30 points for estimated entropy.

use super::SectionScore;

pub fn entropy_section(bits: f64) -> SectionScore {
    if bits >= 100.0 {
        30
    } else if bits >= 80.0 {
        28
    } else if bits >= 60.0 {
        24
    } else if bits >= 40.0 {
        18
    } else {
        (bits / 2.0).floor().max(0.0) as SectionScore
    }
}
