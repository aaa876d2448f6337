//! Length section - rewards longer passwords, up to 30 points.

use super::SectionScore;

/// Length bands as `(minimum length, points)`, longest first.
const LENGTH_BANDS: [(usize, SectionScore); 5] = [(20, 30), (16, 28), (12, 24), (10, 20), (8, 15)];

/// Points for a password of `length` characters.
///
/// Below 8 characters each character is worth 2 points.
pub fn length_section(length: usize) -> SectionScore {
    LENGTH_BANDS
        .iter()
        .find(|(min, _)| length >= *min)
        .map(|(_, points)| *points)
        .unwrap_or_else(|| length as SectionScore * 2)
}
