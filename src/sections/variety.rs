//! Character variety section - checks for uppercase, lowercase, numbers, symbols.

#[cfg(feature = "serde")]
use serde::Serialize;

use super::SectionScore;
use crate::charset::Category;
use crate::patterns::contains_digit;

/// Which of the four character classes occur in a password.
///
/// Letters are ASCII only: `A-Z` and `a-z`. A number is any Unicode decimal
/// digit. Anything outside `A-Za-z0-9` counts as a symbol, so a non-ASCII
/// digit raises both `has_numbers` and `has_symbols`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CharacterClasses {
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_numbers: bool,
    pub has_symbols: bool,
}

impl CharacterClasses {
    pub fn classify(password: &str) -> Self {
        let mut classes = Self::default();
        for c in password.chars() {
            match c {
                'A'..='Z' => classes.has_uppercase = true,
                'a'..='z' => classes.has_lowercase = true,
                '0'..='9' => {}
                _ => classes.has_symbols = true,
            }
        }
        classes.has_numbers = contains_digit(password);
        classes
    }

    pub fn has(&self, category: Category) -> bool {
        match category {
            Category::Uppercase => self.has_uppercase,
            Category::Lowercase => self.has_lowercase,
            Category::Digits => self.has_numbers,
            Category::Symbols => self.has_symbols,
        }
    }

    pub fn count(&self) -> usize {
        Category::ALL.iter().filter(|c| self.has(**c)).count()
    }

    /// Fraction of the four classes present, 0.0 to 1.0.
    pub fn diversity(&self) -> f64 {
        self.count() as f64 / Category::ALL.len() as f64
    }

    /// Sum of the alphabet sizes of the classes actually present.
    pub fn alphabet_size(&self) -> usize {
        Category::ALL
            .iter()
            .filter(|c| self.has(**c))
            .map(|c| c.size())
            .sum()
    }
}

/// Up to 25 points, proportional to the diversity score.
pub fn variety_section(diversity: f64) -> SectionScore {
    (diversity * 25.0).floor() as SectionScore
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_all_categories() {
        let classes = CharacterClasses::classify("HasAll123!@#");
        assert!(classes.has_uppercase);
        assert!(classes.has_lowercase);
        assert!(classes.has_numbers);
        assert!(classes.has_symbols);
        assert_eq!(classes.count(), 4);
        assert_eq!(classes.diversity(), 1.0);
        assert_eq!(classes.alphabet_size(), 94);
    }

    #[test]
    fn test_classify_missing_categories() {
        let classes = CharacterClasses::classify("lowercase123");
        assert!(!classes.has_uppercase);
        assert!(!classes.has_symbols);
        assert_eq!(classes.diversity(), 0.5);
        assert_eq!(classes.alphabet_size(), 36);
    }

    #[test]
    fn test_non_ascii_counts_as_symbol() {
        let classes = CharacterClasses::classify("é");
        assert!(classes.has_symbols);
        assert!(!classes.has_lowercase);
    }

    #[test]
    fn test_non_ascii_digit_is_number_and_symbol() {
        let classes = CharacterClasses::classify("Zyxkpmvq\u{0663}Rw");
        assert!(classes.has_uppercase);
        assert!(classes.has_lowercase);
        assert!(classes.has_numbers);
        assert!(classes.has_symbols);
        assert_eq!(classes.alphabet_size(), 94);
    }

    #[test]
    fn test_classify_empty() {
        let classes = CharacterClasses::classify("");
        assert_eq!(classes, CharacterClasses::default());
        assert_eq!(classes.alphabet_size(), 0);
    }

    #[test]
    fn test_variety_section_points() {
        assert_eq!(variety_section(0.0), 0);
        assert_eq!(variety_section(0.25), 6);
        assert_eq!(variety_section(0.5), 12);
        assert_eq!(variety_section(0.75), 18);
        assert_eq!(variety_section(1.0), 25);
    }
}
