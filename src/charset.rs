//! Character categories and alphabet construction.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{PasswordError, Result};

pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
/// ASCII punctuation, 32 characters.
pub const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// One of the four character classes, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Uppercase,
        Category::Lowercase,
        Category::Digits,
        Category::Symbols,
    ];

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            Category::Uppercase => UPPERCASE,
            Category::Lowercase => LOWERCASE,
            Category::Digits => DIGITS,
            Category::Symbols => SYMBOLS,
        }
    }

    pub fn size(self) -> usize {
        self.alphabet().len()
    }

    /// Whether `c` belongs to this category's alphabet.
    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }
}

/// Which categories a generated password may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CharsetOptions {
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl CharsetOptions {
    /// All four categories enabled.
    pub fn all() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
        }
    }

    pub fn is_enabled(&self, category: Category) -> bool {
        match category {
            Category::Uppercase => self.uppercase,
            Category::Lowercase => self.lowercase,
            Category::Digits => self.numbers,
            Category::Symbols => self.symbols,
        }
    }

    /// Enabled categories in canonical order.
    pub fn enabled(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|c| self.is_enabled(*c))
    }

    /// True if at least one category is enabled.
    pub fn is_valid(&self) -> bool {
        self.uppercase || self.lowercase || self.numbers || self.symbols
    }
}

/// Concatenates the enabled alphabets (uppercase, lowercase, digits, symbols).
///
/// # Errors
/// `PasswordError::InvalidCharset` if no category is enabled.
pub fn build_charset(options: &CharsetOptions) -> Result<Vec<u8>> {
    if !options.is_valid() {
        return Err(PasswordError::InvalidCharset);
    }
    Ok(options
        .enabled()
        .flat_map(|c| c.alphabet().iter().copied())
        .collect())
}

/// One alphabet per enabled category, in canonical order.
pub fn required_subalphabets(options: &CharsetOptions) -> Vec<&'static [u8]> {
    options.enabled().map(Category::alphabet).collect()
}

/// Sum of the enabled category sizes.
pub fn charset_size(options: &CharsetOptions) -> usize {
    options.enabled().map(Category::size).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_sizes() {
        assert_eq!(Category::Uppercase.size(), 26);
        assert_eq!(Category::Lowercase.size(), 26);
        assert_eq!(Category::Digits.size(), 10);
        assert_eq!(Category::Symbols.size(), 32);
    }

    #[test]
    fn test_categories_are_disjoint() {
        for (i, a) in Category::ALL.iter().enumerate() {
            for b in &Category::ALL[i + 1..] {
                assert!(a.alphabet().iter().all(|c| !b.alphabet().contains(c)));
            }
        }
    }

    #[test]
    fn test_build_charset_order() {
        let options = CharsetOptions {
            uppercase: false,
            lowercase: true,
            numbers: true,
            symbols: false,
        };
        let charset = build_charset(&options).unwrap();
        assert_eq!(charset.len(), 36);
        assert_eq!(&charset[..26], LOWERCASE);
        assert_eq!(&charset[26..], DIGITS);
    }

    #[test]
    fn test_build_charset_all() {
        let charset = build_charset(&CharsetOptions::all()).unwrap();
        assert_eq!(charset.len(), 94);
        assert_eq!(charset[0], b'A');
    }

    #[test]
    fn test_build_charset_none_enabled() {
        let result = build_charset(&CharsetOptions::default());
        assert_eq!(result, Err(PasswordError::InvalidCharset));
    }

    #[test]
    fn test_required_subalphabets() {
        let options = CharsetOptions {
            uppercase: true,
            lowercase: false,
            numbers: false,
            symbols: true,
        };
        let required = required_subalphabets(&options);
        assert_eq!(required, vec![UPPERCASE, SYMBOLS]);
    }

    #[test]
    fn test_charset_size() {
        assert_eq!(charset_size(&CharsetOptions::all()), 94);
        assert_eq!(charset_size(&CharsetOptions::default()), 0);
        let digits_only = CharsetOptions {
            numbers: true,
            ..CharsetOptions::default()
        };
        assert_eq!(charset_size(&digits_only), 10);
    }

    #[test]
    fn test_category_contains() {
        assert!(Category::Symbols.contains('~'));
        assert!(!Category::Symbols.contains('é'));
        assert!(Category::Digits.contains('7'));
    }
}
