//! Secure random source.
//!
//! Thin, stateless wrappers over the operating system CSPRNG (`OsRng`).
//! Nothing here keeps state between calls.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::rngs::OsRng;
use rand::{Rng, RngCore};
use secrecy::SecretString;
use secrecy::zeroize::Zeroize;
use subtle::ConstantTimeEq;

use crate::error::{PasswordError, Result};

/// Picks one element uniformly at random.
///
/// # Errors
/// `PasswordError::EmptyAlphabet` if `alphabet` is empty.
pub fn choice<T: Copy>(alphabet: &[T]) -> Result<T> {
    if alphabet.is_empty() {
        return Err(PasswordError::EmptyAlphabet);
    }
    Ok(alphabet[OsRng.gen_range(0..alphabet.len())])
}

/// Uniform integer in `[min, max]`, both inclusive.
///
/// Sampling goes through `rand`'s uniform range sampler, which rejects
/// out-of-zone draws instead of reducing modulo the range.
pub fn randint(min: i64, max: i64) -> Result<i64> {
    if min > max {
        return Err(PasswordError::InvalidRange { min, max });
    }
    Ok(OsRng.gen_range(min..=max))
}

/// Returns a uniformly shuffled copy of `items` (Fisher-Yates).
///
/// The input slice is left untouched.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = OsRng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Compares two strings without short-circuiting on the first differing byte.
///
/// Lengths are not hidden.
pub fn constant_time_equals(a: &str, b: &str) -> bool {
    bool::from(a.as_bytes().ct_eq(b.as_bytes()))
}

/// Generates a URL-safe token from `num_bytes` random bytes.
///
/// The token is unpadded base64, so it is roughly `4/3 * num_bytes` long.
pub fn generate_token(num_bytes: usize) -> Result<SecretString> {
    if num_bytes == 0 {
        return Err(PasswordError::InvalidLength {
            requested: 0,
            min: 1,
            max: usize::MAX,
        });
    }

    let mut bytes = vec![0u8; num_bytes];
    OsRng.fill_bytes(&mut bytes);
    let token = URL_SAFE_NO_PAD.encode(&bytes);
    bytes.zeroize();

    Ok(SecretString::new(token.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashSet;

    #[test]
    fn test_choice_empty_alphabet() {
        let empty: [char; 0] = [];
        assert_eq!(choice(&empty), Err(PasswordError::EmptyAlphabet));
    }

    #[test]
    fn test_choice_stays_in_alphabet() {
        let alphabet = ['x', 'y', 'z'];
        for _ in 0..100 {
            let c = choice(&alphabet).unwrap();
            assert!(alphabet.contains(&c));
        }
    }

    #[test]
    fn test_choice_covers_alphabet() {
        let alphabet = [1u8, 2, 3, 4];
        let seen: HashSet<u8> = (0..500).map(|_| choice(&alphabet).unwrap()).collect();
        assert_eq!(seen.len(), alphabet.len());
    }

    #[test]
    fn test_randint_bounds_inclusive() {
        let mut seen = HashSet::new();
        for _ in 0..500 {
            let n = randint(-2, 2).unwrap();
            assert!((-2..=2).contains(&n));
            seen.insert(n);
        }
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_randint_single_value() {
        assert_eq!(randint(7, 7), Ok(7));
    }

    #[test]
    fn test_randint_inverted_range() {
        assert_eq!(
            randint(5, 1),
            Err(PasswordError::InvalidRange { min: 5, max: 1 })
        );
    }

    #[test]
    fn test_shuffle_is_permutation_and_input_untouched() {
        let original: Vec<u32> = (0..50).collect();
        let shuffled = shuffle(&original);

        assert_eq!(original, (0..50).collect::<Vec<_>>());
        let mut sorted = shuffled.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, original);
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        assert!(shuffle::<u8>(&[]).is_empty());
        assert_eq!(shuffle(&['a']), vec!['a']);
    }

    #[test]
    fn test_shuffle_moves_first_element() {
        // First element of 0..10 stays put with probability 1/10 per draw.
        let items: Vec<u8> = (0..10).collect();
        let moved = (0..200).filter(|_| shuffle(&items)[0] != 0).count();
        assert!(moved > 100, "first element moved only {} times", moved);
    }

    #[test]
    fn test_constant_time_equals() {
        assert!(constant_time_equals("secret", "secret"));
        assert!(!constant_time_equals("secret", "secreT"));
        assert!(!constant_time_equals("secret", "secret2"));
        assert!(constant_time_equals("", ""));
    }

    #[test]
    fn test_generate_token_url_safe() {
        let token = generate_token(32).unwrap();
        let value = token.expose_secret();
        assert_eq!(value.len(), 43);
        assert!(
            value
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_generate_token_zero_bytes() {
        assert!(matches!(
            generate_token(0),
            Err(PasswordError::InvalidLength { .. })
        ));
    }
}
