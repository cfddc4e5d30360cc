//! Primitive random scalars.
//!
//! Every other generator in the crate is built from the three draws defined
//! here: an integer from an inclusive range, an element of a slice, and a
//! string over an alphabet. All draws are uniform over the declared domain.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::GenerationError;

/// Lowercase ASCII letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Lowercase ASCII letters followed by decimal digits.
pub const ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

/// Uppercase ASCII letters followed by decimal digits.
pub const UPPER_ALPHANUMERIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Decimal digits.
pub const DIGITS: &str = "0123456789";

/// Characters used for generated passwords: letters, digits and symbols.
pub const PASSWORD_CHARACTERS: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()";

/// Default length for [`random_letters`].
pub const DEFAULT_LETTERS_LENGTH: usize = 5;

/// Returns an integer drawn uniformly from `[min, max]`, both ends inclusive.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidRange`] when `max < min`.
///
/// # Example
///
/// ```
/// use fixture_data::{random_int, seeded_rng};
///
/// let value = random_int(&mut seeded_rng(1), 1, 6).expect("valid range");
/// assert!((1..=6).contains(&value));
/// ```
pub fn random_int<R: Rng>(rng: &mut R, min: i64, max: i64) -> Result<i64, GenerationError> {
    if max < min {
        return Err(GenerationError::InvalidRange { min, max });
    }
    Ok(rng.random_range(min..=max))
}

/// Returns a uniformly selected element of `items`.
///
/// # Errors
///
/// Returns [`GenerationError::EmptyInput`] when `items` is empty.
pub fn random_choice<'a, R: Rng, T>(rng: &mut R, items: &'a [T]) -> Result<&'a T, GenerationError> {
    items
        .choose(rng)
        .ok_or(GenerationError::EmptyInput { what: "choice set" })
}

/// Returns a string of exactly `length` characters, each drawn independently
/// from `alphabet`.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidLength`] when `length` is zero and
/// [`GenerationError::EmptyInput`] when `alphabet` is empty.
///
/// # Example
///
/// ```
/// use fixture_data::{DIGITS, random_string, seeded_rng};
///
/// let pin = random_string(&mut seeded_rng(3), 4, DIGITS).expect("valid length");
/// assert_eq!(pin.len(), 4);
/// assert!(pin.chars().all(|c| c.is_ascii_digit()));
/// ```
pub fn random_string<R: Rng>(
    rng: &mut R,
    length: usize,
    alphabet: &str,
) -> Result<String, GenerationError> {
    if length == 0 {
        return Err(GenerationError::InvalidLength { length });
    }
    let symbols: Vec<char> = alphabet.chars().collect();
    if symbols.is_empty() {
        return Err(GenerationError::EmptyInput { what: "alphabet" });
    }
    (0..length)
        .map(|_| random_choice(rng, &symbols).copied())
        .collect()
}

/// Returns `length` random lowercase ASCII letters.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidLength`] when `length` is zero.
pub fn random_letters<R: Rng>(rng: &mut R, length: usize) -> Result<String, GenerationError> {
    random_string(rng, length, LOWERCASE)
}

/// Upper-cases the first character of `value` and leaves the rest untouched.
///
/// ```
/// use fixture_data::capitalize;
///
/// assert_eq!(capitalize("john"), "John");
/// assert_eq!(capitalize(""), "");
/// ```
#[must_use]
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
