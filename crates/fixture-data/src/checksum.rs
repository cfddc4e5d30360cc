//! Luhn checksum engine.
//!
//! The Luhn sum walks a digit string from the rightmost digit leftward,
//! doubling every second digit starting with the one *left* of the rightmost,
//! folding doubled values above nine back into a single digit, and adding
//! everything up. A number is valid when that sum is a multiple of ten.
//!
//! Computing a check digit runs the same walk over the payload with the check
//! position appended (as a zero), so the check position is the undoubled
//! rightmost digit and the resulting number always validates.

use crate::error::ChecksumError;

/// Sums `digits` with Luhn weighting, modulo ten.
///
/// Returns `None` when `digits` is empty or contains anything other than
/// ASCII decimal digits.
fn luhn_sum(digits: &str) -> Option<u32> {
    if digits.is_empty() {
        return None;
    }
    let mut sum = 0_u32;
    let mut double = false;
    for ch in digits.chars().rev() {
        let digit = ch.to_digit(10)?;
        let weighted = if double { fold(digit * 2) } else { digit };
        sum = (sum + weighted).rem_euclid(10);
        double = !double;
    }
    Some(sum)
}

/// Folds a doubled digit back into `0..=9`.
const fn fold(doubled: u32) -> u32 {
    if doubled > 9 { doubled - 9 } else { doubled }
}

/// Computes the Luhn check digit for `digits`.
///
/// Appending the returned digit to `digits` yields a Luhn-valid number.
///
/// # Errors
///
/// Returns [`ChecksumError::InvalidInput`] when `digits` is empty or contains
/// a character other than `0`-`9`.
///
/// # Example
///
/// ```
/// use fixture_data::{is_luhn_valid, luhn_check_digit};
///
/// let check = luhn_check_digit("7992739871").expect("digits only");
/// assert_eq!(check, '3');
/// assert!(is_luhn_valid("79927398713"));
/// ```
pub fn luhn_check_digit(digits: &str) -> Result<char, ChecksumError> {
    if digits.is_empty() {
        return Err(ChecksumError::InvalidInput {
            input: String::new(),
            reason: "must not be empty",
        });
    }
    let with_check_position = format!("{digits}0");
    let sum = luhn_sum(&with_check_position).ok_or_else(|| ChecksumError::InvalidInput {
        input: digits.to_owned(),
        reason: "contains a non-digit character",
    })?;
    let check = (10 - sum).rem_euclid(10);
    Ok(char::from_digit(check, 10).unwrap_or('0'))
}

/// Returns `true` when `number` is a non-empty digit string whose Luhn sum is
/// a multiple of ten.
///
/// ```
/// use fixture_data::is_luhn_valid;
///
/// assert!(is_luhn_valid("4111111111111111"));
/// assert!(!is_luhn_valid("4111111111111112"));
/// assert!(!is_luhn_valid("4111-1111"));
/// ```
#[must_use]
pub fn is_luhn_valid(number: &str) -> bool {
    luhn_sum(number) == Some(0)
}
