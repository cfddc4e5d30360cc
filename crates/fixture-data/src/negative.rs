//! Deliberately malformed values for negative-path tests.
//!
//! Each generator's output is guaranteed to fail the matching validator, such
//! as [`is_valid_email`](crate::is_valid_email).

use rand::Rng;

use crate::error::GenerationError;
use crate::primitives::{ALPHANUMERIC, DIGITS, random_string};

const INVALID_DOMAIN_LENGTH: usize = 4;
const INVALID_PHONE_PREFIX_LENGTH: usize = 4;

/// Returns an email address with a doubled `@`, such as `user@@k3x9.com`.
///
/// # Errors
///
/// Propagates [`GenerationError`] from the underlying string draw.
pub fn invalid_email<R: Rng>(rng: &mut R) -> Result<String, GenerationError> {
    let domain = random_string(rng, INVALID_DOMAIN_LENGTH, ALPHANUMERIC)?;
    Ok(format!("user@@{domain}.com"))
}

/// Returns a phone-like string with letters in it, such as `1234-abc-defg`.
///
/// # Errors
///
/// Propagates [`GenerationError`] from the underlying string draw.
pub fn invalid_phone_number<R: Rng>(rng: &mut R) -> Result<String, GenerationError> {
    let prefix = random_string(rng, INVALID_PHONE_PREFIX_LENGTH, DIGITS)?;
    Ok(format!("{prefix}-abc-defg"))
}

/// Returns a ZIP code made of letters.
#[must_use]
pub const fn invalid_zip_code() -> &'static str {
    "ABCDE"
}
