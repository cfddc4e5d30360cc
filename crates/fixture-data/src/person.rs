//! Personal identity formatters: names, email addresses, roles, passwords.
//!
//! Names are synthetic: capitalised runs of random ASCII letters, so they
//! always satisfy [`is_alpha_only`](crate::is_alpha_only). Derived values
//! such as [`email_for`] and [`format_full_name`] take the base value as an
//! argument so composed records stay internally consistent.

use std::fmt;

use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::primitives::{
    ALPHANUMERIC, PASSWORD_CHARACTERS, capitalize, random_letters, random_string,
};

/// Default length for [`password`].
pub const DEFAULT_PASSWORD_LENGTH: usize = 10;

/// Default length for [`random_alphanumeric`].
pub const DEFAULT_ALPHANUMERIC_LENGTH: usize = 8;

/// Domain used for every generated email address.
pub const EMAIL_DOMAIN: &str = "example.com";

const FIRST_NAME_LENGTH_MIN: usize = 3;
const FIRST_NAME_LENGTH_MAX: usize = 7;
const LAST_NAME_LENGTH_MIN: usize = 4;
const LAST_NAME_LENGTH_MAX: usize = 9;
const EMAIL_SUFFIX_MAX: u32 = 99;

/// Access role assigned to a generated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full administrative access.
    Admin,
    /// May edit content.
    Editor,
    /// Read-only access.
    Viewer,
    /// May moderate other users' content.
    Moderator,
    /// Unauthenticated visitor.
    Guest,
}

impl UserRole {
    /// Every role, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Admin,
        Self::Editor,
        Self::Viewer,
        Self::Moderator,
        Self::Guest,
    ];

    /// Returns the lowercase wire name of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Editor => "editor",
            Self::Viewer => "viewer",
            Self::Moderator => "moderator",
            Self::Guest => "guest",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Distribution<UserRole> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> UserRole {
        // `ALL` is non-empty, so the fallback is never taken.
        UserRole::ALL.choose(rng).copied().unwrap_or(UserRole::Viewer)
    }
}

/// Returns a capitalised first name of three to seven letters.
///
/// # Errors
///
/// Propagates [`GenerationError`] from the underlying letter draw.
pub fn first_name<R: Rng>(rng: &mut R) -> Result<String, GenerationError> {
    random_name(rng, FIRST_NAME_LENGTH_MIN, FIRST_NAME_LENGTH_MAX)
}

/// Returns a capitalised last name of four to nine letters.
///
/// # Errors
///
/// Propagates [`GenerationError`] from the underlying letter draw.
pub fn last_name<R: Rng>(rng: &mut R) -> Result<String, GenerationError> {
    random_name(rng, LAST_NAME_LENGTH_MIN, LAST_NAME_LENGTH_MAX)
}

fn random_name<R: Rng>(rng: &mut R, min: usize, max: usize) -> Result<String, GenerationError> {
    let length = rng.random_range(min..=max);
    random_letters(rng, length).map(|letters| capitalize(&letters))
}

/// Joins a first and last name with a space, capitalising both.
///
/// ```
/// use fixture_data::format_full_name;
///
/// assert_eq!(format_full_name("john", "doe"), "John Doe");
/// ```
#[must_use]
pub fn format_full_name(first: &str, last: &str) -> String {
    format!("{} {}", capitalize(first), capitalize(last))
}

/// Derives an email address from an existing first name.
///
/// The local part is the lowercased name followed by a number in `0..=99`.
///
/// ```
/// use fixture_data::{email_for, seeded_rng};
///
/// let email = email_for(&mut seeded_rng(5), "Wendy");
/// assert!(email.starts_with("wendy"));
/// assert!(email.ends_with("@example.com"));
/// ```
pub fn email_for<R: Rng>(rng: &mut R, first_name: &str) -> String {
    let suffix = rng.random_range(0..=EMAIL_SUFFIX_MAX);
    format!("{}{suffix}@{EMAIL_DOMAIN}", first_name.to_lowercase())
}

/// Returns an email address built from a freshly generated first name.
///
/// Use [`email_for`] when the first name is already part of a record.
///
/// # Errors
///
/// Propagates [`GenerationError`] from [`first_name`].
pub fn random_email<R: Rng>(rng: &mut R) -> Result<String, GenerationError> {
    let name = first_name(rng)?;
    Ok(email_for(rng, &name))
}

/// Returns a uniformly selected [`UserRole`].
pub fn user_role<R: Rng>(rng: &mut R) -> UserRole {
    rng.random()
}

/// Returns a password of `length` letters, digits and symbols.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidLength`] when `length` is zero.
pub fn password<R: Rng>(rng: &mut R, length: usize) -> Result<String, GenerationError> {
    random_string(rng, length, PASSWORD_CHARACTERS)
}

/// Returns `length` lowercase letters and digits.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidLength`] when `length` is zero.
pub fn random_alphanumeric<R: Rng>(rng: &mut R, length: usize) -> Result<String, GenerationError> {
    random_string(rng, length, ALPHANUMERIC)
}
