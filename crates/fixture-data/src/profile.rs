//! Composite user profiles assembled from the individual formatters.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::GenerationError;
use crate::location::{us_address, us_phone_number, zip_code};
use crate::network::uuid_v4;
use crate::person::{
    DEFAULT_PASSWORD_LENGTH, UserRole, email_for, first_name, format_full_name, last_name,
    password, user_role,
};

/// A complete fake user record.
///
/// The full name is always the formatted first and last name, and the email
/// local part always starts with the lowercased first name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Unique identifier for the user.
    pub id: Uuid,
    /// Capitalized given name.
    pub first_name: String,
    /// Capitalized family name.
    pub last_name: String,
    /// `"First Last"`.
    pub full_name: String,
    /// Email address derived from the first name.
    pub email: String,
    /// US phone number in `(AAA) MMM-EEEE` form.
    pub phone: String,
    /// Single-line US street address.
    pub address: String,
    /// Five-digit ZIP code.
    pub zip: String,
    /// Access role.
    pub role: UserRole,
    /// Password of [`DEFAULT_PASSWORD_LENGTH`] characters.
    pub password: String,
}

/// Builds a user profile whose name and email fields agree with each other.
///
/// Fields are drawn in declaration order, so a seeded RNG always yields the
/// same profile.
///
/// # Errors
///
/// Propagates any [`GenerationError`] raised by the field formatters.
///
/// # Example
///
/// ```
/// use fixture_data::{build_user_profile, seeded_rng};
///
/// let profile = build_user_profile(&mut seeded_rng(42)).expect("profile");
/// assert_eq!(profile.full_name, format!("{} {}", profile.first_name, profile.last_name));
/// assert!(profile.email.starts_with(&profile.first_name.to_lowercase()));
/// ```
pub fn build_user_profile<R: Rng>(rng: &mut R) -> Result<UserProfile, GenerationError> {
    let id = uuid_v4(rng);
    let first = first_name(rng)?;
    let last = last_name(rng)?;
    let full_name = format_full_name(&first, &last);
    let email = email_for(rng, &first);
    let phone = us_phone_number(rng);
    let address = us_address(rng)?;
    let zip = zip_code(rng);
    let role = user_role(rng);
    let secret = password(rng, DEFAULT_PASSWORD_LENGTH)?;

    debug!(%id, %role, "built user profile");

    Ok(UserProfile {
        id,
        first_name: first,
        last_name: last,
        full_name,
        email,
        phone,
        address,
        zip,
        role,
        password: secret,
    })
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::rng::seeded_rng;
    use crate::validation::{
        is_alpha_only, is_valid_email, is_valid_us_phone_number, is_valid_zip_code,
    };

    #[fixture]
    fn rng() -> ChaCha8Rng {
        seeded_rng(99)
    }

    #[rstest]
    fn profile_fields_are_consistent(mut rng: ChaCha8Rng) {
        for _ in 0..50 {
            let profile = build_user_profile(&mut rng).expect("profile");
            assert_eq!(
                profile.full_name,
                format_full_name(&profile.first_name, &profile.last_name)
            );
            let (local, _) = profile.email.split_once('@').expect("email has @");
            assert!(local.starts_with(&profile.first_name.to_lowercase()));
            assert!(is_valid_email(&profile.email), "{}", profile.email);
            assert!(is_valid_us_phone_number(&profile.phone), "{}", profile.phone);
            assert!(is_valid_zip_code(&profile.zip), "{}", profile.zip);
            assert!(is_alpha_only(&profile.first_name));
            assert_eq!(profile.password.chars().count(), DEFAULT_PASSWORD_LENGTH);
        }
    }

    #[test]
    fn same_seed_builds_same_profile() {
        let first = build_user_profile(&mut seeded_rng(7)).expect("profile");
        let second = build_user_profile(&mut seeded_rng(7)).expect("profile");
        assert_eq!(first, second);
    }

    #[rstest]
    fn profile_serializes_with_camel_case_keys(mut rng: ChaCha8Rng) {
        let profile = build_user_profile(&mut rng).expect("profile");
        let json = serde_json::to_value(&profile).expect("serialize");
        for key in [
            "id", "firstName", "lastName", "fullName", "email", "phone", "address", "zip", "role",
            "password",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["role"], serde_json::json!(profile.role.as_str()));
        let decoded: UserProfile = serde_json::from_value(json).expect("deserialize");
        assert_eq!(decoded, profile);
    }
}
