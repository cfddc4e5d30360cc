//! Randomised and derived test fixture values.
//!
//! This crate produces believable synthetic data for automated tests: names,
//! contact details, dates, payment instruments, identifiers and composite
//! user profiles. It also validates that data and computes Luhn check digits.
//!
//! # Overview
//!
//! Every generator borrows a caller-supplied [`rand::Rng`], so a seeded
//! generator from [`seeded_rng`] makes any output reproducible. Date-relative
//! generators also take a [`mockable::Clock`]; pass [`FixedClock`] in tests
//! and [`mockable::DefaultClock`] elsewhere.
//!
//! Failures are reported through [`GenerationError`] and never by panicking.
//!
//! # Example
//!
//! ```
//! use fixture_data::{build_user_profile, is_luhn_valid, seeded_rng, test_credit_card};
//!
//! let mut rng = seeded_rng(42);
//! let profile = build_user_profile(&mut rng).expect("profile");
//! assert!(profile.email.starts_with(&profile.first_name.to_lowercase()));
//!
//! let card = test_credit_card(&mut rng).expect("card");
//! assert!(is_luhn_valid(&card));
//! ```

mod checksum;
mod clock;
mod collections;
mod color;
mod content;
mod delay;
mod error;
mod location;
mod negative;
mod network;
mod payment;
mod person;
mod primitives;
mod profile;
mod rng;
mod temporal;
mod validation;

pub use checksum::{is_luhn_valid, luhn_check_digit};
pub use clock::FixedClock;
pub use collections::{
    DEFAULT_PAGE, DEFAULT_PER_PAGE, PaginationParams, chunk_slice, pagination_params,
};
pub use color::{hex_color, rgb_color};
pub use content::{
    DEFAULT_FILE_EXTENSION, DEFAULT_LOREM_SENTENCES, encode_base64, file_name, lorem_ipsum,
    mime_type, slugify,
};
pub use delay::{DEFAULT_WAIT, wait};
pub use error::{ChecksumError, GenerationError};
pub use location::{
    Coordinates, coordinates, ssn, us_address, us_cell_number, us_phone_number, zip_code,
};
pub use negative::{invalid_email, invalid_phone_number, invalid_zip_code};
pub use network::{ipv4_address, mac_address, user_agent, uuid_v4};
pub use payment::{
    DEFAULT_AMOUNT_MAX, DEFAULT_AMOUNT_MIN, DEFAULT_CVV_LENGTH, DEFAULT_IBAN_COUNTRY,
    MAX_PAYMENT_AMOUNT, TEST_CARD_PREFIX, card_expiry, cvv, iban, payment_amount,
    test_credit_card, to_currency,
};
pub use person::{
    DEFAULT_ALPHANUMERIC_LENGTH, DEFAULT_PASSWORD_LENGTH, EMAIL_DOMAIN, UserRole, email_for,
    first_name, format_full_name, last_name, password, random_alphanumeric, random_email,
    user_role,
};
pub use primitives::{
    ALPHANUMERIC, DEFAULT_LETTERS_LENGTH, DIGITS, LOWERCASE, PASSWORD_CHARACTERS,
    UPPER_ALPHANUMERIC, capitalize, random_choice, random_int, random_letters, random_string,
};
pub use profile::{UserProfile, build_user_profile};
pub use rng::seeded_rng;
pub use temporal::{
    DEFAULT_DAY_DISTANCE, DEFAULT_MAX_AGE, DEFAULT_MIN_AGE, DEFAULT_RANDOM_DATE_OFFSET_DAYS,
    DEFAULT_RANGE_END_OFFSET_DAYS, DEFAULT_RANGE_START_OFFSET_DAYS, DateRange, date_of_birth,
    date_range, future_date, past_date, random_date, random_timestamp, today,
};
pub use validation::{
    is_alpha_only, is_empty, is_valid_email, is_valid_us_phone_number, is_valid_zip_code,
};
