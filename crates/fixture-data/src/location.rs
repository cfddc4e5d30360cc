//! US contact and location formatters.
//!
//! Phone numbers, social security numbers, postal addresses, ZIP codes and
//! coordinate pairs. Values are structurally plausible only: area codes,
//! streets and coordinates are not checked against real-world data.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::primitives::random_choice;

const STREETS: [&str; 4] = ["Main St", "Oak Ave", "Pine Dr", "Maple Blvd"];

/// City and state pairs; a generated address never mixes them up.
const CITIES: [(&str, &str); 4] = [
    ("New York", "NY"),
    ("Los Angeles", "CA"),
    ("Chicago", "IL"),
    ("Houston", "TX"),
];

const MICRODEGREES_PER_DEGREE: f64 = 1_000_000.0;
const LATITUDE_LIMIT_MICRODEGREES: i32 = 90_000_000;
const LONGITUDE_LIMIT_MICRODEGREES: i32 = 180_000_000;

/// A latitude/longitude pair in decimal degrees with six fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in `[-90, 90]`.
    pub lat: f64,
    /// Longitude in `[-180, 180]`.
    pub long: f64,
}

/// Returns a US cell number formatted as `(AAA) MMM-EEEE`.
///
/// The area code is drawn from `200..=999`, so it never starts with 0 or 1.
///
/// ```
/// use fixture_data::{is_valid_us_phone_number, seeded_rng, us_cell_number};
///
/// let phone = us_cell_number(&mut seeded_rng(8));
/// assert!(is_valid_us_phone_number(&phone));
/// ```
pub fn us_cell_number<R: Rng>(rng: &mut R) -> String {
    let area = rng.random_range(200..=999_u16);
    let exchange = rng.random_range(100..=999_u16);
    let line = rng.random_range(1000..=9999_u16);
    format!("({area}) {exchange}-{line}")
}

/// Alias of [`us_cell_number`].
pub fn us_phone_number<R: Rng>(rng: &mut R) -> String {
    us_cell_number(rng)
}

/// Returns a social security number formatted as `AAA-GG-SSSS`.
pub fn ssn<R: Rng>(rng: &mut R) -> String {
    let area = rng.random_range(100..=999_u16);
    let group = rng.random_range(10..=99_u8);
    let serial = rng.random_range(1000..=9999_u16);
    format!("{area}-{group}-{serial}")
}

/// Returns a street address such as `1234 Oak Ave Unit 5, Houston, TX`.
///
/// # Errors
///
/// Propagates [`GenerationError`] from the street and city draws.
pub fn us_address<R: Rng>(rng: &mut R) -> Result<String, GenerationError> {
    let number = rng.random_range(1..=9999_u16);
    let street = random_choice(rng, &STREETS)?;
    let unit = rng.random_range(1..=20_u8);
    let (city, state) = random_choice(rng, &CITIES)?;
    Ok(format!("{number} {street} Unit {unit}, {city}, {state}"))
}

/// Returns a five-digit ZIP code in `10000..=99999`.
pub fn zip_code<R: Rng>(rng: &mut R) -> String {
    rng.random_range(10_000..=99_999_u32).to_string()
}

/// Returns a random coordinate pair with six decimal places.
///
/// Values are drawn as whole microdegrees, so every output is exactly
/// representable with six fractional digits and both poles and the
/// antimeridian are reachable.
#[expect(
    clippy::float_arithmetic,
    reason = "microdegrees are converted to degrees with one division"
)]
pub fn coordinates<R: Rng>(rng: &mut R) -> Coordinates {
    let lat = rng.random_range(-LATITUDE_LIMIT_MICRODEGREES..=LATITUDE_LIMIT_MICRODEGREES);
    let long = rng.random_range(-LONGITUDE_LIMIT_MICRODEGREES..=LONGITUDE_LIMIT_MICRODEGREES);
    Coordinates {
        lat: f64::from(lat) / MICRODEGREES_PER_DEGREE,
        long: f64::from(long) / MICRODEGREES_PER_DEGREE,
    }
}
