//! Payment instrument formatters.
//!
//! Card numbers carry a valid Luhn check digit so they pass client-side
//! validation while remaining obviously synthetic (every number starts with
//! the `400000` test prefix). Monetary amounts are drawn as whole cents, so
//! no rounding is involved in generating them.

use chrono::Datelike;
use mockable::Clock;
use rand::Rng;
use tracing::trace;

use crate::checksum::luhn_check_digit;
use crate::error::GenerationError;
use crate::primitives::{DIGITS, UPPER_ALPHANUMERIC, random_string};

/// Default lower bound for [`payment_amount`].
pub const DEFAULT_AMOUNT_MIN: f64 = 10.0;

/// Default upper bound for [`payment_amount`].
pub const DEFAULT_AMOUNT_MAX: f64 = 20.0;

/// Largest upper bound accepted by [`payment_amount`]; its cents still fit
/// in an `i64`.
pub const MAX_PAYMENT_AMOUNT: f64 = 90_000_000_000_000_000.0;

/// Issuer prefix shared by every generated card number.
pub const TEST_CARD_PREFIX: &str = "400000";

/// Default number of digits for [`cvv`].
pub const DEFAULT_CVV_LENGTH: usize = 3;

/// Default country code for [`iban`].
pub const DEFAULT_IBAN_COUNTRY: &str = "GB";

const CARD_BODY_MIN: u32 = 100_000_000;
const CARD_BODY_MAX: u32 = 999_999_999;
const IBAN_BBAN_LENGTH: usize = 12;
const EXPIRY_YEARS_AHEAD_MAX: i32 = 6;
const CENTS_PER_UNIT: i64 = 100;

/// Returns an amount between `min` and `max` rounded to two decimals.
///
/// Both bounds are rounded to the nearest cent, halves away from zero, and
/// the amount is a whole number of cents drawn uniformly from the rounded
/// range. A result can therefore sit up to half a cent outside the requested
/// bounds: `(0.001, 0.009)` yields `0.00` or `0.01`.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidArgument`] unless both bounds are
/// finite and `0 <= min <= max <= MAX_PAYMENT_AMOUNT`.
///
/// # Example
///
/// ```
/// use fixture_data::{payment_amount, seeded_rng};
///
/// let amount = payment_amount(&mut seeded_rng(4), 10.0, 20.0).expect("valid bounds");
/// let value: f64 = amount.parse().expect("decimal");
/// assert!((10.0..=20.0).contains(&value));
/// assert_eq!(amount.split_once('.').map(|(_, cents)| cents.len()), Some(2));
/// ```
pub fn payment_amount<R: Rng>(rng: &mut R, min: f64, max: f64) -> Result<String, GenerationError> {
    let (low, high) = amount_bounds_in_cents(min, max)?;
    let cents = rng.random_range(low..=high);
    Ok(format!(
        "{}.{:02}",
        cents.div_euclid(CENTS_PER_UNIT),
        cents.rem_euclid(CENTS_PER_UNIT)
    ))
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    reason = "bounds are checked finite and capped before conversion to whole cents"
)]
fn amount_bounds_in_cents(min: f64, max: f64) -> Result<(i64, i64), GenerationError> {
    if !min.is_finite() {
        return Err(GenerationError::invalid_argument("min", "must be a finite number"));
    }
    if !max.is_finite() {
        return Err(GenerationError::invalid_argument("max", "must be a finite number"));
    }
    if min < 0.0 {
        return Err(GenerationError::invalid_argument(
            "min",
            format!("{min} must not be negative"),
        ));
    }
    if max < min {
        return Err(GenerationError::invalid_argument(
            "max",
            format!("{max} is less than min {min}"),
        ));
    }
    if max > MAX_PAYMENT_AMOUNT {
        return Err(GenerationError::invalid_argument(
            "max",
            format!("{max} exceeds {MAX_PAYMENT_AMOUNT}"),
        ));
    }
    let low = (min * 100.0).round() as i64;
    let high = (max * 100.0).round() as i64;
    Ok((low, high))
}

/// Formats `value` as US currency, e.g. `$15.50`.
///
/// Rounds to two decimals the way `format!("{:.2}")` does: half-to-even on
/// the exact binary value of `value`. Negative values keep their sign after
/// the dollar symbol (`$-5.00`).
///
/// # Errors
///
/// Returns [`GenerationError::InvalidArgument`] for NaN or infinite values.
///
/// ```
/// use fixture_data::to_currency;
///
/// assert_eq!(to_currency(15.5).expect("finite"), "$15.50");
/// assert!(to_currency(f64::NAN).is_err());
/// ```
pub fn to_currency(value: f64) -> Result<String, GenerationError> {
    if !value.is_finite() {
        return Err(GenerationError::invalid_argument(
            "value",
            "must be a finite number",
        ));
    }
    Ok(format!("${value:.2}"))
}

/// Returns a 16-digit, Luhn-valid test card number.
///
/// The number is [`TEST_CARD_PREFIX`], nine random digits (the first
/// non-zero) and a Luhn check digit.
///
/// # Errors
///
/// Propagates [`GenerationError::Checksum`] from the Luhn engine.
///
/// ```
/// use fixture_data::{is_luhn_valid, seeded_rng, test_credit_card};
///
/// let card = test_credit_card(&mut seeded_rng(12)).expect("card");
/// assert_eq!(card.len(), 16);
/// assert!(card.starts_with("400000"));
/// assert!(is_luhn_valid(&card));
/// ```
pub fn test_credit_card<R: Rng>(rng: &mut R) -> Result<String, GenerationError> {
    let body = rng.random_range(CARD_BODY_MIN..=CARD_BODY_MAX);
    let payload = format!("{TEST_CARD_PREFIX}{body}");
    let check = luhn_check_digit(&payload)?;
    trace!(check_digit = %check, "computed test card check digit");
    Ok(format!("{payload}{check}"))
}

/// Returns a card verification code of `length` digits.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidLength`] when `length` is zero.
pub fn cvv<R: Rng>(rng: &mut R, length: usize) -> Result<String, GenerationError> {
    random_string(rng, length, DIGITS)
}

/// Returns a card expiry date formatted `MM/YY`, one to six years ahead.
pub fn card_expiry<R: Rng>(rng: &mut R, clock: &dyn Clock) -> String {
    let current = clock.utc().year().rem_euclid(100);
    let year = (current + rng.random_range(1..=EXPIRY_YEARS_AHEAD_MAX)).rem_euclid(100);
    let month = rng.random_range(1..=12_u8);
    format!("{month:02}/{year:02}")
}

/// Returns a structurally IBAN-like string: country code, two check digits
/// and twelve uppercase alphanumerics. The check digits are random, so the
/// value is not a valid IBAN under ISO 13616.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidArgument`] unless `country_code` is two
/// ASCII uppercase letters.
pub fn iban<R: Rng>(rng: &mut R, country_code: &str) -> Result<String, GenerationError> {
    let well_formed =
        country_code.len() == 2 && country_code.chars().all(|c| c.is_ascii_uppercase());
    if !well_formed {
        return Err(GenerationError::invalid_argument(
            "country_code",
            format!("'{country_code}' is not two uppercase ASCII letters"),
        ));
    }
    let checks = rng.random_range(10..=99_u8);
    let bban = random_string(rng, IBAN_BBAN_LENGTH, UPPER_ALPHANUMERIC)?;
    Ok(format!("{country_code}{checks}{bban}"))
}

#[cfg(test)]
mod tests {
    //! Covers payment amount bounds, card checksums and instrument shapes.

    use chrono::NaiveDate;
    use rand_chacha::ChaCha8Rng;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::checksum::is_luhn_valid;
    use crate::clock::FixedClock;
    use crate::rng::seeded_rng;

    #[fixture]
    fn rng() -> ChaCha8Rng {
        seeded_rng(31)
    }

    fn parse_cents(amount: &str) -> i64 {
        let (units_text, cents_text) = amount.split_once('.').expect("two decimals");
        assert_eq!(cents_text.len(), 2, "{amount}");
        let units: i64 = units_text.parse().expect("units");
        let cents: i64 = cents_text.parse().expect("cents");
        units * CENTS_PER_UNIT + cents
    }

    #[rstest]
    fn amounts_stay_within_default_bounds(mut rng: ChaCha8Rng) {
        for _ in 0..500 {
            let amount =
                payment_amount(&mut rng, DEFAULT_AMOUNT_MIN, DEFAULT_AMOUNT_MAX).expect("amount");
            let cents = parse_cents(&amount);
            assert!((1_000..=2_000).contains(&cents), "{amount}");
        }
    }

    #[rstest]
    #[case(10.1, 10.1, "10.10")]
    #[case(0.0, 0.0, "0.00")]
    #[case(0.005, 0.014, "0.01")]
    #[case(7.0, 7.0, "7.00")]
    #[case(0.000_005, 0.000_005, "0.00")]
    fn degenerate_ranges_yield_the_single_cent(
        mut rng: ChaCha8Rng,
        #[case] min: f64,
        #[case] max: f64,
        #[case] expected: &str,
    ) {
        assert_eq!(payment_amount(&mut rng, min, max).expect("amount"), expected);
    }

    #[rstest]
    fn sub_cent_range_rounds_to_neighbouring_cents(mut rng: ChaCha8Rng) {
        let draws: Vec<String> = (0..200)
            .map(|_| payment_amount(&mut rng, 0.001, 0.009).expect("amount"))
            .collect();
        assert!(draws.iter().all(|amount| amount == "0.00" || amount == "0.01"));
        assert!(draws.iter().any(|amount| amount == "0.00"));
        assert!(draws.iter().any(|amount| amount == "0.01"));
    }

    #[rstest]
    #[case(0.0, 2e12)]
    #[case(MAX_PAYMENT_AMOUNT, MAX_PAYMENT_AMOUNT)]
    fn accepts_large_amounts(mut rng: ChaCha8Rng, #[case] min: f64, #[case] max: f64) {
        let amount = payment_amount(&mut rng, min, max).expect("amount");
        let (_, cents_text) = amount.split_once('.').expect("two decimals");
        assert_eq!(cents_text.len(), 2, "{amount}");
    }

    #[rstest]
    #[case(-1.0, 5.0, "min")]
    #[case(5.0, 1.0, "max")]
    #[case(f64::NAN, 1.0, "min")]
    #[case(0.0, f64::INFINITY, "max")]
    #[case(0.0, 1e17, "max")]
    fn rejects_invalid_amount_bounds(
        mut rng: ChaCha8Rng,
        #[case] min: f64,
        #[case] max: f64,
        #[case] parameter: &str,
    ) {
        match payment_amount(&mut rng, min, max) {
            Err(GenerationError::InvalidArgument { name, .. }) => assert_eq!(name, parameter),
            other => panic!("expected InvalidArgument for {parameter}, got {other:?}"),
        }
    }

    #[rstest]
    #[case(15.5, "$15.50")]
    #[case(0.0, "$0.00")]
    #[case(1234.567, "$1234.57")]
    #[case(-5.0, "$-5.00")]
    fn formats_currency(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(to_currency(value).expect("finite"), expected);
    }

    #[test]
    fn currency_rejects_non_finite_values() {
        assert!(matches!(
            to_currency(f64::INFINITY),
            Err(GenerationError::InvalidArgument { name: "value", .. })
        ));
    }

    #[rstest]
    fn cards_are_sixteen_digit_luhn_valid(mut rng: ChaCha8Rng) {
        for _ in 0..500 {
            let card = test_credit_card(&mut rng).expect("card");
            assert_eq!(card.len(), 16, "{card}");
            assert!(card.starts_with(TEST_CARD_PREFIX), "{card}");
            assert!(card.chars().all(|c| c.is_ascii_digit()), "{card}");
            assert!(is_luhn_valid(&card), "{card}");
        }
    }

    #[rstest]
    #[case(3)]
    #[case(4)]
    fn cvv_has_requested_digits(mut rng: ChaCha8Rng, #[case] length: usize) {
        let code = cvv(&mut rng, length).expect("cvv");
        assert_eq!(code.len(), length);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }

    #[rstest]
    fn expiry_is_in_the_future(mut rng: ChaCha8Rng) {
        let clock = FixedClock::on_date(NaiveDate::from_ymd_opt(2025, 7, 7).expect("date"));
        for _ in 0..200 {
            let expiry = card_expiry(&mut rng, &clock);
            let (month_text, year_text) = expiry.split_once('/').expect("MM/YY");
            let month: u8 = month_text.parse().expect("month");
            let year: u8 = year_text.parse().expect("year");
            assert!((1..=12).contains(&month), "{expiry}");
            assert!((26..=31).contains(&year), "{expiry}");
            assert_eq!(expiry.len(), 5, "{expiry}");
        }
    }

    #[rstest]
    fn expiry_wraps_at_century(mut rng: ChaCha8Rng) {
        let clock = FixedClock::on_date(NaiveDate::from_ymd_opt(2098, 1, 1).expect("date"));
        for _ in 0..100 {
            let expiry = card_expiry(&mut rng, &clock);
            let (_, year_text) = expiry.split_once('/').expect("MM/YY");
            let year: u8 = year_text.parse().expect("year");
            assert!(year == 99 || year <= 4, "{expiry}");
        }
    }

    #[rstest]
    fn iban_uses_country_code(mut rng: ChaCha8Rng) {
        let value = iban(&mut rng, "DE").expect("iban");
        assert_eq!(value.len(), 16);
        let bban = value.strip_prefix("DE").expect("country prefix");
        assert!(bban.chars().take(2).all(|c| c.is_ascii_digit()));
        assert!(bban.chars().skip(2).all(|c| UPPER_ALPHANUMERIC.contains(c)));
    }

    #[rstest]
    #[case("gb")]
    #[case("GBR")]
    #[case("")]
    #[case("G1")]
    fn iban_rejects_malformed_country_codes(mut rng: ChaCha8Rng, #[case] code: &str) {
        assert!(matches!(
            iban(&mut rng, code),
            Err(GenerationError::InvalidArgument {
                name: "country_code",
                ..
            })
        ));
    }
}
