//! Integration tests for the public generator surface.
//!
//! These tests exercise the crate through its re-exports, checking that
//! seeded generation is reproducible and that generated values satisfy the
//! crate's own validators.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use chrono::NaiveDate;
use fixture_data::{
    DEFAULT_AMOUNT_MAX, DEFAULT_AMOUNT_MIN, DEFAULT_CVV_LENGTH, DEFAULT_IBAN_COUNTRY, FixedClock,
    GenerationError, UserRole, build_user_profile, card_expiry, cvv, date_of_birth, iban,
    invalid_email, invalid_phone_number, invalid_zip_code, is_luhn_valid, is_valid_email,
    is_valid_us_phone_number, is_valid_zip_code, luhn_check_digit, payment_amount, random_email,
    random_int, seeded_rng, ssn, test_credit_card, today, us_cell_number, uuid_v4, zip_code,
};
use mockable::DefaultClock;
use rand::Rng;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> FixedClock {
    FixedClock::on_date(NaiveDate::from_ymd_opt(2025, 7, 7).expect("valid date"))
}

/// Draws a representative value from every major generator family.
fn sample<R: Rng>(rng: &mut R, clock: &FixedClock) -> Vec<String> {
    vec![
        uuid_v4(rng).to_string(),
        random_email(rng).expect("email"),
        us_cell_number(rng),
        ssn(rng),
        zip_code(rng),
        test_credit_card(rng).expect("card"),
        cvv(rng, DEFAULT_CVV_LENGTH).expect("cvv"),
        iban(rng, DEFAULT_IBAN_COUNTRY).expect("iban"),
        payment_amount(rng, DEFAULT_AMOUNT_MIN, DEFAULT_AMOUNT_MAX).expect("amount"),
        card_expiry(rng, clock),
        date_of_birth(rng, clock, 18, 65).expect("date of birth"),
    ]
}

#[rstest]
fn seeded_generation_is_reproducible(clock: FixedClock) {
    let first = sample(&mut seeded_rng(2025), &clock);
    let second = sample(&mut seeded_rng(2025), &clock);
    assert_eq!(first, second);
}

#[rstest]
fn different_seeds_diverge(clock: FixedClock) {
    assert_ne!(
        sample(&mut seeded_rng(1), &clock),
        sample(&mut seeded_rng(2), &clock)
    );
}

#[test]
fn generated_contacts_pass_validators() {
    let mut rng = seeded_rng(31);
    for _ in 0..200 {
        assert!(is_valid_us_phone_number(&us_cell_number(&mut rng)));
        assert!(is_valid_zip_code(&zip_code(&mut rng)));
        assert!(is_valid_email(&random_email(&mut rng).expect("email")));
    }
}

#[test]
fn negative_fixtures_fail_validators() {
    let mut rng = seeded_rng(32);
    assert!(!is_valid_email(&invalid_email(&mut rng).expect("email")));
    assert!(!is_valid_us_phone_number(
        &invalid_phone_number(&mut rng).expect("phone")
    ));
    assert!(!is_valid_zip_code(invalid_zip_code()));
}

#[test]
fn every_test_card_is_luhn_valid() {
    let mut rng = seeded_rng(33);
    for _ in 0..500 {
        let card = test_credit_card(&mut rng).expect("card");
        assert_eq!(card.len(), 16, "{card}");
        assert!(is_luhn_valid(&card), "{card}");
    }
}

#[test]
fn random_payloads_complete_to_valid_numbers() {
    let mut rng = seeded_rng(34);
    for _ in 0..500 {
        let length = rng.random_range(1..=30);
        let payload: String = (0..length)
            .map(|_| char::from(b'0' + rng.random_range(0..=9_u8)))
            .collect();
        let check = luhn_check_digit(&payload).expect("digits");
        assert!(is_luhn_valid(&format!("{payload}{check}")), "{payload}{check}");
    }
}

#[rstest]
#[case(0, 0)]
#[case(-5, 5)]
#[case(i64::MIN, i64::MAX)]
fn random_int_stays_within_bounds(#[case] min: i64, #[case] max: i64) {
    let mut rng = seeded_rng(35);
    for _ in 0..1_000 {
        let value = random_int(&mut rng, min, max).expect("valid range");
        assert!((min..=max).contains(&value));
    }
}

#[test]
fn random_int_rejects_inverted_range() {
    assert_eq!(
        random_int(&mut seeded_rng(36), 10, 1),
        Err(GenerationError::InvalidRange { min: 10, max: 1 })
    );
}

#[test]
fn roles_cover_the_closed_set() {
    let mut rng = seeded_rng(37);
    let mut seen = Vec::new();
    for _ in 0..500 {
        let role = build_user_profile(&mut rng).expect("profile").role;
        if !seen.contains(&role) {
            seen.push(role);
        }
    }
    assert_eq!(seen.len(), UserRole::ALL.len());
}

#[test]
fn system_clock_reports_a_calendar_date() {
    let date = today(&DefaultClock);
    assert!(NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_ok(), "{date}");
}
