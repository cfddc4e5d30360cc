//! Structural validators for generated and externally supplied values.
//!
//! These predicates check shape only: a phone number must have the right
//! digit grouping, not a real area code. They never panic, never normalise
//! their input, and return `false` for anything they do not recognise.
//!
//! # Validation Rules
//!
//! - US phone numbers: `(DDD) DDD-DDDD`, one whitespace character after the
//!   closing parenthesis
//! - ZIP codes: exactly five ASCII digits
//! - Alphabetic values: at least one character, ASCII letters only
//! - Email addresses: one `@`, a non-empty local part and a dotted domain

/// Template for US phone numbers. `d` is an ASCII digit, a space is any
/// whitespace character, everything else must match literally.
const US_PHONE_TEMPLATE: &str = "(ddd) ddd-dddd";

/// Template for five-digit US ZIP codes.
const ZIP_CODE_TEMPLATE: &str = "ddddd";

/// Returns `true` when `value` has the `(DDD) DDD-DDDD` shape.
///
/// # Examples
///
/// ```
/// use fixture_data::is_valid_us_phone_number;
///
/// assert!(is_valid_us_phone_number("(512) 345-6789"));
/// assert!(!is_valid_us_phone_number("512-345-6789"));
/// assert!(!is_valid_us_phone_number("(512) 345-678"));
/// ```
#[must_use]
pub fn is_valid_us_phone_number(value: &str) -> bool {
    matches_template(value, US_PHONE_TEMPLATE)
}

/// Returns `true` when `value` is exactly five ASCII digits.
#[must_use]
pub fn is_valid_zip_code(value: &str) -> bool {
    matches_template(value, ZIP_CODE_TEMPLATE)
}

/// Returns `true` when `value` is non-empty and contains only ASCII letters.
///
/// ```
/// use fixture_data::is_alpha_only;
///
/// assert!(is_alpha_only("TestName"));
/// assert!(!is_alpha_only("Test Name"));
/// assert!(!is_alpha_only(""));
/// ```
#[must_use]
pub fn is_alpha_only(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic())
}

/// Returns `true` for a missing value or the empty string.
///
/// Whitespace is content: `"  "` is not empty.
#[must_use]
pub const fn is_empty(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(text) => text.is_empty(),
    }
}

/// Returns `true` when `value` looks like `local@domain.tld`.
///
/// The local part must be non-empty, the domain must contain at least one
/// dot, no label may be empty, and whitespace is rejected anywhere.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let mut labels = domain.split('.');
    let label_count = labels.clone().count();
    label_count >= 2 && labels.all(|label| !label.is_empty())
}

fn matches_template(value: &str, template: &str) -> bool {
    value.chars().count() == template.chars().count()
        && value
            .chars()
            .zip(template.chars())
            .all(|(ch, expected)| match expected {
                'd' => ch.is_ascii_digit(),
                ' ' => ch.is_whitespace(),
                literal => ch == literal,
            })
}
