//! Textual content formatters: placeholder prose, file names, MIME types,
//! slugs and Base64.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rand::Rng;

use crate::error::GenerationError;
use crate::primitives::random_choice;

/// Default number of sentences for [`lorem_ipsum`].
pub const DEFAULT_LOREM_SENTENCES: usize = 1;

/// Default extension for [`file_name`].
pub const DEFAULT_FILE_EXTENSION: &str = "txt";

const LOREM_SENTENCES: [&str; 5] = [
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
    "Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.",
    "Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea \
     commodo consequat.",
    "Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat \
     nulla pariatur.",
    "Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit \
     anim id est laborum.",
];

const MIME_TYPES: [&str; 5] = [
    "image/png",
    "application/pdf",
    "text/plain",
    "image/jpeg",
    "application/json",
];

const FILE_NUMBER_MAX: u16 = 9_999;

/// Returns `sentences` placeholder sentences joined by single spaces.
///
/// Each sentence is drawn independently, so repeats are possible.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidLength`] when `sentences` is zero.
pub fn lorem_ipsum<R: Rng>(rng: &mut R, sentences: usize) -> Result<String, GenerationError> {
    if sentences == 0 {
        return Err(GenerationError::InvalidLength { length: sentences });
    }
    let picked = (0..sentences)
        .map(|_| random_choice(rng, &LOREM_SENTENCES).copied())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(picked.join(" "))
}

/// Returns one of a handful of common MIME types, for upload tests.
///
/// # Errors
///
/// Propagates [`GenerationError`] from the underlying choice.
pub fn mime_type<R: Rng>(rng: &mut R) -> Result<&'static str, GenerationError> {
    random_choice(rng, &MIME_TYPES).copied()
}

/// Returns a file name such as `file_8349.pdf`.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidArgument`] when `extension` is empty.
pub fn file_name<R: Rng>(rng: &mut R, extension: &str) -> Result<String, GenerationError> {
    if extension.is_empty() {
        return Err(GenerationError::invalid_argument(
            "extension",
            "must not be empty",
        ));
    }
    let number = rng.random_range(0..=FILE_NUMBER_MAX);
    Ok(format!("file_{number}.{extension}"))
}

/// Converts text into a URL-friendly slug.
///
/// The text is lowercased, every run of whitespace becomes a single `-`,
/// and anything other than ASCII letters, digits, `_` and `-` is dropped.
///
/// ```
/// use fixture_data::slugify;
///
/// assert_eq!(slugify("Hello World!"), "hello-world");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut in_whitespace = false;
    for ch in text.to_lowercase().chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
            slug.push(ch);
        }
    }
    slug
}

/// Encodes the UTF-8 bytes of `text` as padded standard Base64.
///
/// ```
/// use fixture_data::encode_base64;
///
/// assert_eq!(encode_base64("hello"), "aGVsbG8=");
/// ```
#[must_use]
pub fn encode_base64(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}
