//! Identifier and network formatters.

use std::net::Ipv4Addr;

use rand::Rng;
use uuid::{Builder, Uuid};

use crate::error::GenerationError;
use crate::primitives::random_choice;

const USER_AGENTS: [&str; 4] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/91.0.4472.124 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) \
     Version/14.1.1 Safari/605.1.15",
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:89.0) Gecko/20100101 Firefox/89.0",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 14_6 like Mac OS X) AppleWebKit/605.1.15 \
     (KHTML, like Gecko) Version/14.0 Mobile/15E148 Safari/604.1",
];

/// Returns a version 4 UUID built from the supplied RNG.
///
/// Drawing the bytes from `rng` rather than the operating system keeps the
/// identifier reproducible under a seeded generator.
///
/// ```
/// use fixture_data::{seeded_rng, uuid_v4};
///
/// let id = uuid_v4(&mut seeded_rng(1));
/// assert_eq!(id.get_version_num(), 4);
/// assert_eq!(id, uuid_v4(&mut seeded_rng(1)));
/// ```
pub fn uuid_v4<R: Rng>(rng: &mut R) -> Uuid {
    Builder::from_random_bytes(rng.random()).into_uuid()
}

/// Returns a random dotted-quad IPv4 address.
pub fn ipv4_address<R: Rng>(rng: &mut R) -> String {
    let octets: [u8; 4] = rng.random();
    Ipv4Addr::from(octets).to_string()
}

/// Returns a random MAC address as six lowercase hex octets joined by `:`.
pub fn mac_address<R: Rng>(rng: &mut R) -> String {
    let octets: [u8; 6] = rng.random();
    octets
        .iter()
        .map(|octet| format!("{octet:02x}"))
        .collect::<Vec<_>>()
        .join(":")
}

/// Returns one of a fixed set of common browser User-Agent strings.
///
/// # Errors
///
/// Propagates [`GenerationError`] from the underlying choice.
pub fn user_agent<R: Rng>(rng: &mut R) -> Result<&'static str, GenerationError> {
    random_choice(rng, &USER_AGENTS).copied()
}
