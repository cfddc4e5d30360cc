//! CSS color formatters.

use rand::Rng;

/// Largest 24-bit color value.
const MAX_RGB: u32 = 0x00ff_ffff;

/// Returns a CSS hex color such as `#3a5fcd`, drawn from the full 24-bit range.
pub fn hex_color<R: Rng>(rng: &mut R) -> String {
    format!("#{:06x}", rng.random_range(0..=MAX_RGB))
}

/// Returns a CSS functional color such as `rgb(123,45,67)`.
pub fn rgb_color<R: Rng>(rng: &mut R) -> String {
    let [red, green, blue]: [u8; 3] = rng.random();
    format!("rgb({red},{green},{blue})")
}
