//! # colourkit
//!
//! Colour math for theming code: hex ↔ RGB conversion, BT.709 luminance, and
//! proportional lightening/darkening.
//!
//! Inputs are tolerant. Hex parsing takes an optional `#` with 3 or 6 digits
//! and reports anything else as `None`. Channel arguments accept integers,
//! floats, text or nothing ([`ChannelValue`]) and are coerced rather than
//! rejected.
//!
//! ## Usage
//!
//! ```rust
//! use colourkit::{adjust_shade, compute_luminance_from_hex, decode_hex, encode_rgb, RgbColor};
//!
//! assert_eq!(decode_hex("#d90"), Some(RgbColor::new(221, 153, 0)));
//! assert_eq!(encode_rgb(300, "10", None::<u8>), "#ff0a00");
//! assert!(compute_luminance_from_hex("#000").unwrap() == 0.0);
//! assert_eq!(adjust_shade("#333", 0.4).unwrap(), "#474747");
//! ```

mod coerce;
mod color;
mod constants;
mod error;
mod math;

pub use coerce::ChannelValue;
pub use color::RgbColor;
pub use constants::{CHANNEL_MAX, LUMA_BLUE, LUMA_GREEN, LUMA_RED};
pub use error::{ColorError, Result};

use std::fmt;

/// Parse a hex colour from any displayable value.
///
/// The value is rendered to text first, so `decode_hex(0)` looks at `"0"`
/// (and fails). See [`RgbColor::from_hex`] for the accepted shapes.
pub fn decode_hex(input: impl fmt::Display) -> Option<RgbColor> {
    RgbColor::from_hex(&input.to_string())
}

/// Format three loosely-typed channels as lowercase `#rrggbb`.
///
/// Each channel goes through [`ChannelValue::to_clamped_channel`]: integer
/// prefix, 0 on failure, clamped to `0..=255`. Never fails.
pub fn encode_rgb(
    r: impl Into<ChannelValue>,
    g: impl Into<ChannelValue>,
    b: impl Into<ChannelValue>,
) -> String {
    RgbColor::new(
        r.into().to_clamped_channel(),
        g.into().to_clamped_channel(),
        b.into().to_clamped_channel(),
    )
    .to_hex()
}

/// BT.709 luminance of three loosely-typed channels.
///
/// Channels are not clamped, so `(300, 0, 0)` exceeds the red weight's
/// usual share. Non-numeric or missing channels contribute nothing.
pub fn compute_luminance(
    r: impl Into<ChannelValue>,
    g: impl Into<ChannelValue>,
    b: impl Into<ChannelValue>,
) -> f64 {
    math::luminance(
        r.into().to_number(),
        g.into().to_number(),
        b.into().to_number(),
    )
}

/// Luminance of a hex colour, or `None` when it does not parse.
pub fn compute_luminance_from_hex(hex: impl fmt::Display) -> Option<f64> {
    decode_hex(hex).map(|c| c.luminance())
}

/// Lighten or darken a hex colour by `fraction` (`0.2` = 20% lighter,
/// `-0.2` = 20% darker).
///
/// Non-hex characters are stripped before reading, and fewer than six
/// remaining digits are read as shorthand. A NaN fraction leaves the colour
/// unchanged. Fails when fewer than three hex digits remain.
///
/// ```rust
/// assert_eq!(colourkit::adjust_shade("#69c", 0.2).unwrap(), "#7ab8f5");
/// ```
pub fn adjust_shade(hex: &str, fraction: f64) -> Result<String> {
    let digits = math::normalize_shade_hex(hex).map_err(|digits| {
        tracing::debug!(input = hex, digits, "shade input too short");
        ColorError::ShadeInputTooShort {
            input: hex.to_string(),
            digits,
        }
    })?;
    let color = RgbColor::new(
        math::hex_pair(digits[0], digits[1]),
        math::hex_pair(digits[2], digits[3]),
        math::hex_pair(digits[4], digits[5]),
    );
    let shaded = color.adjust_shade(fraction);
    tracing::trace!(input = hex, fraction, %shaded, "adjusted shade");
    Ok(shaded.to_hex())
}
