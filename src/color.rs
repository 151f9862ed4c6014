//! RgbColor: the public colour representation for colourkit.
//!
//! Stores three 8-bit channels. Hex parsing accepts an optional `#` followed
//! by 3 or 6 hex digits, case-insensitive. Formatting is always lowercase
//! `#rrggbb`.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;
use crate::math;

/// RGB colour with 0–255 channels. No alpha.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex string (with or without a single leading `#`, 3 or 6 digits).
    ///
    /// Shorthand digits are doubled, so `d90` reads as `dd9900`. Any other
    /// length or a non-hex character gives `None`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let stripped = hex.strip_prefix('#').unwrap_or(hex);
        if !stripped.bytes().all(|c| c.is_ascii_hexdigit()) {
            tracing::debug!(input = hex, "rejected hex colour: non-hex character");
            return None;
        }
        let color = match stripped.len() {
            3 => {
                let r = u8::from_str_radix(&stripped[0..1], 16).ok()?;
                let g = u8::from_str_radix(&stripped[1..2], 16).ok()?;
                let b = u8::from_str_radix(&stripped[2..3], 16).ok()?;
                Self::new(r * 17, g * 17, b * 17)
            }
            6 => {
                let r = u8::from_str_radix(&stripped[0..2], 16).ok()?;
                let g = u8::from_str_radix(&stripped[2..4], 16).ok()?;
                let b = u8::from_str_radix(&stripped[4..6], 16).ok()?;
                Self::new(r, g, b)
            }
            len => {
                tracing::debug!(input = hex, len, "rejected hex colour: wrong digit count");
                return None;
            }
        };
        tracing::trace!(input = hex, %color, "decoded hex colour");
        Some(color)
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// BT.709 luminance in `0.0..=255.0`.
    pub fn luminance(&self) -> f64 {
        math::luminance(f64::from(self.r), f64::from(self.g), f64::from(self.b))
    }

    /// Lighten (positive `fraction`) or darken (negative) every channel
    /// proportionally. `0.2` is 20% lighter; results clamp at black and white.
    pub fn adjust_shade(&self, fraction: f64) -> Self {
        Self {
            r: math::shade_channel(self.r, fraction),
            g: math::shade_channel(self.g, fraction),
            b: math::shade_channel(self.b, fraction),
        }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).ok_or_else(|| ColorError::InvalidHex(s.to_string()))
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<RgbColor> for (u8, u8, u8) {
    fn from(c: RgbColor) -> Self {
        (c.r, c.g, c.b)
    }
}
