//! Channel limits and luminance weights.

/// Largest value a colour channel can hold
pub const CHANNEL_MAX: u8 = 255;

/// BT.709 red weight
pub const LUMA_RED: f64 = 0.2126;

/// BT.709 green weight
pub const LUMA_GREEN: f64 = 0.7152;

/// BT.709 blue weight
pub const LUMA_BLUE: f64 = 0.0722;

/// Hex digits needed before a shade input can be expanded to `rrggbb`
pub const SHADE_MIN_DIGITS: usize = 3;
