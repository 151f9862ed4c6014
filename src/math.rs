//! Colour math: BT.709 luminance and proportional shading.
//! Channels are plain f64/u8 here; argument coercion happens in `coerce`.

use crate::constants::{CHANNEL_MAX, LUMA_BLUE, LUMA_GREEN, LUMA_RED, SHADE_MIN_DIGITS};

/// Weighted BT.709 sum. Unclamped, unrounded.
///
/// Evaluated left to right so `(255, 255, 255)` yields exactly
/// `254.99999999999997`.
pub(crate) fn luminance(r: f64, g: f64, b: f64) -> f64 {
    LUMA_RED * r + LUMA_GREEN * g + LUMA_BLUE * b
}

/// Scale one channel by `1 + fraction`, clamp to `0..=255` and round.
///
/// A NaN fraction counts as 0. `0 * inf` lands on 0 rather than NaN.
pub(crate) fn shade_channel(c: u8, fraction: f64) -> u8 {
    let fraction = if fraction.is_nan() { 0.0 } else { fraction };
    let c = f64::from(c);
    // f64::max drops a NaN operand
    (c + c * fraction)
        .max(0.0)
        .min(f64::from(CHANNEL_MAX))
        .round() as u8
}

/// Reduce shade input to six hex digits.
///
/// Every non-hex character is dropped first. Fewer than six survivors are
/// read as shorthand from the first three; more than six keep the first six.
/// Returns the surviving digit count when fewer than three remain.
pub(crate) fn normalize_shade_hex(hex: &str) -> Result<[u8; 6], usize> {
    let digits: Vec<u8> = hex.bytes().filter(u8::is_ascii_hexdigit).collect();
    match digits.len() {
        n if n < SHADE_MIN_DIGITS => Err(n),
        n if n < 6 => Ok([
            digits[0], digits[0], digits[1], digits[1], digits[2], digits[2],
        ]),
        _ => {
            let mut out = [0u8; 6];
            out.copy_from_slice(&digits[..6]);
            Ok(out)
        }
    }
}

/// Decode a pair of ASCII hex digits.
pub(crate) fn hex_pair(hi: u8, lo: u8) -> u8 {
    (hex_digit(hi) << 4) | hex_digit(lo)
}

/// Value of one ASCII hex digit. Callers pass only validated digits.
pub(crate) fn hex_digit(d: u8) -> u8 {
    match d {
        b'0'..=b'9' => d - b'0',
        b'a'..=b'f' => d - b'a' + 10,
        b'A'..=b'F' => d - b'A' + 10,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luminance_matches_double_precision_sum() {
        assert_eq!(luminance(255.0, 255.0, 255.0), 254.99999999999997);
        assert_eq!(luminance(0.0, 0.0, 0.0), 0.0);
        assert_eq!(luminance(300.0, 0.0, 0.0), 0.2126 * 300.0);
    }

    #[test]
    fn shade_channel_scales_and_rounds() {
        assert_eq!(shade_channel(0x33, 0.4), 0x47);
        assert_eq!(shade_channel(0x99, 0.4), 0xd6);
        assert_eq!(shade_channel(0x33, 0.0), 0x33);
        assert_eq!(shade_channel(0x33, -0.5), 26);
    }

    #[test]
    fn shade_channel_clamps() {
        assert_eq!(shade_channel(0x33, 20.0), 255);
        assert_eq!(shade_channel(0x33, -20.0), 0);
        assert_eq!(shade_channel(0x33, f64::INFINITY), 255);
        assert_eq!(shade_channel(0, f64::INFINITY), 0);
        assert_eq!(shade_channel(0x33, f64::NAN), 0x33);
    }

    #[test]
    fn normalize_strips_and_expands() {
        assert_eq!(normalize_shade_hex("#333").unwrap(), *b"333333");
        assert_eq!(normalize_shade_hex("#AbC").unwrap(), *b"AAbbCC");
        assert_eq!(normalize_shade_hex("#d9-0a-1a").unwrap(), *b"d90a1a");
        assert_eq!(normalize_shade_hex("12345").unwrap(), *b"112233");
        assert_eq!(normalize_shade_hex("1234567").unwrap(), *b"123456");
        // 'x' is dropped, leaving "ff1"
        assert_eq!(normalize_shade_hex("xff1").unwrap(), *b"ffff11");
    }

    #[test]
    fn normalize_reports_short_input() {
        assert_eq!(normalize_shade_hex(""), Err(0));
        assert_eq!(normalize_shade_hex("#zz"), Err(0));
        assert_eq!(normalize_shade_hex("#f0"), Err(2));
    }

    #[test]
    fn hex_pair_is_case_insensitive() {
        assert_eq!(hex_pair(b'd', b'9'), 0xd9);
        assert_eq!(hex_pair(b'D', b'9'), 0xd9);
        assert_eq!(hex_pair(b'0', b'a'), 0x0a);
    }
}
