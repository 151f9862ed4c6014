//! Loose argument coercion for channel inputs.
//!
//! Callers hand channels over as integers, floats, text or nothing at all.
//! Two coercions exist because the operations disagree on what a bad channel
//! means: hex encoding parses an integer prefix and clamps, luminance parses a
//! whole number and lets out-of-range values through.

use crate::constants::CHANNEL_MAX;

/// A channel argument before coercion.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ChannelValue {
    Int(i64),
    Float(f64),
    Text(String),
    /// Argument was omitted.
    #[default]
    Missing,
}

impl ChannelValue {
    /// Base-10 integer coercion clamped to `0..=255`.
    ///
    /// Text is read up to the first non-digit after optional leading
    /// whitespace and sign, so `"12px"` gives 12. Floats truncate toward zero.
    /// Anything without a leading integer is 0.
    pub fn to_clamped_channel(&self) -> u8 {
        let value = match self {
            Self::Int(v) => Some(*v),
            Self::Float(v) if v.is_finite() => Some(v.trunc() as i64),
            Self::Float(_) => None,
            Self::Text(text) => parse_int_prefix(text),
            Self::Missing => None,
        };
        match value {
            Some(v) => v.clamp(0, i64::from(CHANNEL_MAX)) as u8,
            None => {
                tracing::debug!(value = ?self, "channel has no integer value, using 0");
                0
            }
        }
    }

    /// Whole-value numeric coercion with no clamping.
    ///
    /// Empty text is 0, as is anything non-numeric, missing or non-finite, so a
    /// bad channel drops out of a weighted sum instead of poisoning it.
    pub fn to_number(&self) -> f64 {
        let value = match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Text(text) => parse_number(text),
            Self::Missing => Some(0.0),
        };
        match value.filter(|v| v.is_finite()) {
            Some(v) => v,
            None => {
                tracing::debug!(value = ?self, "channel is not numeric, using 0");
                0.0
            }
        }
    }
}

fn parse_int_prefix(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        return u64::from_str_radix(hex, 16).ok().map(|v| v as f64);
    }
    trimmed.parse::<f64>().ok()
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ChannelValue {
                fn from(v: $t) -> Self {
                    Self::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for ChannelValue {
    fn from(v: u64) -> Self {
        Self::Int(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<usize> for ChannelValue {
    fn from(v: usize) -> Self {
        Self::Int(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<f32> for ChannelValue {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for ChannelValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for ChannelValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for ChannelValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&String> for ChannelValue {
    fn from(v: &String) -> Self {
        Self::Text(v.clone())
    }
}

impl<T: Into<ChannelValue>> From<Option<T>> for ChannelValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Missing, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_channel_reads_integer_prefix() {
        assert_eq!(ChannelValue::from("12px").to_clamped_channel(), 12);
        assert_eq!(ChannelValue::from("  42").to_clamped_channel(), 42);
        assert_eq!(ChannelValue::from("+7").to_clamped_channel(), 7);
        assert_eq!(ChannelValue::from("3.9").to_clamped_channel(), 3);
        assert_eq!(ChannelValue::from("0x1f").to_clamped_channel(), 0);
    }

    #[test]
    fn clamped_channel_clamps() {
        assert_eq!(ChannelValue::from(300).to_clamped_channel(), 255);
        assert_eq!(ChannelValue::from(-300).to_clamped_channel(), 0);
        assert_eq!(ChannelValue::from("1000").to_clamped_channel(), 255);
        assert_eq!(ChannelValue::from("-5").to_clamped_channel(), 0);
        assert_eq!(
            ChannelValue::from("99999999999999999999999").to_clamped_channel(),
            255
        );
    }

    #[test]
    fn clamped_channel_defaults_to_zero() {
        assert_eq!(ChannelValue::from("chucknorris").to_clamped_channel(), 0);
        assert_eq!(ChannelValue::from("").to_clamped_channel(), 0);
        assert_eq!(ChannelValue::from("-").to_clamped_channel(), 0);
        assert_eq!(ChannelValue::Missing.to_clamped_channel(), 0);
        assert_eq!(ChannelValue::from(f64::NAN).to_clamped_channel(), 0);
        assert_eq!(ChannelValue::from(f64::INFINITY).to_clamped_channel(), 0);
    }

    #[test]
    fn clamped_channel_truncates_floats() {
        assert_eq!(ChannelValue::from(12.9).to_clamped_channel(), 12);
        assert_eq!(ChannelValue::from(-0.5).to_clamped_channel(), 0);
    }

    #[test]
    fn number_passes_out_of_range_through() {
        assert_eq!(ChannelValue::from(300).to_number(), 300.0);
        assert_eq!(ChannelValue::from(-300).to_number(), -300.0);
        assert_eq!(ChannelValue::from(" 12.5 ").to_number(), 12.5);
        assert_eq!(ChannelValue::from("0x1f").to_number(), 31.0);
    }

    #[test]
    fn number_neutralises_garbage() {
        assert_eq!(ChannelValue::from("nonsense").to_number(), 0.0);
        assert_eq!(ChannelValue::from("12px").to_number(), 0.0);
        assert_eq!(ChannelValue::from("0x").to_number(), 0.0);
        assert_eq!(ChannelValue::from("").to_number(), 0.0);
        assert_eq!(ChannelValue::from("NaN").to_number(), 0.0);
        assert_eq!(ChannelValue::from(f64::NAN).to_number(), 0.0);
        assert_eq!(ChannelValue::Missing.to_number(), 0.0);
    }

    #[test]
    fn option_maps_none_to_missing() {
        assert_eq!(ChannelValue::from(None::<u8>), ChannelValue::Missing);
        assert_eq!(ChannelValue::from(Some(4u8)), ChannelValue::Int(4));
        assert_eq!(ChannelValue::default(), ChannelValue::Missing);
    }
}
