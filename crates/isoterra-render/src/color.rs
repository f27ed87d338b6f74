//! RGB color values with 6-hex-digit text encoding.

use std::fmt;
use std::str::FromStr;

/// Errors that can occur when parsing a color string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// Input was not an optional `#` followed by exactly six hex digits.
    #[error("color must be a 6-digit hex string like #1e90ff, got {0:?}")]
    InvalidHex(String),
}

/// Immutable RGB triplet.
///
/// Parses from and encodes to the `#rrggbb` form. Blending happens in
/// floating point per channel and saturates to `0..=255` on the way back,
/// so lighting ratios outside `[0, 1]` clamp instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from raw channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` string; the leading `#` is optional.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(s.to_string()));
        }
        let channel = |range| u8::from_str_radix(&digits[range], 16);
        Ok(Self {
            r: channel(0..2).map_err(|_| ColorError::InvalidHex(s.to_string()))?,
            g: channel(2..4).map_err(|_| ColorError::InvalidHex(s.to_string()))?,
            b: channel(4..6).map_err(|_| ColorError::InvalidHex(s.to_string()))?,
        })
    }

    /// Encode as a lowercase `#rrggbb` string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Per-channel linear interpolation from `self` toward `other`.
    ///
    /// `ratio = 0` yields `self`, `ratio = 1` yields `other`. Channels are
    /// rounded and saturate to the valid range, so out-of-range ratios
    /// (e.g. a lighting scalar above 1) clamp at the endpoints' extremes.
    pub fn blend(self, other: Color, ratio: f64) -> Color {
        let mix = |a: u8, b: u8| -> u8 {
            let v = f64::from(a) + (f64::from(b) - f64::from(a)) * ratio;
            v.round().clamp(0.0, 255.0) as u8
        };
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_and_without_hash() {
        assert_eq!(Color::from_hex("#008000").unwrap(), Color::new(0, 128, 0));
        assert_eq!(Color::from_hex("008000").unwrap(), Color::new(0, 128, 0));
        assert_eq!(Color::from_hex("#FFFFFF").unwrap(), Color::new(255, 255, 255));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["#fff", "", "#gg0000", "#12345", "#1234567", "red"] {
            assert!(
                Color::from_hex(bad).is_err(),
                "{bad:?} should not parse as a color"
            );
        }
    }

    #[test]
    fn test_hex_round_trip() {
        let c = Color::new(30, 144, 255);
        assert_eq!(c.to_hex(), "#1e90ff");
        assert_eq!(Color::from_hex(&c.to_hex()).unwrap(), c);
        assert_eq!(c.to_string(), "#1e90ff");
    }

    #[test]
    fn test_blend_identity() {
        // Blending a color with itself is the identity for any ratio.
        let c = Color::from_hex("#ff0000").unwrap();
        for ratio in [-1.0, 0.0, 0.3, 0.7, 1.0, 2.5] {
            assert_eq!(c.blend(c, ratio), c, "ratio {ratio} broke the identity");
        }
    }

    #[test]
    fn test_blend_endpoints() {
        let black = Color::new(0, 0, 0);
        let white = Color::new(255, 255, 255);
        assert_eq!(black.blend(white, 0.0), black);
        assert_eq!(black.blend(white, 1.0), white);
        assert_eq!(black.blend(white, 0.5), Color::new(128, 128, 128));
    }

    #[test]
    fn test_blend_saturates_out_of_range() {
        let dark = Color::new(10, 10, 10);
        let light = Color::new(200, 200, 200);
        // Ratio above 1 overshoots past `light`; channels clamp at 255.
        assert_eq!(dark.blend(light, 2.0), Color::new(255, 255, 255));
        // Ratio below 0 undershoots past `dark`; channels clamp at 0.
        assert_eq!(dark.blend(light, -1.0), Color::new(0, 0, 0));
    }

    #[test]
    fn test_from_str() {
        let c: Color = "#2f4f4f".parse().unwrap();
        assert_eq!(c, Color::new(47, 79, 79));
    }
}
