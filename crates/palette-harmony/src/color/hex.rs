//! `#RRGGBB` color type
//!
//! Hex strings are the only serialization form for colors. Parsing is
//! case-insensitive; output is always uppercase.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// A 24-bit RGB color written as `#RRGGBB`.
///
/// # Example
/// ```
/// use palette_harmony::HexColor;
///
/// let teal: HexColor = "#4ecdc4".parse().unwrap();
/// assert_eq!(teal.to_string(), "#4ECDC4");
/// assert_eq!(teal.to_bytes(), [0x4E, 0xCD, 0xC4]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl HexColor {
    /// Pure black, `#000000`.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white, `#FFFFFF`.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from 8-bit channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Create a color from normalized channels.
    ///
    /// Each channel is clamped to 0.0..=1.0, scaled to 0..=255 and rounded
    /// to the nearest integer.
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self::new(unit_to_byte(r), unit_to_byte(g), unit_to_byte(b))
    }

    /// Channels normalized to 0.0..=1.0.
    pub fn to_unit(self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }

    /// Largest per-channel difference to another color.
    pub fn max_channel_delta(self, other: Self) -> u8 {
        let [r1, g1, b1] = self.to_bytes();
        let [r2, g2, b2] = other.to_bytes();
        r1.abs_diff(r2).max(g1.abs_diff(g2)).max(b1.abs_diff(b2))
    }
}

fn unit_to_byte(x: f64) -> u8 {
    // NaN clamps to NaN, and `as u8` maps that to 0
    (x.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = ParseColorError;

    /// Parse a color from `#RRGGBB`.
    ///
    /// The leading `#` is required and exactly six hex digits must follow.
    /// Digits may be upper- or lowercase.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').ok_or(ParseColorError::MissingPrefix)?;

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(bad));
        }
        if digits.len() != 6 {
            return Err(ParseColorError::InvalidLength(digits.len()));
        }

        // All ASCII from here, so byte slicing can't split a char
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
        match (channel(0), channel(2), channel(4)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self::new(r, g, b)),
            _ => Err(ParseColorError::InvalidLength(digits.len())),
        }
    }
}

impl From<[u8; 3]> for HexColor {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HexColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for HexColor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
