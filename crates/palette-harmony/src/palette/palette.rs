//! The fixed-size [`Palette`] type.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use super::error::PaletteError;
use crate::color::HexColor;

/// Number of colors in every palette.
pub const PALETTE_SIZE: usize = 5;

/// An ordered set of exactly five colors.
///
/// Position is meaningful to callers, so two palettes are equal only when
/// they hold the same colors in the same order. A palette has no identity
/// beyond its contents.
///
/// # Example
///
/// ```
/// use palette_harmony::Palette;
///
/// let palette = Palette::from_hex(&["#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEEAD"]).unwrap();
/// assert_eq!(palette[1].to_string(), "#4ECDC4");
/// assert_eq!(palette.to_string(), "#FF6B6B #4ECDC4 #45B7D1 #96CEB4 #FFEEAD");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Palette([HexColor; PALETTE_SIZE]);

impl Palette {
    /// Create a palette from five colors.
    #[inline]
    pub const fn new(colors: [HexColor; PALETTE_SIZE]) -> Self {
        Self(colors)
    }

    /// Parse a palette from hex strings.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::WrongLength`] unless exactly five strings are given
    /// - [`PaletteError::ParseColor`] for the first string that is not `#RRGGBB`
    pub fn from_hex<S: AsRef<str>>(hexes: &[S]) -> Result<Self, PaletteError> {
        if hexes.len() != PALETTE_SIZE {
            return Err(PaletteError::WrongLength {
                expected: PALETTE_SIZE,
                actual: hexes.len(),
            });
        }

        let mut colors = [HexColor::BLACK; PALETTE_SIZE];
        for (index, (slot, hex)) in colors.iter_mut().zip(hexes).enumerate() {
            *slot = hex
                .as_ref()
                .parse()
                .map_err(|source| PaletteError::ParseColor { index, source })?;
        }
        Ok(Self(colors))
    }

    /// The colors in order.
    #[inline]
    pub fn colors(&self) -> &[HexColor; PALETTE_SIZE] {
        &self.0
    }

    /// Iterate over the colors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, HexColor> {
        self.0.iter()
    }

    /// The colors as canonical `#RRGGBB` strings.
    pub fn to_hex_strings(&self) -> Vec<String> {
        self.0.iter().map(HexColor::to_string).collect()
    }
}

impl From<[HexColor; PALETTE_SIZE]> for Palette {
    fn from(colors: [HexColor; PALETTE_SIZE]) -> Self {
        Self(colors)
    }
}

impl TryFrom<&[HexColor]> for Palette {
    type Error = PaletteError;

    fn try_from(colors: &[HexColor]) -> Result<Self, Self::Error> {
        <[HexColor; PALETTE_SIZE]>::try_from(colors)
            .map(Self)
            .map_err(|_| PaletteError::WrongLength {
                expected: PALETTE_SIZE,
                actual: colors.len(),
            })
    }
}

impl Index<usize> for Palette {
    type Output = HexColor;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a HexColor;
    type IntoIter = std::slice::Iter<'a, HexColor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", color)?;
        }
        Ok(())
    }
}

impl FromStr for Palette {
    type Err = PaletteError;

    /// Parse five colors separated by commas and/or whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();
        Self::from_hex(parts.as_slice())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Palette {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.0, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Palette {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let colors = <Vec<HexColor> as serde::Deserialize>::deserialize(deserializer)?;
        Palette::try_from(colors.as_slice()).map_err(serde::de::Error::custom)
    }
}
