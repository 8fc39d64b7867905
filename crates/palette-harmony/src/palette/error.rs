//! Error types for palette operations
//!
//! This module provides error types for color parsing and palette validation.

use std::fmt;

/// Error type for parsing `#RRGGBB` color strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// The string does not start with `#`
    MissingPrefix,
    /// Wrong number of hex digits after the `#` (must be 6)
    InvalidLength(usize),
    /// A character that is not a hexadecimal digit
    InvalidDigit(char),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::MissingPrefix => {
                write!(f, "invalid color format: expected leading '#'")
            }
            ParseColorError::InvalidLength(len) => {
                write!(
                    f,
                    "invalid color format: expected 6 hex digits, got {}",
                    len
                )
            }
            ParseColorError::InvalidDigit(c) => {
                write!(f, "invalid color format: {:?} is not a hex digit", c)
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

/// Error type for palette construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// Palette does not contain exactly the required number of colors
    WrongLength {
        /// Required number of colors
        expected: usize,
        /// Number of colors supplied
        actual: usize,
    },
    /// One of the colors could not be parsed
    ParseColor {
        /// Position of the offending color
        index: usize,
        /// Underlying parse failure
        source: ParseColorError,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::WrongLength { expected, actual } => {
                write!(
                    f,
                    "palette must have exactly {} colors, got {}",
                    expected, actual
                )
            }
            PaletteError::ParseColor { index, source } => {
                write!(f, "color {}: {}", index, source)
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::ParseColor { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_error_messages() {
        assert_eq!(
            ParseColorError::MissingPrefix.to_string(),
            "invalid color format: expected leading '#'"
        );
        assert_eq!(
            ParseColorError::InvalidLength(3).to_string(),
            "invalid color format: expected 6 hex digits, got 3"
        );
        assert_eq!(
            ParseColorError::InvalidDigit('z').to_string(),
            "invalid color format: 'z' is not a hex digit"
        );
    }

    #[test]
    fn test_palette_error_messages() {
        let err = PaletteError::WrongLength {
            expected: 5,
            actual: 4,
        };
        assert_eq!(err.to_string(), "palette must have exactly 5 colors, got 4");

        let err = PaletteError::ParseColor {
            index: 2,
            source: ParseColorError::MissingPrefix,
        };
        assert_eq!(
            err.to_string(),
            "color 2: invalid color format: expected leading '#'"
        );
    }

    #[test]
    fn test_palette_error_source() {
        use std::error::Error;

        let err = PaletteError::ParseColor {
            index: 0,
            source: ParseColorError::InvalidDigit('x'),
        };
        assert!(err.source().is_some());

        let err = PaletteError::WrongLength {
            expected: 5,
            actual: 6,
        };
        assert!(err.source().is_none());
    }
}
