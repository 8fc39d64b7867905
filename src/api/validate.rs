//! Input validation for palette API requests.
//!
//! The palette core assumes well-formed input; everything user-supplied is
//! checked here first.

use palette_harmony::{HarmonyRule, HexColor, Palette, PALETTE_SIZE};
use regex::Regex;
use std::sync::OnceLock;

use crate::error::ApiError;

static HEX_COLOR: OnceLock<Regex> = OnceLock::new();

fn hex_color_pattern() -> &'static Regex {
    HEX_COLOR.get_or_init(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid hex color regex"))
}

/// Whether `s` is a `#RRGGBB` color string.
pub fn is_hex_color(s: &str) -> bool {
    hex_color_pattern().is_match(s)
}

/// Validate and parse a `#RRGGBB` color string.
pub fn parse_hex_color(s: &str) -> Result<HexColor, ApiError> {
    if !is_hex_color(s) {
        return Err(ApiError::InvalidColorFormat(format!(
            "{s:?} (expected #RRGGBB)"
        )));
    }
    Ok(s.parse()?)
}

/// Validate and parse exactly five `#RRGGBB` color strings.
pub fn parse_palette(colors: &[String]) -> Result<Palette, ApiError> {
    if colors.len() != PALETTE_SIZE {
        return Err(ApiError::InvalidPalette(format!(
            "expected {PALETTE_SIZE} colors, got {}",
            colors.len()
        )));
    }
    for color in colors {
        parse_hex_color(color)?;
    }
    Ok(Palette::from_hex(colors)?)
}

/// Parse an optional harmony rule name.
pub fn parse_rule(rule: Option<&str>) -> Result<Option<HarmonyRule>, ApiError> {
    rule.map(|name| name.parse::<HarmonyRule>())
        .transpose()
        .map_err(ApiError::from)
}
