//! Harmony rules and palette generation
//!
//! A harmony rule expands one seed color into a five-color [`Palette`] by
//! rotating the seed's hue and stepping its saturation or lightness down.
//! Only [`HarmonyRule::Random`] ignores the seed.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::color::{hex_to_hsl, HexColor, Hsl};
use crate::palette::Palette;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Step applied to saturation or lightness for the muted/darker variants.
const STEP: f64 = -20.0;

/// How a seed color is expanded into a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum HarmonyRule {
    /// Five unrelated random colors; the seed is ignored
    #[default]
    Random,
    /// Seed and its opposite hue, plus darker and desaturated variants
    Complementary,
    /// Neighbouring hues at ±30 and ±60 degrees
    Analogous,
    /// Hues spaced 120 degrees apart, plus desaturated variants
    Triadic,
}

impl HarmonyRule {
    /// Every rule, in display order.
    pub const ALL: [HarmonyRule; 4] = [
        HarmonyRule::Random,
        HarmonyRule::Complementary,
        HarmonyRule::Analogous,
        HarmonyRule::Triadic,
    ];

    /// Lowercase name of the rule.
    pub fn as_str(self) -> &'static str {
        match self {
            HarmonyRule::Random => "random",
            HarmonyRule::Complementary => "complementary",
            HarmonyRule::Analogous => "analogous",
            HarmonyRule::Triadic => "triadic",
        }
    }

    /// Whether the generated palette depends on the seed color.
    pub fn uses_seed(self) -> bool {
        !matches!(self, HarmonyRule::Random)
    }

    /// HSL offsets `(dh, ds, dl)` for palette positions 1 through 4.
    ///
    /// Position 0 is always the seed itself. `None` for [`HarmonyRule::Random`].
    pub fn offsets(self) -> Option<[(f64, f64, f64); 4]> {
        match self {
            HarmonyRule::Random => None,
            HarmonyRule::Complementary => Some([
                (180.0, 0.0, 0.0),
                (180.0, 0.0, STEP),
                (0.0, 0.0, STEP),
                (0.0, STEP, 0.0),
            ]),
            HarmonyRule::Analogous => Some([
                (30.0, 0.0, 0.0),
                (60.0, 0.0, 0.0),
                (-30.0, 0.0, 0.0),
                (-60.0, 0.0, 0.0),
            ]),
            HarmonyRule::Triadic => Some([
                (120.0, 0.0, 0.0),
                (240.0, 0.0, 0.0),
                (120.0, STEP, 0.0),
                (240.0, STEP, 0.0),
            ]),
        }
    }
}

impl fmt::Display for HarmonyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a harmony rule name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRuleError(pub String);

impl fmt::Display for ParseRuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown harmony rule {:?} (expected one of: random, complementary, analogous, triadic)",
            self.0
        )
    }
}

impl std::error::Error for ParseRuleError {}

impl FromStr for HarmonyRule {
    type Err = ParseRuleError;

    /// Parse a rule from its name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        HarmonyRule::ALL
            .into_iter()
            .find(|rule| rule.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseRuleError(s.to_string()))
    }
}

/// Draw a random color from the thread-local random source.
///
/// Each of the six hex digits is chosen independently and uniformly.
pub fn generate_random_color() -> HexColor {
    generate_random_color_with(&mut rand::thread_rng())
}

/// Draw a random color from the given random source.
pub fn generate_random_color_with<R: Rng + ?Sized>(rng: &mut R) -> HexColor {
    let mut digits = [0u8; 6];
    for digit in &mut digits {
        *digit = HEX_DIGITS[rng.gen_range(0..HEX_DIGITS.len())];
    }
    let byte = |hi: u8, lo: u8| (hex_value(hi) << 4) | hex_value(lo);
    HexColor::new(
        byte(digits[0], digits[1]),
        byte(digits[2], digits[3]),
        byte(digits[4], digits[5]),
    )
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        _ => digit - b'A' + 10,
    }
}

/// Expand a seed color into a palette using the thread-local random source.
///
/// See [`generate_harmonic_palette_with`].
pub fn generate_harmonic_palette(seed: HexColor, rule: HarmonyRule) -> Palette {
    generate_harmonic_palette_with(seed, rule, &mut rand::thread_rng())
}

/// Expand a seed color into a palette.
///
/// | rule | positions 0–4 |
/// |---|---|
/// | complementary | seed; h+180; h+180, l−20; l−20; s−20 |
/// | analogous | seed; h+30; h+60; h−30; h−60 |
/// | triadic | seed; h+120; h+240; h+120, s−20; h+240, s−20 |
/// | random | five random colors drawn from `rng` |
///
/// Hues wrap into 0..360. The −20 steps are not clamped, so a dark seed's
/// `l−20` variant floors at black instead of failing. Deterministic for
/// every rule except [`HarmonyRule::Random`], which is the only one that
/// touches `rng`.
///
/// # Example
///
/// ```
/// use palette_harmony::{generate_harmonic_palette, HarmonyRule, HexColor};
///
/// let red = HexColor::new(255, 0, 0);
/// let palette = generate_harmonic_palette(red, HarmonyRule::Complementary);
/// assert_eq!(palette[0], red);
/// assert_eq!(palette[1].to_string(), "#00FFFF");
/// ```
pub fn generate_harmonic_palette_with<R: Rng + ?Sized>(
    seed: HexColor,
    rule: HarmonyRule,
    rng: &mut R,
) -> Palette {
    let Some(offsets) = rule.offsets() else {
        return Palette::new(std::array::from_fn(|_| generate_random_color_with(rng)));
    };

    let base: Hsl = hex_to_hsl(seed);
    let mut colors = [seed; 5];
    for (slot, (dh, ds, dl)) in colors[1..].iter_mut().zip(offsets) {
        *slot = base.shifted(dh, ds, dl).to_hex();
    }
    Palette::new(colors)
}
