//! HSL color type and hex conversions
//!
//! Hue is in degrees, saturation and lightness in percent. The conversions
//! are inverse to each other up to 8-bit rounding.

use super::hex::HexColor;

/// A color in HSL form.
///
/// `h` is in degrees 0.0..360.0, `s` and `l` in percent 0.0..=100.0.
/// Values produced by [`hex_to_hsl`] always lie in these ranges. Values
/// passed to [`hsl_to_hex`] may lie outside of them; see there.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// Hue in degrees
    pub h: f64,
    /// Saturation in percent
    pub s: f64,
    /// Lightness in percent
    pub l: f64,
}

impl Hsl {
    /// Create a new HSL value. No range checks are applied.
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Offset hue, saturation and lightness.
    ///
    /// The hue is wrapped into 0.0..360.0. Saturation and lightness are
    /// left unclamped; [`hsl_to_hex`] floors them per channel.
    pub fn shifted(self, dh: f64, ds: f64, dl: f64) -> Self {
        Self {
            h: wrap_hue(self.h + dh),
            s: self.s + ds,
            l: self.l + dl,
        }
    }

    /// Convert to a hex color. See [`hsl_to_hex`].
    #[inline]
    pub fn to_hex(self) -> HexColor {
        hsl_to_hex(self.h, self.s, self.l)
    }

    /// True when the color has no defined hue.
    pub fn is_achromatic(self) -> bool {
        self.s == 0.0
    }
}

impl From<HexColor> for Hsl {
    fn from(color: HexColor) -> Self {
        hex_to_hsl(color)
    }
}

impl From<Hsl> for HexColor {
    fn from(hsl: Hsl) -> Self {
        hsl.to_hex()
    }
}

/// Reduce a hue in degrees into 0.0..360.0, wrapping negative values.
pub fn wrap_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid of a tiny negative number rounds up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Convert a hex color to HSL.
///
/// Grays (all channels equal) have no hue; they come back with `h` and `s`
/// both 0.
///
/// # Example
/// ```
/// use palette_harmony::{hex_to_hsl, HexColor};
///
/// let hsl = hex_to_hsl(HexColor::new(255, 0, 0));
/// assert_eq!((hsl.h, hsl.s, hsl.l), (0.0, 100.0, 50.0));
///
/// let gray = hex_to_hsl(HexColor::new(0x80, 0x80, 0x80));
/// assert_eq!(gray.s, 0.0);
/// ```
pub fn hex_to_hsl(color: HexColor) -> Hsl {
    let [r, g, b] = color.to_unit();

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    // Which 60-degree sector the hue falls in, as a fraction of six
    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(wrap_hue(sector / 6.0 * 360.0), s * 100.0, l * 100.0)
}

/// Convert HSL to a hex color.
///
/// The hue is wrapped into 0.0..360.0 first. Saturation and lightness are
/// used as given; each output channel is clamped to 0..=255 afterwards, so
/// out-of-range inputs floor at black (or saturate at white) rather than
/// fail.
///
/// # Example
/// ```
/// use palette_harmony::hsl_to_hex;
///
/// assert_eq!(hsl_to_hex(180.0, 100.0, 50.0).to_string(), "#00FFFF");
/// assert_eq!(hsl_to_hex(-180.0, 100.0, 50.0).to_string(), "#00FFFF");
/// assert_eq!(hsl_to_hex(0.0, 100.0, -10.0).to_string(), "#000000");
/// ```
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> HexColor {
    let h = wrap_hue(h);
    let s = s / 100.0;
    let l = l / 100.0;

    let a = s * l.min(1.0 - l);
    let channel = |n: f64| {
        let k = (n + h / 30.0) % 12.0;
        l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0)
    };

    HexColor::from_unit(channel(0.0), channel(8.0), channel(4.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_primary_colors() {
        let red = hex_to_hsl(HexColor::new(255, 0, 0));
        assert_close(red.h, 0.0);
        assert_close(red.s, 100.0);
        assert_close(red.l, 50.0);

        let green = hex_to_hsl(HexColor::new(0, 255, 0));
        assert_close(green.h, 120.0);

        let blue = hex_to_hsl(HexColor::new(0, 0, 255));
        assert_close(blue.h, 240.0);
    }

    #[test]
    fn test_hue_in_red_sector_below_zero_wraps() {
        // Red max with blue above green lands just below 360
        let magenta_red = hex_to_hsl(HexColor::new(255, 0, 128));
        assert!(magenta_red.h > 300.0 && magenta_red.h < 360.0);
    }

    #[test]
    fn test_saturation_branches_on_lightness() {
        // Dark: l < 0.5 uses d / (max + min)
        let dark = hex_to_hsl(HexColor::new(128, 0, 0));
        assert_close(dark.s, 100.0);
        assert!(dark.l < 50.0);

        // Light: l > 0.5 uses d / (2 - max - min)
        let light = hex_to_hsl(HexColor::new(255, 128, 128));
        assert_close(light.s, 100.0);
        assert!(light.l > 50.0);
    }

    #[test]
    fn test_achromatic_colors() {
        for v in [0u8, 1, 64, 128, 200, 255] {
            let hsl = hex_to_hsl(HexColor::new(v, v, v));
            assert_eq!(hsl.h, 0.0);
            assert_eq!(hsl.s, 0.0);
            assert!(hsl.is_achromatic());
            assert_close(hsl.l, v as f64 / 255.0 * 100.0);
        }
    }

    #[test]
    fn test_zero_saturation_ignores_hue() {
        let reference = hsl_to_hex(0.0, 0.0, 50.0);
        assert_eq!(reference, HexColor::new(128, 128, 128));
        for h in [0.0, 45.0, 90.0, 180.0, 270.0, 359.9, 720.0, -30.0] {
            assert_eq!(hsl_to_hex(h, 0.0, 50.0), reference, "hue {h}");
        }
    }

    #[test]
    fn test_hsl_to_hex_known_values() {
        assert_eq!(hsl_to_hex(0.0, 100.0, 50.0), HexColor::new(255, 0, 0));
        assert_eq!(hsl_to_hex(120.0, 100.0, 50.0), HexColor::new(0, 255, 0));
        assert_eq!(hsl_to_hex(240.0, 100.0, 50.0), HexColor::new(0, 0, 255));
        assert_eq!(hsl_to_hex(60.0, 100.0, 50.0), HexColor::new(255, 255, 0));
        assert_eq!(hsl_to_hex(0.0, 0.0, 100.0), HexColor::WHITE);
        assert_eq!(hsl_to_hex(0.0, 0.0, 0.0), HexColor::BLACK);
    }

    #[test]
    fn test_out_of_range_lightness_floors() {
        assert_eq!(hsl_to_hex(200.0, 80.0, -25.0), HexColor::BLACK);
        assert_eq!(hsl_to_hex(200.0, 80.0, 130.0), HexColor::WHITE);
    }

    #[test]
    fn test_wrap_hue() {
        assert_eq!(wrap_hue(0.0), 0.0);
        assert_eq!(wrap_hue(360.0), 0.0);
        assert_eq!(wrap_hue(390.0), 30.0);
        assert_eq!(wrap_hue(-30.0), 330.0);
        assert_eq!(wrap_hue(-720.0), 0.0);
        let tiny = wrap_hue(-1e-20);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn test_shifted_wraps_hue_only() {
        let hsl = Hsl::new(350.0, 10.0, 5.0).shifted(20.0, -20.0, -20.0);
        assert_close(hsl.h, 10.0);
        assert_close(hsl.s, -10.0);
        assert_close(hsl.l, -15.0);
    }

    #[test]
    fn test_from_impls_round_trip() {
        let color = HexColor::new(0x45, 0xB7, 0xD1);
        let hsl = Hsl::from(color);
        let back = HexColor::from(hsl);
        assert!(color.max_channel_delta(back) <= 1);
    }
}
