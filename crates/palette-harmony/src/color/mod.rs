//! Color types and conversions
//!
//! - [`HexColor`]: `#RRGGBB`, the form colors are stored and exchanged in
//! - [`Hsl`]: hue/saturation/lightness, the form harmony rules work in

mod hex;
mod hsl;

pub use hex::HexColor;
pub use hsl::{hex_to_hsl, hsl_to_hex, wrap_hue, Hsl};
