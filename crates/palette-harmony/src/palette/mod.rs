//! Five-color palettes
//!
//! This module provides the [`Palette`] type along with the error types for
//! color parsing and palette validation.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::{Palette, PALETTE_SIZE};
