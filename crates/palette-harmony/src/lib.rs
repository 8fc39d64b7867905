//! palette-harmony: color-harmony palettes with undo/redo history
//!
//! This library turns one seed color into a five-color palette using a
//! harmony rule, and records successive palettes in a linear history that
//! supports undo and redo.
//!
//! # Quick Start
//!
//! ```
//! use palette_harmony::{generate_harmonic_palette, HarmonyRule, HexColor, PaletteHistory};
//!
//! let seed: HexColor = "#FF6B6B".parse().unwrap();
//! let first = generate_harmonic_palette(seed, HarmonyRule::Analogous);
//!
//! let mut history = PaletteHistory::new(first);
//! let second = generate_harmonic_palette(seed, HarmonyRule::Triadic);
//! history.commit(second);
//!
//! assert_eq!(history.undo(), &first);
//! assert!(history.can_redo());
//! ```
//!
//! # Color Model
//!
//! Colors are stored as [`HexColor`] (`#RRGGBB`, 8 bits per channel) and
//! expanded through [`Hsl`] for harmony math:
//!
//! | Type | Range | Used For |
//! |------|-------|----------|
//! | [`HexColor`] | 0..=255 per channel | storage, exchange, equality |
//! | [`Hsl`] | h 0..360, s/l 0..=100 | rotating hues, stepping s/l |
//!
//! [`hex_to_hsl`] and [`hsl_to_hex`] are inverse to each other within one
//! unit per channel. Grays have no hue and come back as `h = s = 0`.
//!
//! # Harmony Rules
//!
//! [`HarmonyRule`] names four strategies. Position 0 of every seeded palette
//! is the seed itself:
//!
//! | Rule | Positions 1–4 (offsets from the seed) |
//! |------|--------------------------------------|
//! | `complementary` | h+180; h+180, l−20; l−20; s−20 |
//! | `analogous` | h+30; h+60; h−30; h−60 |
//! | `triadic` | h+120; h+240; h+120, s−20; h+240, s−20 |
//! | `random` | five random colors, seed ignored |
//!
//! The −20 steps are not clamped up front. [`hsl_to_hex`] clamps each
//! output channel, so a step below zero floors at black.
//!
//! # History
//!
//! [`PaletteHistory`] is never empty and never fails: undo at the start and
//! redo at the end leave the cursor where it is. A commit after an undo
//! discards the redo branch. Committing a palette equal to the current one
//! is skipped.
//!
//! The history is plain owned data with no interior locking. Share it across
//! threads only behind a lock of your own.

pub mod color;
pub mod harmony;
pub mod history;
pub mod palette;


pub use color::{hex_to_hsl, hsl_to_hex, HexColor, Hsl};
pub use harmony::{
    generate_harmonic_palette, generate_harmonic_palette_with, generate_random_color,
    generate_random_color_with, HarmonyRule, ParseRuleError,
};
pub use history::PaletteHistory;
pub use palette::{Palette, PaletteError, ParseColorError, PALETTE_SIZE};
