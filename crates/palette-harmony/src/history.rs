//! Linear undo/redo history of palettes
//!
//! [`PaletteHistory`] keeps an ordered list of palette snapshots and a cursor
//! pointing at the current one. Committing after an undo discards the redo
//! branch. Undo and redo at either end are no-ops, never errors, so a UI can
//! drive its buttons from [`PaletteHistory::can_undo`] and
//! [`PaletteHistory::can_redo`] alone.
//!
//! # Example
//!
//! ```
//! use palette_harmony::{HexColor, Palette, PaletteHistory};
//!
//! let a = Palette::new([HexColor::BLACK; 5]);
//! let b = Palette::new([HexColor::WHITE; 5]);
//!
//! let mut history = PaletteHistory::new(a);
//! history.commit(b);
//! assert_eq!(history.undo(), &a);
//! assert_eq!(history.redo(), &b);
//! assert!(!history.can_redo());
//! ```

use std::collections::VecDeque;

use crate::palette::Palette;

/// Bounded, branch-truncating history of palette snapshots.
///
/// Invariants:
/// - the sequence is never empty
/// - `cursor < len()`
/// - with a limit set, `len() <= limit`
#[derive(Debug, Clone)]
pub struct PaletteHistory {
    entries: VecDeque<Palette>,
    cursor: usize,
    limit: Option<usize>,
}

impl PaletteHistory {
    /// Start an unbounded history holding only `initial`.
    pub fn new(initial: Palette) -> Self {
        Self::with_limit(initial, None)
    }

    /// Start a history that keeps at most `limit` snapshots.
    ///
    /// When a commit would exceed the limit the oldest snapshot is evicted.
    /// `None` or `Some(0)` means unbounded.
    pub fn with_limit(initial: Palette, limit: Option<usize>) -> Self {
        let mut entries = VecDeque::new();
        entries.push_back(initial);
        Self {
            entries,
            cursor: 0,
            limit: limit.filter(|&n| n > 0),
        }
    }

    /// The palette under the cursor.
    pub fn current(&self) -> &Palette {
        &self.entries[self.cursor]
    }

    /// Record `palette` as the new current palette.
    ///
    /// Everything after the cursor is discarded first, then `palette` is
    /// appended and becomes current. Returns `false` without touching the
    /// history if `palette` equals the current palette.
    pub fn commit(&mut self, palette: Palette) -> bool {
        if palette == *self.current() {
            return false;
        }

        self.entries.truncate(self.cursor + 1);
        self.entries.push_back(palette);
        self.cursor = self.entries.len() - 1;

        if let Some(limit) = self.limit {
            while self.entries.len() > limit {
                self.entries.pop_front();
                self.cursor -= 1;
            }
        }
        true
    }

    /// Step back one palette if possible and return the current palette.
    pub fn undo(&mut self) -> &Palette {
        if self.can_undo() {
            self.cursor -= 1;
        }
        self.current()
    }

    /// Step forward one palette if possible and return the current palette.
    pub fn redo(&mut self) -> &Palette {
        if self.can_redo() {
            self.cursor += 1;
        }
        self.current()
    }

    /// Whether [`undo`](Self::undo) would move the cursor.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Whether [`redo`](Self::redo) would move the cursor.
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Index of the current palette.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of stored snapshots. Never zero.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a history holds at least its initial palette.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of snapshots kept, if bounded.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Snapshots from oldest to newest, including any redo branch.
    pub fn iter(&self) -> impl Iterator<Item = &Palette> {
        self.entries.iter()
    }
}
