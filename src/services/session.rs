//! In-memory palette session.
//!
//! A session owns the palette history, the list of saved palettes and the
//! currently selected harmony rule. It is plain data; the HTTP layer wraps
//! it in a lock.

use palette_harmony::{
    generate_harmonic_palette_with, generate_random_color_with, HarmonyRule, HexColor, Palette,
    PaletteHistory,
};
use rand::Rng;

use crate::models::{AppConfig, ExportDocument};

/// Session state behind the palette API
#[derive(Debug, Clone)]
pub struct PaletteSession {
    history: PaletteHistory,
    saved: Vec<Palette>,
    rule: HarmonyRule,
}

impl PaletteSession {
    pub fn new(initial: Palette, rule: HarmonyRule, history_limit: Option<usize>) -> Self {
        Self {
            history: PaletteHistory::with_limit(initial, history_limit),
            saved: Vec::new(),
            rule,
        }
    }

    /// Create a session from the configured initial palette, rule and limit
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.initial_palette,
            config.default_rule,
            config.history_bound(),
        )
    }

    pub fn history(&self) -> &PaletteHistory {
        &self.history
    }

    pub fn current(&self) -> &Palette {
        self.history.current()
    }

    pub fn selected_rule(&self) -> HarmonyRule {
        self.rule
    }

    pub fn set_rule(&mut self, rule: HarmonyRule) {
        tracing::info!(rule = %rule, "Harmony rule selected");
        self.rule = rule;
    }

    /// Generate from a random seed and commit the result.
    ///
    /// `rule` overrides the selected rule for this call only.
    pub fn generate<R: Rng + ?Sized>(&mut self, rule: Option<HarmonyRule>, rng: &mut R) -> &Palette {
        let seed = generate_random_color_with(rng);
        self.generate_from_seed(seed, rule, rng)
    }

    /// Expand a caller-supplied seed and commit the result.
    pub fn generate_from_seed<R: Rng + ?Sized>(
        &mut self,
        seed: HexColor,
        rule: Option<HarmonyRule>,
        rng: &mut R,
    ) -> &Palette {
        let rule = rule.unwrap_or(self.rule);
        let palette = generate_harmonic_palette_with(seed, rule, rng);
        tracing::info!(seed = %seed, rule = %rule, "Generated palette");
        self.commit(palette)
    }

    /// Commit a palette supplied directly, e.g. a saved one.
    pub fn commit(&mut self, palette: Palette) -> &Palette {
        if self.history.commit(palette) {
            tracing::info!(
                position = self.history.cursor(),
                length = self.history.len(),
                "Committed palette"
            );
        } else {
            tracing::debug!(palette = %palette, "Palette equals current, not committed");
        }
        self.history.current()
    }

    pub fn undo(&mut self) -> &Palette {
        if !self.history.can_undo() {
            tracing::debug!("Nothing to undo");
        }
        self.history.undo()
    }

    pub fn redo(&mut self) -> &Palette {
        if !self.history.can_redo() {
            tracing::debug!("Nothing to redo");
        }
        self.history.redo()
    }

    /// Save a copy of the current palette. Returns the number of saved palettes.
    pub fn save_current(&mut self) -> usize {
        self.saved.push(*self.history.current());
        tracing::info!(saved = self.saved.len(), "Saved current palette");
        self.saved.len()
    }

    /// Saved palettes, oldest first
    pub fn saved(&self) -> &[Palette] {
        &self.saved
    }

    pub fn export(&self) -> ExportDocument {
        ExportDocument {
            current: *self.history.current(),
            saved: self.saved.clone(),
            exported_at: chrono::Utc::now(),
        }
    }
}

impl Default for PaletteSession {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn solid(v: u8) -> Palette {
        Palette::new([HexColor::new(v, v, v); 5])
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    #[test]
    fn test_from_config() {
        let config = AppConfig {
            default_rule: HarmonyRule::Triadic,
            history_limit: 2,
            ..Default::default()
        };
        let session = PaletteSession::from_config(&config);

        assert_eq!(session.current(), &config.initial_palette);
        assert_eq!(session.selected_rule(), HarmonyRule::Triadic);
        assert_eq!(session.history().limit(), Some(2));
        assert!(session.saved().is_empty());
    }

    #[test]
    fn test_generate_from_seed_uses_selected_rule() {
        let mut session = PaletteSession::new(solid(0), HarmonyRule::Complementary, None);
        let red = HexColor::new(255, 0, 0);

        let palette = *session.generate_from_seed(red, None, &mut rng());
        assert_eq!(palette[0], red);
        assert_eq!(palette[1], HexColor::new(0, 255, 255));
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_generate_rule_override_does_not_change_selection() {
        let mut session = PaletteSession::new(solid(0), HarmonyRule::Complementary, None);
        let red = HexColor::new(255, 0, 0);

        let palette = *session.generate_from_seed(red, Some(HarmonyRule::Analogous), &mut rng());
        assert_eq!(palette[2], HexColor::new(255, 255, 0));
        assert_eq!(session.selected_rule(), HarmonyRule::Complementary);
    }

    #[test]
    fn test_generate_random_commits() {
        let mut session = PaletteSession::new(solid(0), HarmonyRule::Random, None);
        let palette = *session.generate(None, &mut rng());

        assert_eq!(session.current(), &palette);
        assert!(session.history().can_undo());
    }

    #[test]
    fn test_undo_redo() {
        let mut session = PaletteSession::new(solid(1), HarmonyRule::Random, None);
        session.commit(solid(2));

        assert_eq!(session.undo(), &solid(1));
        assert_eq!(session.undo(), &solid(1));
        assert_eq!(session.redo(), &solid(2));
        assert_eq!(session.redo(), &solid(2));
    }

    #[test]
    fn test_commit_after_undo_truncates() {
        let mut session = PaletteSession::new(solid(1), HarmonyRule::Random, None);
        session.commit(solid(2));
        session.commit(solid(3));
        session.undo();
        session.commit(solid(4));

        let entries: Vec<Palette> = session.history().iter().copied().collect();
        assert_eq!(entries, vec![solid(1), solid(2), solid(4)]);
    }

    #[test]
    fn test_save_current() {
        let mut session = PaletteSession::new(solid(1), HarmonyRule::Random, None);
        assert_eq!(session.save_current(), 1);
        session.commit(solid(2));
        assert_eq!(session.save_current(), 2);

        assert_eq!(session.saved(), &[solid(1), solid(2)]);
    }

    #[test]
    fn test_saved_survives_undo() {
        let mut session = PaletteSession::new(solid(1), HarmonyRule::Random, None);
        session.commit(solid(2));
        session.save_current();
        session.undo();

        assert_eq!(session.saved(), &[solid(2)]);
        assert_eq!(session.current(), &solid(1));
    }

    #[test]
    fn test_export() {
        let mut session = PaletteSession::new(solid(1), HarmonyRule::Random, None);
        session.save_current();
        session.commit(solid(2));

        let doc = session.export();
        assert_eq!(doc.current, solid(2));
        assert_eq!(doc.saved, vec![solid(1)]);
    }

    #[test]
    fn test_set_rule() {
        let mut session = PaletteSession::default();
        assert_eq!(session.selected_rule(), HarmonyRule::Random);
        session.set_rule(HarmonyRule::Analogous);
        assert_eq!(session.selected_rule(), HarmonyRule::Analogous);
    }
}
