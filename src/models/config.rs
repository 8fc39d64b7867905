use palette_harmony::{HarmonyRule, HexColor, Palette};
use serde::Deserialize;
use std::path::Path;

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG_YAML: &str = include_str!("../../config.yaml");

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Harmony rule used when a request doesn't name one
    #[serde(default)]
    pub default_rule: HarmonyRule,

    /// Palette the session starts with
    #[serde(default = "default_initial_palette")]
    pub initial_palette: Palette,

    /// Maximum number of palettes kept for undo (0 = unbounded)
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// File name suggested for exported palettes
    #[serde(default = "default_export_filename")]
    pub export_filename: String,
}

fn default_initial_palette() -> Palette {
    Palette::new([
        HexColor::new(0xFF, 0x6B, 0x6B),
        HexColor::new(0x4E, 0xCD, 0xC4),
        HexColor::new(0x45, 0xB7, 0xD1),
        HexColor::new(0x96, 0xCE, 0xB4),
        HexColor::new(0xFF, 0xEE, 0xAD),
    ])
}

fn default_history_limit() -> usize {
    100
}

fn default_export_filename() -> String {
    "color-palettes.json".to_string()
}

impl AppConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Load configuration from a file, or the embedded default if `None`.
    ///
    /// Falls back to built-in defaults if the file can't be read or parsed.
    pub fn load(config_file: Option<&Path>) -> Self {
        let content = match config_file {
            Some(path) => match std::fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                    return Self::default();
                }
            },
            None => DEFAULT_CONFIG_YAML.to_string(),
        };

        match Self::from_yaml(&content) {
            Ok(config) => {
                tracing::info!(
                    default_rule = %config.default_rule,
                    history_limit = config.history_limit,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to parse config, using defaults");
                Self::default()
            }
        }
    }

    /// History limit as understood by `PaletteHistory::with_limit`
    pub fn history_bound(&self) -> Option<usize> {
        (self.history_limit > 0).then_some(self.history_limit)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_rule: HarmonyRule::default(),
            initial_palette: default_initial_palette(),
            history_limit: default_history_limit(),
            export_filename: default_export_filename(),
        }
    }
}
