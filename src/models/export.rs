use chrono::{DateTime, Utc};
use palette_harmony::Palette;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Downloadable snapshot of the session's palettes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExportDocument {
    /// Current palette
    #[schema(value_type = Vec<String>)]
    pub current: Palette,
    /// Saved palettes, oldest first
    #[schema(value_type = Vec<Vec<String>>)]
    pub saved: Vec<Palette>,
    /// When the export was produced
    #[schema(value_type = String, format = DateTime)]
    pub exported_at: DateTime<Utc>,
}

impl ExportDocument {
    /// Render as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
