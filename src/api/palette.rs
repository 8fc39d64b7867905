use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::validate;
use crate::error::ApiError;
use crate::services::{PaletteSession, SharedSession};

/// Current palette and history position
#[derive(Debug, Serialize, ToSchema)]
pub struct PaletteResponse {
    /// Five `#RRGGBB` colors
    pub colors: Vec<String>,
    /// Selected harmony rule
    pub rule: String,
    /// Cursor position in the history (0-based)
    pub position: usize,
    /// Number of palettes in the history
    pub length: usize,
    pub can_undo: bool,
    pub can_redo: bool,
}

impl PaletteResponse {
    pub fn from_session(session: &PaletteSession) -> Self {
        let history = session.history();
        Self {
            colors: session.current().to_hex_strings(),
            rule: session.selected_rule().to_string(),
            position: history.cursor(),
            length: history.len(),
            can_undo: history.can_undo(),
            can_redo: history.can_redo(),
        }
    }
}

/// Request body for palette generation
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Harmony rule for this call; defaults to the selected rule
    #[serde(default)]
    pub rule: Option<String>,
    /// Seed color `#RRGGBB`; a random seed is drawn if absent
    #[serde(default)]
    pub seed: Option<String>,
}

/// Request body for committing a palette
#[derive(Debug, Deserialize, ToSchema)]
pub struct CommitRequest {
    /// Exactly five `#RRGGBB` colors
    pub colors: Vec<String>,
}

/// Get the current palette
#[utoipa::path(
    get,
    path = "/api/palette",
    responses(
        (status = 200, description = "Current palette", body = PaletteResponse),
    ),
    tag = "Palette"
)]
pub async fn handle_get_palette(
    State(session): State<SharedSession>,
) -> Json<PaletteResponse> {
    let session = session.read().await;
    Json(PaletteResponse::from_session(&session))
}

/// Generate a new palette
///
/// Expands a seed color with a harmony rule and commits the result to the
/// history. Any palettes ahead of the cursor are discarded.
#[utoipa::path(
    post,
    path = "/api/palette/generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Palette generated", body = PaletteResponse),
        (status = 400, description = "Invalid seed color or harmony rule"),
    ),
    tag = "Palette"
)]
pub async fn handle_generate(
    State(session): State<SharedSession>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<PaletteResponse>, ApiError> {
    let rule = validate::parse_rule(request.rule.as_deref())?;
    let seed = request
        .seed
        .as_deref()
        .map(validate::parse_hex_color)
        .transpose()?;

    let mut session = session.write().await;
    match seed {
        Some(seed) => session.generate_from_seed(seed, rule, &mut rand::thread_rng()),
        None => session.generate(rule, &mut rand::thread_rng()),
    };

    Ok(Json(PaletteResponse::from_session(&session)))
}

/// Commit a palette supplied by the caller
#[utoipa::path(
    post,
    path = "/api/palette/commit",
    request_body = CommitRequest,
    responses(
        (status = 200, description = "Palette committed (or already current)", body = PaletteResponse),
        (status = 400, description = "Invalid palette"),
    ),
    tag = "Palette"
)]
pub async fn handle_commit(
    State(session): State<SharedSession>,
    Json(request): Json<CommitRequest>,
) -> Result<Json<PaletteResponse>, ApiError> {
    let palette = validate::parse_palette(&request.colors)?;

    let mut session = session.write().await;
    session.commit(palette);

    Ok(Json(PaletteResponse::from_session(&session)))
}

/// Step back one palette in the history
///
/// A no-op at the oldest palette.
#[utoipa::path(
    post,
    path = "/api/palette/undo",
    responses(
        (status = 200, description = "Palette after undo", body = PaletteResponse),
    ),
    tag = "Palette"
)]
pub async fn handle_undo(State(session): State<SharedSession>) -> Json<PaletteResponse> {
    let mut session = session.write().await;
    session.undo();
    Json(PaletteResponse::from_session(&session))
}

/// Step forward one palette in the history
///
/// A no-op at the newest palette.
#[utoipa::path(
    post,
    path = "/api/palette/redo",
    responses(
        (status = 200, description = "Palette after redo", body = PaletteResponse),
    ),
    tag = "Palette"
)]
pub async fn handle_redo(State(session): State<SharedSession>) -> Json<PaletteResponse> {
    let mut session = session.write().await;
    session.redo();
    Json(PaletteResponse::from_session(&session))
}
