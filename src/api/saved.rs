use axum::{extract::State, http::StatusCode, Json};
use palette_harmony::Palette;
use serde::Serialize;
use utoipa::ToSchema;

use crate::services::SharedSession;

/// Saved palettes, oldest first
#[derive(Debug, Serialize, ToSchema)]
pub struct SavedResponse {
    pub palettes: Vec<Vec<String>>,
}

impl SavedResponse {
    fn new(saved: &[Palette]) -> Self {
        Self {
            palettes: saved.iter().map(Palette::to_hex_strings).collect(),
        }
    }
}

/// List saved palettes
#[utoipa::path(
    get,
    path = "/api/saved",
    responses(
        (status = 200, description = "Saved palettes", body = SavedResponse),
    ),
    tag = "Saved"
)]
pub async fn handle_list_saved(State(session): State<SharedSession>) -> Json<SavedResponse> {
    let session = session.read().await;
    Json(SavedResponse::new(session.saved()))
}

/// Save a copy of the current palette
///
/// Saved palettes live outside the undo history and survive undo/redo.
#[utoipa::path(
    post,
    path = "/api/saved",
    responses(
        (status = 201, description = "Palette saved", body = SavedResponse),
    ),
    tag = "Saved"
)]
pub async fn handle_save(
    State(session): State<SharedSession>,
) -> (StatusCode, Json<SavedResponse>) {
    let mut session = session.write().await;
    session.save_current();
    (StatusCode::CREATED, Json(SavedResponse::new(session.saved())))
}
