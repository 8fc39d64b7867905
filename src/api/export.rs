use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{AppConfig, ExportDocument};
use crate::services::SharedSession;

/// Build a `Content-Disposition` value offering `filename` as a download.
///
/// Quotes and control characters are dropped from the name.
pub fn attachment_header(filename: &str) -> String {
    let safe: String = filename
        .chars()
        .filter(|c| !c.is_control() && *c != '"' && *c != '\\')
        .collect();
    format!("attachment; filename=\"{safe}\"")
}

/// Export the current and saved palettes
///
/// Returns a pretty-printed JSON document offered as a file download.
#[utoipa::path(
    get,
    path = "/api/export",
    responses(
        (status = 200, description = "Export document", body = ExportDocument,
         content_type = "application/json"),
    ),
    tag = "Saved"
)]
pub async fn handle_export(
    State(session): State<SharedSession>,
    State(config): State<Arc<AppConfig>>,
) -> Result<Response, ApiError> {
    let document = session.read().await.export();
    let body = document.to_json_pretty()?;

    tracing::info!(
        saved = document.saved.len(),
        filename = %config.export_filename,
        "Exported palettes"
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                attachment_header(&config.export_filename),
            ),
        ],
        body,
    )
        .into_response())
}
