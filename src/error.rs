use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use palette_harmony::{PaletteError, ParseColorError, ParseRuleError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid color format: {0}")]
    InvalidColorFormat(String),

    #[error("Invalid harmony rule: {0}")]
    InvalidHarmonyRule(String),

    #[error("Invalid palette: {0}")]
    InvalidPalette(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ParseColorError> for ApiError {
    fn from(e: ParseColorError) -> Self {
        ApiError::InvalidColorFormat(e.to_string())
    }
}

impl From<ParseRuleError> for ApiError {
    fn from(e: ParseRuleError) -> Self {
        ApiError::InvalidHarmonyRule(e.0)
    }
}

impl From<PaletteError> for ApiError {
    fn from(e: PaletteError) -> Self {
        ApiError::InvalidPalette(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidColorFormat(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidHarmonyRule(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidPalette(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
