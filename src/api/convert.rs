use axum::{extract::Query, Json};
use palette_harmony::hex_to_hsl;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::validate;
use crate::error::ApiError;

/// Query parameters for color conversion
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ConvertQuery {
    /// Color to convert, `#RRGGBB` (URL-encode the `#` as `%23`)
    pub hex: String,
}

/// A color in hex and HSL form
#[derive(Debug, Serialize, ToSchema)]
pub struct ConvertResponse {
    /// Normalized uppercase `#RRGGBB`
    pub hex: String,
    /// Hue in degrees, `[0, 360)`
    pub h: f64,
    /// Saturation percentage
    pub s: f64,
    /// Lightness percentage
    pub l: f64,
}

/// Convert a hex color to HSL
#[utoipa::path(
    get,
    path = "/api/convert",
    params(ConvertQuery),
    responses(
        (status = 200, description = "Converted color", body = ConvertResponse),
        (status = 400, description = "Invalid color format"),
    ),
    tag = "Color"
)]
pub async fn handle_convert(
    Query(query): Query<ConvertQuery>,
) -> Result<Json<ConvertResponse>, ApiError> {
    let color = validate::parse_hex_color(&query.hex)?;
    let hsl = hex_to_hsl(color);

    Ok(Json(ConvertResponse {
        hex: color.to_string(),
        h: hsl.h,
        s: hsl.s,
        l: hsl.l,
    }))
}
