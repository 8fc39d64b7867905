use axum::{extract::State, Json};
use palette_harmony::HarmonyRule;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::services::SharedSession;

/// Selected harmony rule
#[derive(Debug, Serialize, ToSchema)]
pub struct RuleResponse {
    pub rule: String,
    /// Every rule the service understands
    pub available: Vec<String>,
}

impl RuleResponse {
    fn new(rule: HarmonyRule) -> Self {
        Self {
            rule: rule.to_string(),
            available: HarmonyRule::ALL.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// Request body for selecting a harmony rule
#[derive(Debug, Deserialize, ToSchema)]
pub struct RuleRequest {
    /// One of `random`, `complementary`, `analogous`, `triadic`
    pub rule: String,
}

/// Get the selected harmony rule
#[utoipa::path(
    get,
    path = "/api/rule",
    responses(
        (status = 200, description = "Selected rule", body = RuleResponse),
    ),
    tag = "Rule"
)]
pub async fn handle_get_rule(State(session): State<SharedSession>) -> Json<RuleResponse> {
    let rule = session.read().await.selected_rule();
    Json(RuleResponse::new(rule))
}

/// Select the harmony rule used by later generations
#[utoipa::path(
    put,
    path = "/api/rule",
    request_body = RuleRequest,
    responses(
        (status = 200, description = "Rule selected", body = RuleResponse),
        (status = 400, description = "Unknown harmony rule"),
    ),
    tag = "Rule"
)]
pub async fn handle_set_rule(
    State(session): State<SharedSession>,
    Json(request): Json<RuleRequest>,
) -> Result<Json<RuleResponse>, ApiError> {
    let rule: HarmonyRule = request.rule.parse()?;
    session.write().await.set_rule(rule);
    Ok(Json(RuleResponse::new(rule)))
}
