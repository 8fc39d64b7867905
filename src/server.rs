//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::FromRef,
    http::{header::CACHE_CONTROL, HeaderValue},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::api;
use crate::models::AppConfig;
use crate::services::{PaletteSession, SharedSession};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub session: SharedSession,
    pub config: Arc<AppConfig>,
}

impl FromRef<AppState> for SharedSession {
    fn from_ref(state: &AppState) -> Self {
        state.session.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

/// Create application state with a fresh session seeded from `config`.
pub fn create_app_state(config: AppConfig) -> AppState {
    let session = PaletteSession::from_config(&config);
    AppState {
        session: Arc::new(RwLock::new(session)),
        config: Arc::new(config),
    }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests. Every
/// response is marked `Cache-Control: no-store` since palette state changes
/// with each mutation.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Palette and history
        .route("/api/palette", get(api::handle_get_palette))
        .route("/api/palette/generate", post(api::handle_generate))
        .route("/api/palette/commit", post(api::handle_commit))
        .route("/api/palette/undo", post(api::handle_undo))
        .route("/api/palette/redo", post(api::handle_redo))
        // Harmony rule selection
        .route(
            "/api/rule",
            get(api::handle_get_rule).put(api::handle_set_rule),
        )
        // Saved palettes and export
        .route(
            "/api/saved",
            get(api::handle_list_saved).post(api::handle_save),
        )
        .route("/api/export", get(api::handle_export))
        // Stateless color conversion
        .route("/api/convert", get(api::handle_convert))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}
