//! HTTP layer for the Canteiro dashboard.
//!
//! This crate provides:
//! - Server-rendered shell pages driven by form-posted actions
//! - JSON routes exposing the same view models
//! - Error responses

pub mod error;
pub mod render;
pub mod routes;

use axum::Router;
use canteiro_shared::config::UiConfig;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Branding and profile labels for the shell.
    pub ui: Arc<UiConfig>,
}

impl AppState {
    /// Creates the state from the UI configuration.
    #[must_use]
    pub fn new(ui: UiConfig) -> Self {
        Self { ui: Arc::new(ui) }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::shell::page_routes())
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
