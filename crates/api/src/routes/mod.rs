//! Route definitions.

use axum::Router;

use crate::AppState;

pub mod dashboard;
pub mod health;
pub mod shell;
pub mod views;

/// Creates the JSON API router, nested under `/api/v1`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(dashboard::routes())
        .merge(views::routes())
        .merge(shell::api_routes())
}
