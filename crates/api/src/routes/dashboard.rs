//! Dashboard routes.

use axum::{Json, Router, routing::get};
use canteiro_core::dashboard::DashboardOverview;
use tracing::debug;

use crate::AppState;

/// Creates the dashboard routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard/overview", get(get_overview))
}

/// GET /dashboard/overview - Overview widgets as JSON.
///
/// Served from the built-in mock data; there is no data layer behind it.
async fn get_overview() -> Json<DashboardOverview> {
    let overview = DashboardOverview::mock();
    debug!(
        alerts = overview.alerts.len(),
        projects = overview.projects.rows.len(),
        "Serving dashboard overview"
    );
    Json(overview)
}
