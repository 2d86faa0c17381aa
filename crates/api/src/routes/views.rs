//! View catalog routes.

use axum::{
    Json, Router,
    extract::Path,
    routing::get,
};
use canteiro_core::navigation::{Screen, View, ViewRef};
use serde::Serialize;

use crate::AppState;

/// Creates the view catalog routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/views", get(list_views))
        .route("/views/{view}/screen", get(get_screen))
}

/// One entry of the view catalog.
#[derive(Debug, Serialize)]
pub struct ViewEntry {
    /// Wire name.
    pub view: View,
    /// Display label.
    pub label: &'static str,
    /// URL slug.
    pub slug: &'static str,
    /// Screen drawn for the view.
    pub screen: Screen,
}

/// GET /views - Every view in sidebar order with its screen.
async fn list_views() -> Json<Vec<ViewEntry>> {
    Json(
        View::ALL
            .into_iter()
            .map(|view| ViewEntry {
                view,
                label: view.label(),
                slug: view.slug(),
                screen: Screen::for_view(view),
            })
            .collect(),
    )
}

/// GET /views/{view}/screen - Screen for a view name or slug.
///
/// Unknown names are not an error: they get the under-construction screen.
async fn get_screen(Path(view): Path<String>) -> Json<Screen> {
    Json(Screen::for_view_ref(&ViewRef::parse(&view)))
}
