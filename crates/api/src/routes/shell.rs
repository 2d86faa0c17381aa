//! Shell routes.
//!
//! The HTML pages post `{state, action}` back to `/actions`; the JSON route
//! does the same for API clients. Neither stores anything.

use axum::{
    Form, Json, Router,
    extract::State,
    response::Html,
    routing::{get, post},
};
use canteiro_core::navigation::{Page, ShellAction, ShellState};
use canteiro_shared::AppError;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{AppState, error::ApiError, render};

/// Creates the HTML page routes.
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/actions", post(apply_action))
}

/// Creates the JSON shell routes, nested under `/api/v1`.
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/shell/transition", post(transition))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Form posted by every action button.
#[derive(Debug, Deserialize)]
pub struct ActionForm {
    /// Current state as JSON.
    pub state: String,
    /// Action token.
    pub action: String,
}

/// JSON transition request.
#[derive(Debug, Deserialize)]
pub struct TransitionRequest {
    /// Current state; the initial state when omitted.
    #[serde(default)]
    pub state: ShellState,
    /// Action to apply.
    pub action: ShellAction,
}

/// JSON transition response.
#[derive(Debug, Serialize)]
pub struct TransitionResponse {
    /// Next state.
    pub state: ShellState,
    /// Page drawn for it.
    pub page: Page,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET / - Initial page. Always the login screen.
async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    Ok(Html(render::page(&ShellState::default(), &state.ui)?))
}

/// POST /actions - Apply a form-posted action and render the next page.
async fn apply_action(
    State(state): State<AppState>,
    Form(form): Form<ActionForm>,
) -> Result<Html<String>, ApiError> {
    let current: ShellState = serde_json::from_str(&form.state)
        .map_err(|e| AppError::Validation(format!("Malformed shell state: {e}")))?;
    let action: ShellAction = form.action.parse()?;

    let next = current.apply(action);
    info!(
        action = %form.action,
        from = ?current.auth_view,
        to = ?next.auth_view,
        view = %next.view,
        "Shell action applied"
    );

    Ok(Html(render::page(&next, &state.ui)?))
}

/// POST /shell/transition - Apply an action to a JSON state.
async fn transition(Json(request): Json<TransitionRequest>) -> Json<TransitionResponse> {
    let next = request.state.apply(request.action);
    info!(
        action = ?request.action,
        from = ?request.state.auth_view,
        to = ?next.auth_view,
        view = %next.view,
        "Shell transition"
    );
    Json(TransitionResponse {
        page: Page::for_state(&next),
        state: next,
    })
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use canteiro_core::navigation::{ShellAction, ShellState, View};
    use canteiro_shared::config::UiConfig;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::{AppState, create_router};

    fn app() -> Router {
        create_router(AppState::new(UiConfig::default()))
    }

    fn action_form(state: &ShellState, action: &str) -> String {
        serde_urlencoded::to_string([
            ("state", serde_json::to_string(state).unwrap().as_str()),
            ("action", action),
        ])
        .unwrap()
    }

    async fn post_action(state: &ShellState, action: ShellAction) -> (StatusCode, String) {
        let body = action_form(state, &action.token());
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/actions")
                    .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_index_renders_login() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Aceda à sua conta"));
        assert!(html.contains(r#"value="login""#));
    }

    #[tokio::test]
    async fn test_login_action_renders_dashboard() {
        let (status, html) = post_action(&ShellState::default(), ShellAction::Login).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<title>Painel Geral - Canteiro</title>"));
        assert!(html.contains("Obras Ativas"));
        assert!(html.contains("auth_view"));
        assert!(html.contains("APP"));
        assert!(!html.contains(r#"value="login""#));
    }

    #[tokio::test]
    async fn test_company_settings_from_profile_menu() {
        let state = ShellState {
            profile_menu_open: true,
            ..ShellState::signed_in()
        };
        let (status, html) = post_action(&state, ShellAction::OpenCompanySettings).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<title>Gestão da Empresa - Canteiro</title>"));
        assert!(!html.contains(r#"value="close-profile-menu""#));
    }

    #[tokio::test]
    async fn test_invoicing_renders_moloni_placeholder() {
        let (_, html) =
            post_action(&ShellState::signed_in(), ShellAction::Navigate(View::Invoicing)).await;
        assert!(html.contains("Faturação via Moloni"));
    }

    #[tokio::test]
    async fn test_logout_returns_to_login() {
        let (_, html) = post_action(&ShellState::signed_in(), ShellAction::Logout).await;
        assert!(html.contains("<title>Entrar - Canteiro</title>"));
    }

    #[tokio::test]
    async fn test_unknown_action_is_rejected() {
        let body = action_form(&ShellState::default(), "dance");
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/actions")
                    .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_malformed_state_is_rejected() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/actions")
                    .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("state=garbage&action=login"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_json_transition() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/shell/transition")
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"action":{"type":"LOGIN"}}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["state"]["auth_view"], "APP");
        assert_eq!(json["state"]["view"], "DASHBOARD");
        assert_eq!(json["page"]["page"], "workspace");
        assert_eq!(json["page"]["screen"]["kind"], "overview");
    }
}
