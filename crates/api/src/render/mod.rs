//! Server-side HTML rendering.
//!
//! Markup lives in askama templates under `templates/`, which escape every
//! interpolated value. Rendering is a pure function of the shell state and
//! the UI labels: the same input always produces the same bytes. Every page
//! embeds the current [`ShellState`] in each action form, so the server never
//! stores it.

mod auth;
mod dashboard;
mod screens;
mod shell;

use askama::Template;
use canteiro_core::navigation::{Page, ShellAction, ShellState};
use canteiro_shared::config::UiConfig;
use canteiro_shared::{AppError, AppResult};

/// Renders a template to a string.
fn render<T: Template>(template: &T) -> AppResult<String> {
    template
        .render()
        .map_err(|e| AppError::Internal(format!("Failed to render template: {e}")))
}

/// A form that posts one action together with the current state.
#[derive(Template)]
#[template(path = "action_button.html")]
struct ActionButton<'a> {
    state: &'a str,
    token: String,
    class: &'a str,
    icon: &'a str,
    icon_class: &'a str,
    label: &'a str,
}

#[derive(Template)]
#[template(path = "document.html")]
struct Document<'a> {
    title: &'a str,
    product: &'a str,
    body: &'a str,
}

/// Values every fragment needs.
pub struct RenderContext<'a> {
    /// State being rendered.
    pub state: ShellState,
    /// Branding and profile labels.
    pub ui: &'a UiConfig,
    state_json: String,
}

impl<'a> RenderContext<'a> {
    /// Serializes the state once for the hidden form fields.
    pub fn new(state: ShellState, ui: &'a UiConfig) -> AppResult<Self> {
        let state_json = serde_json::to_string(&state)
            .map_err(|e| AppError::Internal(format!("Failed to encode shell state: {e}")))?;
        Ok(Self {
            state,
            ui,
            state_json,
        })
    }

    /// Serialized state, as posted back in the `state` field.
    pub fn state_json(&self) -> &str {
        &self.state_json
    }

    /// A text button that posts `action`.
    pub fn action_button(&self, action: ShellAction, class: &str, label: &str) -> AppResult<String> {
        self.icon_button(action, class, "", "", label)
    }

    /// A button with a leading icon span. An empty `icon` omits the span.
    pub fn icon_button(
        &self,
        action: ShellAction,
        class: &str,
        icon: &str,
        icon_class: &str,
        label: &str,
    ) -> AppResult<String> {
        render(&ActionButton {
            state: &self.state_json,
            token: action.token(),
            class,
            icon,
            icon_class,
            label,
        })
    }
}

/// Renders the full document for a shell state.
pub fn page(state: &ShellState, ui: &UiConfig) -> AppResult<String> {
    let ctx = RenderContext::new(*state, ui)?;
    let (title, body) = match Page::for_state(state) {
        Page::Login => ("Entrar", auth::login(&ctx)?),
        Page::Register => ("Criar conta", auth::register(&ctx)?),
        Page::Workspace(screen) => (state.view.label(), shell::workspace(&ctx, &screen)?),
    };
    render(&Document {
        title,
        product: &ui.product_name,
        body: &body,
    })
}
