//! Which screen is drawn for which view.

use serde::Serialize;

use super::state::{AuthView, ShellState};
use super::view::{View, ViewRef};

/// Content of the workspace area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Screen {
    /// The dashboard overview.
    Overview,
    /// A module screen owned by its own component.
    Module {
        /// The module.
        view: View,
    },
    /// Moloni integration notice.
    InvoicingPlaceholder,
    /// Generic "em construção" notice.
    UnderConstruction {
        /// Label of the view that was asked for.
        label: String,
    },
}

impl Screen {
    /// Screen for a known view. Exhaustive, so adding a view forces a decision here.
    #[must_use]
    pub fn for_view(view: View) -> Self {
        match view {
            View::Dashboard => Self::Overview,
            View::Invoicing => Self::InvoicingPlaceholder,
            View::Budgeting
            | View::SiteManagement
            | View::Schedule
            | View::Tasks
            | View::Team
            | View::Compliance
            | View::Approvals
            | View::Financial
            | View::Reports
            | View::CompanySettings
            | View::Support => Self::Module { view },
            View::Plans | View::Prices | View::Articles => Self::UnderConstruction {
                label: view.label().to_string(),
            },
        }
    }

    /// Screen for a view name from an untyped source.
    #[must_use]
    pub fn for_view_ref(view: &ViewRef) -> Self {
        match view {
            ViewRef::Known(view) => Self::for_view(*view),
            ViewRef::Unknown(raw) => Self::UnderConstruction { label: raw.clone() },
        }
    }
}

/// Top-level page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", content = "screen", rename_all = "snake_case")]
pub enum Page {
    /// Login form.
    Login,
    /// Registration form.
    Register,
    /// Signed-in shell with the given screen.
    Workspace(Screen),
}

impl Page {
    /// Page for a shell state.
    #[must_use]
    pub fn for_state(state: &ShellState) -> Self {
        match state.auth_view {
            AuthView::Login => Self::Login,
            AuthView::Register => Self::Register,
            AuthView::App => Self::Workspace(Screen::for_view(state.view)),
        }
    }
}
