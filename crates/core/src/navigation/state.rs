//! Shell state and its reducer.

use serde::{Deserialize, Serialize};

use super::action::ShellAction;
use super::view::View;

/// Top-level mode of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthView {
    /// Login screen.
    #[default]
    Login,
    /// Registration screen.
    Register,
    /// Signed-in workspace.
    App,
}

/// Everything the shell remembers between two user actions.
///
/// Nothing is kept server-side: the rendered page carries this value and
/// posts it back with the next action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellState {
    /// Auth mode.
    pub auth_view: AuthView,
    /// Active workspace screen.
    pub view: View,
    /// Sidebar drawer on small screens.
    pub mobile_sidebar_open: bool,
    /// Profile dropdown in the header.
    pub profile_menu_open: bool,
    /// Profile modal.
    pub profile_modal_open: bool,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            auth_view: AuthView::Login,
            view: View::Dashboard,
            mobile_sidebar_open: false,
            profile_menu_open: false,
            profile_modal_open: false,
        }
    }
}

impl ShellState {
    /// State right after a successful login or registration.
    #[must_use]
    pub fn signed_in() -> Self {
        Self {
            auth_view: AuthView::App,
            ..Self::default()
        }
    }

    /// Applies an action and returns the next state.
    ///
    /// Total: actions that make no sense in the current mode (for example
    /// `Navigate` on the login screen) leave the state unchanged.
    #[must_use]
    pub fn apply(self, action: ShellAction) -> Self {
        match (self.auth_view, action) {
            (AuthView::Login, ShellAction::Login)
            | (AuthView::Register, ShellAction::Register) => Self::signed_in(),
            (AuthView::Login, ShellAction::GoToRegister) => Self {
                auth_view: AuthView::Register,
                ..self
            },
            (AuthView::Register, ShellAction::GoToLogin) => Self {
                auth_view: AuthView::Login,
                ..self
            },
            (AuthView::App, action) => self.apply_in_workspace(action),
            _ => self,
        }
    }

    fn apply_in_workspace(self, action: ShellAction) -> Self {
        match action {
            ShellAction::Logout => Self::default(),
            ShellAction::Navigate(view) => Self {
                view,
                mobile_sidebar_open: false,
                profile_menu_open: false,
                ..self
            },
            ShellAction::OpenCompanySettings => Self {
                view: View::CompanySettings,
                mobile_sidebar_open: false,
                profile_menu_open: false,
                ..self
            },
            ShellAction::ToggleMobileSidebar => Self {
                mobile_sidebar_open: !self.mobile_sidebar_open,
                ..self
            },
            ShellAction::CloseMobileSidebar => Self {
                mobile_sidebar_open: false,
                ..self
            },
            ShellAction::ToggleProfileMenu => Self {
                profile_menu_open: !self.profile_menu_open,
                ..self
            },
            ShellAction::CloseProfileMenu => Self {
                profile_menu_open: false,
                ..self
            },
            ShellAction::OpenProfileModal => Self {
                profile_modal_open: true,
                profile_menu_open: false,
                ..self
            },
            ShellAction::CloseProfileModal => Self {
                profile_modal_open: false,
                ..self
            },
            ShellAction::Login
            | ShellAction::Register
            | ShellAction::GoToRegister
            | ShellAction::GoToLogin => self,
        }
    }
}
