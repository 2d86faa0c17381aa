//! User actions that drive the shell.

use serde::{Deserialize, Serialize};

use super::error::NavigationError;
use super::view::View;

/// Something the user did.
///
/// In JSON: `{"type": "NAVIGATE", "view": "BUDGETING"}`. In HTML forms each
/// action travels as a short token, see [`ShellAction::token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "view", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShellAction {
    /// Login screen reported success.
    Login,
    /// Register screen reported success.
    Register,
    /// Sign out from the profile menu.
    Logout,
    /// "Create account" link on the login screen.
    GoToRegister,
    /// "Already have an account" link on the register screen.
    GoToLogin,
    /// Sidebar entry, quick action or billing tile.
    Navigate(View),
    /// Hamburger button.
    ToggleMobileSidebar,
    /// Backdrop behind the mobile sidebar.
    CloseMobileSidebar,
    /// Avatar button.
    ToggleProfileMenu,
    /// Click on the invisible overlay behind the dropdown.
    CloseProfileMenu,
    /// "O meu perfil" entry.
    OpenProfileModal,
    /// Close button of the profile modal.
    CloseProfileModal,
    /// "Gestão da Empresa" entry.
    OpenCompanySettings,
}

const NAVIGATE_PREFIX: &str = "navigate:";

impl ShellAction {
    /// Form token for this action.
    #[must_use]
    pub fn token(self) -> String {
        let fixed = match self {
            Self::Navigate(view) => return format!("{NAVIGATE_PREFIX}{}", view.slug()),
            Self::Login => "login",
            Self::Register => "register",
            Self::Logout => "logout",
            Self::GoToRegister => "go-to-register",
            Self::GoToLogin => "go-to-login",
            Self::ToggleMobileSidebar => "toggle-mobile-sidebar",
            Self::CloseMobileSidebar => "close-mobile-sidebar",
            Self::ToggleProfileMenu => "toggle-profile-menu",
            Self::CloseProfileMenu => "close-profile-menu",
            Self::OpenProfileModal => "open-profile-modal",
            Self::CloseProfileModal => "close-profile-modal",
            Self::OpenCompanySettings => "open-company-settings",
        };
        fixed.to_string()
    }
}

impl std::str::FromStr for ShellAction {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(view) = s.strip_prefix(NAVIGATE_PREFIX) {
            return view.parse().map(Self::Navigate);
        }

        match s {
            "login" => Ok(Self::Login),
            "register" => Ok(Self::Register),
            "logout" => Ok(Self::Logout),
            "go-to-register" => Ok(Self::GoToRegister),
            "go-to-login" => Ok(Self::GoToLogin),
            "toggle-mobile-sidebar" => Ok(Self::ToggleMobileSidebar),
            "close-mobile-sidebar" => Ok(Self::CloseMobileSidebar),
            "toggle-profile-menu" => Ok(Self::ToggleProfileMenu),
            "close-profile-menu" => Ok(Self::CloseProfileMenu),
            "open-profile-modal" => Ok(Self::OpenProfileModal),
            "close-profile-modal" => Ok(Self::CloseProfileModal),
            "open-company-settings" => Ok(Self::OpenCompanySettings),
            _ => Err(NavigationError::UnknownAction(s.to_string())),
        }
    }
}
