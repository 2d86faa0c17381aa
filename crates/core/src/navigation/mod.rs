//! Shell navigation.
//!
//! The shell owns the auth mode, the active view and the overlay flags. All
//! of it lives in [`ShellState`], which is serializable and changes only
//! through [`ShellState::apply`]. Which page is drawn is a total function of
//! that state, see [`Page::for_state`].

pub mod action;
pub mod dispatch;
pub mod error;
pub mod state;
pub mod view;

#[cfg(test)]
mod state_props;

pub use action::ShellAction;
pub use dispatch::{Page, Screen};
pub use error::NavigationError;
pub use state::{AuthView, ShellState};
pub use view::{View, ViewRef};
