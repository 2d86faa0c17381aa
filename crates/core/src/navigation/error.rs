//! Navigation error types.

use canteiro_shared::AppError;
use thiserror::Error;

/// Errors from parsing navigation input coming from the client.
#[derive(Debug, Error)]
pub enum NavigationError {
    /// View name not known to this build.
    #[error("Unknown view: {0}")]
    UnknownView(String),

    /// Action token not known to this build.
    #[error("Unknown action: {0}")]
    UnknownAction(String),
}

impl From<NavigationError> for AppError {
    fn from(err: NavigationError) -> Self {
        Self::Validation(err.to_string())
    }
}
