//! Error types for the session controller.

use thiserror::Error;

use crate::screen::Screen;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors from driving the session in the wrong order.
///
/// Bad player input is never an error; it becomes narration or a warning.
/// Save failures are logged and swallowed by the store.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The action is not offered on the current screen.
    #[error("cannot {action} from the {screen} screen")]
    NotAvailable {
        /// What was attempted.
        action: &'static str,
        /// Where the session was.
        screen: Screen,
    },

    /// "Continue" was chosen but there is no save file.
    #[error("there is no saved game to continue")]
    NoSave,
}
