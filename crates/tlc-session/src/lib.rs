//! Session controller for The Last Code.
//!
//! [`GameSession`] walks the player from the welcome screen through name
//! entry and scenario selection into play, persists the save document after
//! every accepted command, and turns wins and losses into outcome screens.
//! Presentation layers drive it with method calls and render the returned
//! [`Event`]s.

pub mod audio;
pub mod error;
pub mod event;
pub mod screen;
pub mod session;
pub mod text;

pub use audio::{Cue, Silent, Soundboard};
pub use error::{SessionError, SessionResult};
pub use event::Event;
pub use screen::{Outcome, Screen};
pub use session::GameSession;
