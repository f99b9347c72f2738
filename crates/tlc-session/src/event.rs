//! What the controller asks the presentation layer to show.

use std::time::Duration;

use tlc_scenarios::LoseReason;

use crate::screen::Screen;

/// Something to render, in the order received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The session moved to another screen.
    ScreenChanged(Screen),
    /// A line of narration or prompt text.
    Line(String),
    /// A warning that leaves everything unchanged.
    Warning {
        /// Short title.
        title: String,
        /// Explanation.
        message: String,
    },
    /// The scenario was won. Call `acknowledge_outcome` after `return_after`.
    Victory {
        /// Congratulation message.
        message: String,
        /// How long to show the victory screen.
        return_after: Duration,
    },
    /// The scenario was lost. Call `acknowledge_outcome` when the player confirms.
    Defeat {
        /// Why.
        reason: LoseReason,
    },
}

impl Event {
    /// The text of a [`Event::Line`].
    pub fn as_line(&self) -> Option<&str> {
        match self {
            Self::Line(text) => Some(text),
            _ => None,
        }
    }
}
