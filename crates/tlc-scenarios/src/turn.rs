//! The result of interpreting one command.

use serde::{Deserialize, Serialize};

/// Why a scenario was lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoseReason {
    /// Walked into an occupied hospital room.
    #[serde(rename = "descubierto")]
    Discovered,
    /// Killed by an animal in the forest.
    #[serde(rename = "atacado")]
    Attacked,
}

impl LoseReason {
    /// Headline for the defeat screen.
    pub fn headline(self) -> &'static str {
        match self {
            Self::Discovered => "Has sido descubierto",
            Self::Attacked => "Has sido atacado",
        }
    }
}

impl std::fmt::Display for LoseReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Discovered => write!(f, "descubierto"),
            Self::Attacked => write!(f, "atacado"),
        }
    }
}

/// Outcome of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Signal {
    /// Keep playing.
    #[default]
    Continue,
    /// The player escaped.
    Win,
    /// The scenario is over.
    Lose(LoseReason),
}

/// Narration lines collected while handling a command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Narration {
    lines: Vec<String>,
}

impl Narration {
    /// Empty narration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line.
    pub fn say(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Consume into the line list.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// Narration, the updated record, and the signal for one command.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn<S> {
    /// Lines to show, in order.
    pub lines: Vec<String>,
    /// The record after the command.
    pub state: S,
    /// Whether the scenario continues.
    pub signal: Signal,
}

impl<S> Turn<S> {
    /// A turn that says nothing and changes nothing.
    pub fn silent(state: S) -> Self {
        Self {
            lines: Vec::new(),
            state,
            signal: Signal::Continue,
        }
    }

    /// Convert the record type, keeping lines and signal.
    pub fn map<T>(self, f: impl FnOnce(S) -> T) -> Turn<T> {
        Turn {
            lines: self.lines,
            state: f(self.state),
            signal: self.signal,
        }
    }

    /// Whether any line contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }
}
