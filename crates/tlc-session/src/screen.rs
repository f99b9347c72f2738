//! Where the player is in the game flow.

use tlc_core::ScenarioId;
use tlc_scenarios::LoseReason;

/// How a scenario ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player escaped.
    Win(ScenarioId),
    /// The player was caught or killed.
    Lose(ScenarioId, LoseReason),
}

impl Outcome {
    /// The scenario that ended.
    pub fn scenario(self) -> ScenarioId {
        match self {
            Self::Win(id) | Self::Lose(id, _) => id,
        }
    }
}

/// A screen of the game flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Title screen with "new game" and, if a save exists, "continue".
    #[default]
    Welcome,
    /// Asking for the player's name.
    NamePrompt,
    /// Choosing one of the three scenarios.
    ScenarioSelect,
    /// Playing a scenario.
    InScenario(ScenarioId),
    /// Showing how a scenario ended.
    Outcome(Outcome),
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Welcome => write!(f, "welcome"),
            Self::NamePrompt => write!(f, "name prompt"),
            Self::ScenarioSelect => write!(f, "scenario selection"),
            Self::InScenario(id) => write!(f, "playing {id}"),
            Self::Outcome(Outcome::Win(id)) => write!(f, "victory in {id}"),
            Self::Outcome(Outcome::Lose(id, reason)) => write!(f, "defeat in {id} ({reason})"),
        }
    }
}
