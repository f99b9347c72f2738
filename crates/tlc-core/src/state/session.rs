//! The save document.

use serde::{Deserialize, Serialize};

use super::{ForestState, HospitalState, RoomState};
use crate::scenario::ScenarioId;

/// Per-scenario progress, keyed by scenario id in the save document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneData {
    /// Room scenario progress.
    #[serde(rename = "scenario1", default, skip_serializing_if = "Option::is_none")]
    pub room: Option<RoomState>,
    /// Hospital scenario progress.
    #[serde(rename = "scenario2", default, skip_serializing_if = "Option::is_none")]
    pub hospital: Option<HospitalState>,
    /// Forest scenario progress.
    #[serde(rename = "scenario3", default, skip_serializing_if = "Option::is_none")]
    pub forest: Option<ForestState>,
}

/// Progress of any one scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioState {
    /// Room scenario progress.
    Room(RoomState),
    /// Hospital scenario progress.
    Hospital(HospitalState),
    /// Forest scenario progress.
    Forest(ForestState),
}

impl ScenarioState {
    /// Which scenario this record belongs to.
    pub fn id(&self) -> ScenarioId {
        match self {
            Self::Room(_) => ScenarioId::Room,
            Self::Hospital(_) => ScenarioId::Hospital,
            Self::Forest(_) => ScenarioId::Forest,
        }
    }

    /// Whether the record ended in an escape.
    pub fn escaped(&self) -> bool {
        match self {
            Self::Room(s) => s.escaped,
            Self::Hospital(s) => s.escaped,
            Self::Forest(s) => s.escaped,
        }
    }
}

impl SceneData {
    /// A copy of one scenario's record, if present.
    ///
    /// A hospital record without a generated layout counts as absent.
    pub fn get(&self, id: ScenarioId) -> Option<ScenarioState> {
        match id {
            ScenarioId::Room => self.room.clone().map(ScenarioState::Room),
            ScenarioId::Hospital => self
                .hospital
                .clone()
                .filter(HospitalState::is_generated)
                .map(ScenarioState::Hospital),
            ScenarioId::Forest => self.forest.clone().map(ScenarioState::Forest),
        }
    }

    /// Whether a usable record exists for the scenario.
    pub fn contains(&self, id: ScenarioId) -> bool {
        match id {
            ScenarioId::Room => self.room.is_some(),
            ScenarioId::Hospital => self.hospital.as_ref().is_some_and(HospitalState::is_generated),
            ScenarioId::Forest => self.forest.is_some(),
        }
    }

    /// Store a record, replacing any previous one for the same scenario.
    pub fn put(&mut self, state: ScenarioState) {
        match state {
            ScenarioState::Room(s) => self.room = Some(s),
            ScenarioState::Hospital(s) => self.hospital = Some(s),
            ScenarioState::Forest(s) => self.forest = Some(s),
        }
    }

    /// Drop a scenario's record.
    pub fn remove(&mut self, id: ScenarioId) {
        match id {
            ScenarioId::Room => self.room = None,
            ScenarioId::Hospital => self.hospital = None,
            ScenarioId::Forest => self.forest = None,
        }
    }

    /// Whether no scenario has a record.
    pub fn is_empty(&self) -> bool {
        self.room.is_none() && self.hospital.is_none() && self.forest.is_none()
    }
}

/// Everything persisted between runs.
///
/// While `current_scenario` is set, `scene_data` holds a record for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// The player's name or nickname.
    #[serde(default)]
    pub player_name: Option<String>,
    /// The scenario being played, if any.
    #[serde(default, alias = "current_scene")]
    pub current_scenario: Option<ScenarioId>,
    /// Progress per scenario.
    #[serde(default)]
    pub scene_data: SceneData,
}

impl SessionState {
    /// A fresh document holding only the player's name.
    pub fn for_player(name: impl Into<String>) -> Self {
        Self {
            player_name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Whether a player has registered.
    pub fn has_player(&self) -> bool {
        self.player_name.as_deref().is_some_and(|n| !n.is_empty())
    }

    /// The active scenario, only when its record is present.
    pub fn in_progress(&self) -> Option<ScenarioId> {
        self.current_scenario
            .filter(|id| self.scene_data.contains(*id))
    }

    /// Close a scenario: forget its record and, if active, deactivate it.
    pub fn clear_scenario(&mut self, id: ScenarioId) {
        self.scene_data.remove(id);
        if self.current_scenario == Some(id) {
            self.current_scenario = None;
        }
    }
}
