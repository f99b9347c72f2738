//! Core types for The Last Code.
//!
//! Holds the persisted session document and the per-scenario progress
//! records, the JSON save store that reads and writes them, the injectable
//! dice used by world generation and encounters, and game configuration.

pub mod config;
pub mod dice;
pub mod error;
pub mod scenario;
pub mod state;
pub mod store;

pub use config::GameConfig;
pub use dice::{Dice, ScriptedDice, SeededDice};
pub use error::{CoreError, CoreResult};
pub use scenario::ScenarioId;
pub use state::{
    ForestState, HospitalRoom, HospitalState, RoomState, SceneData, SessionState,
};
pub use store::SaveStore;
