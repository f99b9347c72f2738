//! Persisted game state.
//!
//! [`SessionState`] is the whole save document: who is playing, which
//! scenario is active, and the progress record of each scenario that has
//! been entered. Each scenario owns its own record type.

pub mod forest;
pub mod hospital;
pub mod room;
pub mod session;

pub use forest::ForestState;
pub use hospital::{HospitalRoom, HospitalState};
pub use room::RoomState;
pub use session::{SceneData, ScenarioState, SessionState};
