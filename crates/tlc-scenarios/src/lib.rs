//! Command interpreters for The Last Code.
//!
//! Each scenario turns a line of player input into narration, an updated
//! progress record, and a [`Signal`] saying whether play continues, was won,
//! or was lost. Matching is done against an ordered table of keyword
//! [`Rule`]s where the first rule whose keywords appear in the input wins.

pub mod forest;
pub mod generator;
pub mod hospital;
pub mod room;
pub mod rules;
pub mod scenario;
pub mod turn;

pub use forest::Forest;
pub use generator::{fresh_state, generate_hospital};
pub use hospital::Hospital;
pub use room::Room;
pub use rules::{Rule, normalize};
pub use scenario::{Scenario, intro, play};
pub use turn::{LoseReason, Narration, Signal, Turn};
