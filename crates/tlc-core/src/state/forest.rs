//! Progress record for the forest scenario.

use serde::{Deserialize, Serialize};

/// How far the player has walked and what they carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForestState {
    /// Steps taken along the trail.
    pub pos: u32,
    /// The flashlight has been picked up.
    pub has_light: bool,
    /// Unopened water bottles.
    pub water_bottles: u32,
    /// A rope has been found.
    pub rope: bool,
    /// The player reached the cabin.
    pub escaped: bool,
}
