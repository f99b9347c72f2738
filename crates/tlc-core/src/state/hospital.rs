//! Progress record for the hospital scenario.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Number of floors in the hospital.
pub const FLOOR_COUNT: u8 = 12;
/// Rooms on every floor, named `R1` to `R4`.
pub const ROOMS_PER_FLOOR: u8 = 4;
/// Floor the player wakes up on.
pub const START_FLOOR: u8 = 3;

/// A single patient room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HospitalRoom {
    /// Someone is inside; walking in ends the scenario.
    pub occupied: bool,
    /// A tool is lying around, not yet collected.
    pub has_tool: bool,
}

/// The hospital layout and where the player stands in it.
///
/// The layout is generated once on first entry. Afterwards only `has_tool`
/// changes, and only from `true` to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HospitalState {
    /// Current floor, `1..=FLOOR_COUNT`.
    pub floor: u8,
    /// Rooms per floor, keyed by floor number then room id (`R1`..).
    pub floors: BTreeMap<u8, BTreeMap<String, HospitalRoom>>,
    /// A tool has been collected from some room.
    pub has_key: bool,
    /// The player left through the emergency exit.
    pub escaped: bool,
}

impl Default for HospitalState {
    fn default() -> Self {
        Self {
            floor: START_FLOOR,
            floors: BTreeMap::new(),
            has_key: false,
            escaped: false,
        }
    }
}

impl HospitalState {
    /// Room id for a 1-based room number.
    pub fn room_id(n: u8) -> String {
        format!("R{n}")
    }

    /// Whether the layout has been generated.
    pub fn is_generated(&self) -> bool {
        !self.floors.is_empty()
    }

    /// Look up a room on a floor.
    pub fn room(&self, floor: u8, id: &str) -> Option<&HospitalRoom> {
        self.floors.get(&floor).and_then(|rooms| rooms.get(id))
    }

    /// Mutable access to a room on a floor.
    pub fn room_mut(&mut self, floor: u8, id: &str) -> Option<&mut HospitalRoom> {
        self.floors.get_mut(&floor).and_then(|rooms| rooms.get_mut(id))
    }

    /// Rooms on the current floor, in id order.
    pub fn current_rooms(&self) -> impl Iterator<Item = (&str, &HospitalRoom)> {
        self.floors
            .get(&self.floor)
            .into_iter()
            .flat_map(|rooms| rooms.iter().map(|(id, room)| (id.as_str(), room)))
    }
}
