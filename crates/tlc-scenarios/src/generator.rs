//! World generation.
//!
//! Only the hospital is laid out ahead of time. The forest rolls its
//! encounters as the player walks, and the room is always the same.

use std::collections::BTreeMap;

use tlc_core::state::ScenarioState;
use tlc_core::state::hospital::{FLOOR_COUNT, ROOMS_PER_FLOOR};
use tlc_core::{Dice, ForestState, HospitalRoom, HospitalState, RoomState, ScenarioId};
use tracing::debug;

/// Chance that a hospital room holds a tool.
pub const TOOL_CHANCE: f64 = 0.25;

/// Chance that a room on `floor` is occupied. Rises 2% per floor.
pub fn occupancy_chance(floor: u8) -> f64 {
    0.18 + 0.02 * f64::from(floor)
}

/// Lay out all twelve floors of the hospital.
///
/// For each floor from the bottom up and each room in order, occupancy is
/// drawn first and the tool second.
pub fn generate_hospital(dice: &mut dyn Dice) -> HospitalState {
    let mut floors = BTreeMap::new();
    for floor in 1..=FLOOR_COUNT {
        let mut rooms = BTreeMap::new();
        for n in 1..=ROOMS_PER_FLOOR {
            let occupied = dice.chance(occupancy_chance(floor));
            let has_tool = dice.chance(TOOL_CHANCE);
            rooms.insert(HospitalState::room_id(n), HospitalRoom { occupied, has_tool });
        }
        floors.insert(floor, rooms);
    }

    let occupied = floors
        .values()
        .flat_map(|rooms| rooms.values())
        .filter(|r| r.occupied)
        .count();
    debug!(occupied, "hospital generated");

    HospitalState {
        floors,
        ..HospitalState::default()
    }
}

/// The starting record for a scenario.
pub fn fresh_state(id: ScenarioId, dice: &mut dyn Dice) -> ScenarioState {
    match id {
        ScenarioId::Room => ScenarioState::Room(RoomState::default()),
        ScenarioId::Hospital => ScenarioState::Hospital(generate_hospital(dice)),
        ScenarioId::Forest => ScenarioState::Forest(ForestState::default()),
    }
}
