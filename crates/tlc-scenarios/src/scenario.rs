//! The interface shared by the three scenarios.

use tlc_core::state::ScenarioState;
use tlc_core::{Dice, ScenarioId};
use tracing::debug_span;

use crate::forest::Forest;
use crate::hospital::Hospital;
use crate::room::Room;
use crate::rules::{Rule, dispatch};
use crate::turn::Turn;

/// A playable scenario: its record type, command table, and texts.
pub trait Scenario {
    /// The progress record this scenario reads and updates.
    type State: Clone + 'static;

    /// Which scenario this is.
    const ID: ScenarioId;

    /// Reply for commands no rule recognises.
    const FALLBACK: &'static str;

    /// The command table, in priority order.
    fn rules() -> &'static [Rule<Self::State>];

    /// Text shown when the scenario is entered or resumed.
    fn intro(state: &Self::State) -> String;

    /// Interpret one line of player input.
    fn handle(input: &str, state: Self::State, dice: &mut dyn Dice) -> Turn<Self::State> {
        let _span = debug_span!("command", scenario = %Self::ID).entered();
        dispatch(Self::rules(), Self::FALLBACK, input, state, dice)
    }
}

/// Interpret a command against whichever scenario the record belongs to.
pub fn play(input: &str, state: ScenarioState, dice: &mut dyn Dice) -> Turn<ScenarioState> {
    match state {
        ScenarioState::Room(s) => Room::handle(input, s, dice).map(ScenarioState::Room),
        ScenarioState::Hospital(s) => {
            Hospital::handle(input, s, dice).map(ScenarioState::Hospital)
        }
        ScenarioState::Forest(s) => Forest::handle(input, s, dice).map(ScenarioState::Forest),
    }
}

/// Intro text for whichever scenario the record belongs to.
pub fn intro(state: &ScenarioState) -> String {
    match state {
        ScenarioState::Room(s) => Room::intro(s),
        ScenarioState::Hospital(s) => Hospital::intro(s),
        ScenarioState::Forest(s) => Forest::intro(s),
    }
}
