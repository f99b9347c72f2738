//! Sound cues.
//!
//! The game never depends on audio: implementations must swallow their own
//! failures, and [`Silent`] is always a valid choice.

use tlc_core::ScenarioId;

/// A sound the game asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Rain and thunder behind the room scenario.
    Rain,
    /// Bells on the victory screen.
    Bells,
}

/// Plays sound cues.
pub trait Soundboard {
    /// Start a cue, optionally looping until stopped.
    fn play(&mut self, cue: Cue, looped: bool);

    /// Stop everything that is playing.
    fn stop_all(&mut self);
}

/// A soundboard that plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Soundboard for Silent {
    fn play(&mut self, _: Cue, _: bool) {}

    fn stop_all(&mut self) {}
}

/// Ambient loop for a scenario, if it has one.
pub fn ambient(id: ScenarioId) -> Option<Cue> {
    match id {
        ScenarioId::Room => Some(Cue::Rain),
        ScenarioId::Hospital | ScenarioId::Forest => None,
    }
}
