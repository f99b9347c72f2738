//! The game session controller.
//!
//! `GameSession` owns the save document and the current [`Screen`]. Each
//! public method is one player action; it checks that the action is offered
//! on the current screen, updates and persists state, and returns the
//! [`Event`]s to render.

use tlc_core::state::ScenarioState;
use tlc_core::{Dice, GameConfig, SaveStore, ScenarioId, SeededDice, SessionState};
use tlc_scenarios::{Signal, fresh_state, intro, normalize, play};
use tracing::{info, warn};

use crate::audio::{self, Cue, Silent, Soundboard};
use crate::error::{SessionError, SessionResult};
use crate::event::Event;
use crate::screen::{Outcome, Screen};
use crate::text;

/// An interactive game session.
pub struct GameSession {
    config: GameConfig,
    store: SaveStore,
    state: SessionState,
    screen: Screen,
    dice: Box<dyn Dice>,
    sound: Box<dyn Soundboard>,
}

impl GameSession {
    /// Create a session on the welcome screen.
    ///
    /// Nothing is read from disk until the player chooses to continue.
    pub fn new(config: GameConfig) -> Self {
        Self {
            store: SaveStore::new(&config.save_path),
            state: SessionState::default(),
            screen: Screen::Welcome,
            dice: Box::new(SeededDice::new(config.seed)),
            sound: Box::new(Silent),
            config,
        }
    }

    /// Replace the dice.
    pub fn with_dice(mut self, dice: impl Dice + 'static) -> Self {
        self.dice = Box::new(dice);
        self
    }

    /// Replace the soundboard.
    pub fn with_soundboard(mut self, sound: impl Soundboard + 'static) -> Self {
        self.sound = Box::new(sound);
        self
    }

    /// The current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The in-memory save document.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The registered player, if any.
    pub fn player_name(&self) -> Option<&str> {
        self.state.player_name.as_deref()
    }

    /// Whether "continue" should be offered.
    pub fn can_continue(&self) -> bool {
        self.store.exists()
    }

    /// The record of the scenario being played or just finished.
    pub fn current_record(&self) -> Option<ScenarioState> {
        let id = match self.screen {
            Screen::InScenario(id) => id,
            Screen::Outcome(outcome) => outcome.scenario(),
            _ => return None,
        };
        self.state.scene_data.get(id)
    }

    /// Throw away any save and ask for a name.
    pub fn new_game(&mut self) -> SessionResult<Vec<Event>> {
        self.expect(Screen::Welcome, "start a new game")?;
        if let Err(e) = self.store.delete() {
            warn!("could not remove old save: {e}");
        }
        self.state = SessionState::default();

        let mut events = Vec::new();
        self.ask_name(&mut events);
        Ok(events)
    }

    /// Load the save and pick up where the player left off.
    pub fn continue_game(&mut self) -> SessionResult<Vec<Event>> {
        self.expect(Screen::Welcome, "continue")?;
        if !self.store.exists() {
            return Err(SessionError::NoSave);
        }
        self.state = self.store.load_or_default();

        let mut events = Vec::new();
        if !self.state.has_player() {
            self.ask_name(&mut events);
        } else if let Some(id) = self.state.current_scenario {
            info!(scenario = %id, "resuming");
            self.enter(id, &mut events);
        } else {
            self.show_selection(&mut events);
        }
        Ok(events)
    }

    /// Register the player. Blank names are refused with a warning.
    pub fn submit_name(&mut self, name: &str) -> SessionResult<Vec<Event>> {
        self.expect(Screen::NamePrompt, "enter a name")?;
        let name = name.trim();
        if name.is_empty() {
            return Ok(vec![Event::Warning {
                title: text::NAME_REQUIRED.to_string(),
                message: text::NAME_REQUIRED_DETAIL.to_string(),
            }]);
        }

        self.state = SessionState::for_player(name);
        self.persist();

        let mut events = Vec::new();
        self.show_selection(&mut events);
        Ok(events)
    }

    /// Start or resume a scenario.
    pub fn select_scenario(&mut self, id: ScenarioId) -> SessionResult<Vec<Event>> {
        self.expect(Screen::ScenarioSelect, "choose a scenario")?;
        let mut events = Vec::new();
        self.enter(id, &mut events);
        Ok(events)
    }

    /// Interpret a line of input in the current scenario.
    ///
    /// Blank input is ignored. Anything else is saved before the result is
    /// returned, including the final state of a won or lost scenario.
    pub fn submit_command(&mut self, input: &str) -> SessionResult<Vec<Event>> {
        let Screen::InScenario(id) = self.screen else {
            return Err(self.unavailable("play a command"));
        };
        if normalize(input).is_empty() {
            return Ok(Vec::new());
        }

        let record = self.record_or_fresh(id);
        let turn = play(input, record, self.dice.as_mut());
        self.state.scene_data.put(turn.state);
        self.persist();

        let mut events: Vec<Event> = turn.lines.into_iter().map(Event::Line).collect();
        match turn.signal {
            Signal::Continue => {}
            Signal::Win => {
                info!(scenario = %id, "scenario won");
                self.go(Screen::Outcome(Outcome::Win(id)), &mut events);
                self.sound.play(Cue::Bells, false);
                events.push(Event::Victory {
                    message: text::congratulations(self.player_name().unwrap_or_default()),
                    return_after: self.config.victory_delay,
                });
            }
            Signal::Lose(reason) => {
                info!(scenario = %id, %reason, "scenario lost");
                self.go(Screen::Outcome(Outcome::Lose(id, reason)), &mut events);
                events.push(Event::Defeat { reason });
            }
        }
        Ok(events)
    }

    /// Leave the outcome screen: forget the finished scenario and return
    /// to the welcome screen.
    ///
    /// After a win the presentation calls this once the victory delay has
    /// passed; after a loss, when the player confirms.
    pub fn acknowledge_outcome(&mut self) -> SessionResult<Vec<Event>> {
        let Screen::Outcome(outcome) = self.screen else {
            return Err(self.unavailable("leave the outcome"));
        };
        self.state.clear_scenario(outcome.scenario());
        self.persist();

        let mut events = Vec::new();
        self.go(Screen::Welcome, &mut events);
        Ok(events)
    }

    /// End the session. An outcome still on screen is acknowledged first,
    /// so a lost or won scenario is not offered again on "continue".
    pub fn close(&mut self) {
        let settled = match self.screen {
            Screen::Outcome(_) => self.acknowledge_outcome().map(drop),
            _ => Ok(()),
        };
        if let Err(e) = settled {
            warn!("could not close outcome: {e}");
        }
        self.sound.stop_all();
        info!(screen = %self.screen, "session closed");
    }

    fn enter(&mut self, id: ScenarioId, events: &mut Vec<Event>) {
        self.state.current_scenario = Some(id);
        let record = self.record_or_fresh(id);
        self.state.scene_data.put(record.clone());
        self.persist();

        self.go(Screen::InScenario(id), events);
        if let Some(cue) = audio::ambient(id) {
            self.sound.play(cue, true);
        }
        events.push(Event::Line(intro(&record)));
    }

    /// The saved record, or a newly generated one on first entry.
    fn record_or_fresh(&mut self, id: ScenarioId) -> ScenarioState {
        self.state
            .scene_data
            .get(id)
            .unwrap_or_else(|| fresh_state(id, self.dice.as_mut()))
    }

    fn ask_name(&mut self, events: &mut Vec<Event>) {
        self.go(Screen::NamePrompt, events);
        events.push(Event::Line(text::NAME_PROMPT.to_string()));
    }

    fn show_selection(&mut self, events: &mut Vec<Event>) {
        self.go(Screen::ScenarioSelect, events);
        let header = text::select_header(self.player_name().unwrap_or_default());
        events.push(Event::Line(header));
    }

    fn go(&mut self, screen: Screen, events: &mut Vec<Event>) {
        self.sound.stop_all();
        info!(from = %self.screen, to = %screen, "screen change");
        self.screen = screen;
        events.push(Event::ScreenChanged(screen));
    }

    fn persist(&self) {
        self.store.save_best_effort(&self.state);
    }

    fn expect(&self, screen: Screen, action: &'static str) -> SessionResult<()> {
        if self.screen == screen {
            Ok(())
        } else {
            Err(self.unavailable(action))
        }
    }

    fn unavailable(&self, action: &'static str) -> SessionError {
        SessionError::NotAvailable {
            action,
            screen: self.screen,
        }
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("screen", &self.screen)
            .field("save", &self.store.path())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
