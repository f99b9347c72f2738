//! Configuration for a game session.

use std::path::PathBuf;
use std::time::Duration;

/// Default save file name, resolved against the working directory.
pub const DEFAULT_SAVE_FILE: &str = "savegame.json";

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Where the session document is persisted.
    pub save_path: PathBuf,
    /// RNG seed for reproducible worlds and encounters. `None` draws from the OS.
    pub seed: Option<u64>,
    /// How long the victory screen stays up before returning to the start.
    pub victory_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from(DEFAULT_SAVE_FILE),
            seed: None,
            victory_delay: Duration::from_secs(5),
        }
    }
}

impl GameConfig {
    /// Set the save file path.
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the victory auto-return delay.
    pub fn with_victory_delay(mut self, delay: Duration) -> Self {
        self.victory_delay = delay;
        self
    }
}
