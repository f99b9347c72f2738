//! Injectable randomness.
//!
//! Every probabilistic decision in the game (room occupancy, elevator
//! outages, animal encounters) goes through the [`Dice`] trait so that tests
//! can script exact outcomes with [`ScriptedDice`] while play uses
//! [`SeededDice`].

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of random draws.
pub trait Dice {
    /// A uniform draw in `[0, 1)`.
    fn roll(&mut self) -> f64;

    /// A uniform integer in `[0, n)`. `n` must be non-zero.
    fn below(&mut self, n: u32) -> u32;

    /// `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.roll() < p
    }
}

/// Dice backed by a standard RNG.
#[derive(Debug, Clone)]
pub struct SeededDice {
    rng: StdRng,
}

impl SeededDice {
    /// Deterministic dice for a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Dice seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded when a seed is given, otherwise from entropy.
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::from_seed)
    }
}

impl Dice for SeededDice {
    fn roll(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn below(&mut self, n: u32) -> u32 {
        self.rng.random_range(0..n)
    }
}

/// Dice that replay predetermined draws.
///
/// Rolls and picks are consumed from separate queues. Once a queue is empty,
/// rolls return [`ScriptedDice::EXHAUSTED_ROLL`] (so every `chance` fails)
/// and picks return `0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<f64>,
    picks: VecDeque<u32>,
}

impl ScriptedDice {
    /// Roll value used once the scripted rolls run out.
    pub const EXHAUSTED_ROLL: f64 = 0.999_999;

    /// Dice with the given rolls and no scripted picks.
    pub fn new(rolls: impl IntoIterator<Item = f64>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            picks: VecDeque::new(),
        }
    }

    /// Add scripted picks for [`Dice::below`].
    pub fn with_picks(mut self, picks: impl IntoIterator<Item = u32>) -> Self {
        self.picks.extend(picks);
        self
    }

    /// Append a roll.
    pub fn push_roll(&mut self, roll: f64) {
        self.rolls.push_back(roll);
    }

    /// Number of scripted rolls not yet consumed.
    pub fn remaining_rolls(&self) -> usize {
        self.rolls.len()
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self) -> f64 {
        self.rolls.pop_front().unwrap_or(Self::EXHAUSTED_ROLL)
    }

    fn below(&mut self, n: u32) -> u32 {
        self.picks.pop_front().unwrap_or(0) % n.max(1)
    }
}
