//! Runtime configuration.
//!
//! Defaults come from the crate constants, environment variables
//! override them, and the command line overrides the environment.
use crate::HISTORY_DIR;
use crate::HISTORY_KEY;
use crate::ROUNDS;
use crate::gameplay::Seat;
use crate::players::Policy;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Rounds before the game ends.
    pub rounds: u8,
    /// Seat taken by the human player. The opponent takes the other one.
    pub seat: Seat,
    /// How the opponent chooses.
    pub policy: Policy,
    /// Seed for random opponents. Entropy-seeded when absent.
    pub seed: Option<u64>,
    /// Directory holding the score history.
    pub home: PathBuf,
    /// Identifier the score history is stored under.
    pub key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rounds: ROUNDS,
            seat: Seat::default(),
            policy: Policy::default(),
            seed: None,
            home: PathBuf::from(HISTORY_DIR),
            key: String::from(HISTORY_KEY),
        }
    }
}

impl Config {
    /// Defaults overridden by DILEMMA_* environment variables.
    pub fn from_env() -> Self {
        Self::default().with_vars(|name| std::env::var(name).ok())
    }

    /// Apply overrides from any variable lookup. Unparseable values are
    /// logged and skipped so a typo never prevents a game from starting.
    pub fn with_vars<F>(mut self, var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(rounds) = var("DILEMMA_ROUNDS") {
            match rounds.trim().parse::<u8>() {
                Ok(n) if n > 0 => self.rounds = n,
                _ => log::warn!("ignoring DILEMMA_ROUNDS={:?}", rounds),
            }
        }
        if let Some(seat) = var("DILEMMA_SEAT") {
            match Seat::try_from(seat.as_str()) {
                Ok(seat) => self.seat = seat,
                Err(e) => log::warn!("ignoring DILEMMA_SEAT: {}", e),
            }
        }
        if let Some(policy) = var("DILEMMA_OPPONENT") {
            match Policy::try_from(policy.as_str()) {
                Ok(policy) => self.policy = policy,
                Err(e) => log::warn!("ignoring DILEMMA_OPPONENT: {}", e),
            }
        }
        if let Some(seed) = var("DILEMMA_SEED") {
            match seed.trim().parse::<u64>() {
                Ok(seed) => self.seed = Some(seed),
                Err(_) => log::warn!("ignoring DILEMMA_SEED={:?}", seed),
            }
        }
        if let Some(home) = var("DILEMMA_HOME").filter(|h| !h.trim().is_empty()) {
            self.home = PathBuf::from(home);
        }
        self
    }
}
