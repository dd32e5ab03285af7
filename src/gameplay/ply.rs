use super::*;
use crate::history::ScoreEntry;

/// What happened in one played round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ply {
    round: usize,
    p1: Choice,
    p2: Choice,
    entry: Option<ScoreEntry>,
}

impl Ply {
    pub fn new(round: usize, p1: Choice, p2: Choice, entry: Option<ScoreEntry>) -> Self {
        Self {
            round,
            p1,
            p2,
            entry,
        }
    }
    /// One-based index of the round just played.
    pub fn round(&self) -> usize {
        self.round
    }
    pub fn p1(&self) -> Choice {
        self.p1
    }
    pub fn p2(&self) -> Choice {
        self.p2
    }
    pub fn choice(&self, seat: Seat) -> Choice {
        match seat {
            Seat::P1 => self.p1,
            Seat::P2 => self.p2,
        }
    }
    pub fn sentence(&self) -> Sentence {
        Sentence::from((self.p1, self.p2))
    }
    /// The history record created when this round ended the game.
    pub fn entry(&self) -> Option<&ScoreEntry> {
        self.entry.as_ref()
    }
    pub fn is_final(&self) -> bool {
        self.entry.is_some()
    }
}

impl std::fmt::Display for Ply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "round {} P1 {} P2 {} ({})",
            self.round,
            self.p1,
            self.p2,
            self.sentence()
        )
    }
}
