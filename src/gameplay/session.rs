use super::*;
use crate::Millis;
use crate::ROUNDS;
use crate::Years;
use crate::history::ScoreEntry;

/// Memoryless state of a game in between rounds.
///
/// Sessions are values. Each round produces a new session through
/// [`Session::record`], which leaves the receiver untouched, so callers
/// can keep, compare, or discard states freely. Both choice sequences
/// always have one entry per played round, and the session turns
/// terminal exactly when the round count reaches its limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    limit: u8,
    p1: Vec<Choice>,
    p2: Vec<Choice>,
    score: Sentence,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ROUNDS)
    }
}

impl Session {
    pub fn new(limit: u8) -> Self {
        Self {
            limit,
            p1: Vec::with_capacity(limit as usize),
            p2: Vec::with_capacity(limit as usize),
            score: Sentence::default(),
        }
    }

    /// Play one round with P1's and P2's choices.
    /// Terminal sessions are returned unchanged.
    pub fn record(&self, p1: Choice, p2: Choice) -> Self {
        let mut next = self.clone();
        if !self.terminal() {
            next.p1.push(p1);
            next.p2.push(p2);
            next.score += Sentence::from((p1, p2));
        }
        next
    }

    /// Same limit, nothing played.
    pub fn reset(&self) -> Self {
        Self::new(self.limit)
    }

    pub fn limit(&self) -> u8 {
        self.limit
    }
    pub fn round(&self) -> usize {
        self.p1.len()
    }
    pub fn terminal(&self) -> bool {
        self.round() >= self.limit as usize
    }
    pub fn p1(&self) -> &[Choice] {
        &self.p1
    }
    pub fn p2(&self) -> &[Choice] {
        &self.p2
    }
    pub fn choices(&self, seat: Seat) -> &[Choice] {
        match seat {
            Seat::P1 => self.p1(),
            Seat::P2 => self.p2(),
        }
    }
    pub fn score(&self) -> Sentence {
        self.score
    }
    /// The most recently played round, if any.
    pub fn last(&self) -> Option<Ply> {
        let p1 = *self.p1.last()?;
        let p2 = *self.p2.last()?;
        Some(Ply::new(self.round(), p1, p2, None))
    }
    pub fn years(&self, seat: Seat) -> Years {
        self.score.years(seat)
    }

    /// Compare current totals. Meaningful at any point, final once terminal.
    pub fn winner(&self) -> Winner {
        Winner::from((self.score.p1(), self.score.p2()))
    }
    /// The winner of a finished game, nothing for a game still in progress.
    pub fn outcome(&self) -> Option<Winner> {
        self.terminal().then(|| self.winner())
    }
    /// Snapshot totals and outcome into a history record.
    pub fn entry(&self, timestamp: Millis) -> ScoreEntry {
        ScoreEntry::new(self.score.p1(), self.score.p2(), self.outcome(), timestamp)
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "round {}/{} {}",
            self.round().min(self.limit as usize),
            self.limit,
            self.score
        )
    }
}
