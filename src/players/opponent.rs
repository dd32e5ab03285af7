use crate::gameplay::*;

/// Anything that can pick the counterpart's move for a round.
///
/// The engine asks once per round, before the round is recorded, passing
/// the session so far and the seat the opponent occupies. Implementations
/// own whatever randomness or memory they need, which keeps the engine
/// itself deterministic under a deterministic opponent.
pub trait Opponent {
    fn decide(&mut self, session: &Session, seat: Seat) -> Choice;
}

/// Externally supplied strategies.
impl<F> Opponent for F
where
    F: FnMut(&Session, Seat) -> Choice,
{
    fn decide(&mut self, session: &Session, seat: Seat) -> Choice {
        self(session, seat)
    }
}
