use super::Opponent;
use crate::gameplay::*;

/// Plays the same move every round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixed(pub Choice);

impl Opponent for Fixed {
    fn decide(&mut self, _: &Session, _: Seat) -> Choice {
        self.0
    }
}
