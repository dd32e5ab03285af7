use super::Opponent;
use crate::gameplay::*;

/// Tit-for-tat. Opens with cooperation, then repeats whatever the
/// other seat did last round.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Mirror;

impl Opponent for Mirror {
    fn decide(&mut self, session: &Session, seat: Seat) -> Choice {
        session
            .choices(seat.other())
            .last()
            .copied()
            .unwrap_or(Choice::Cooperate)
    }
}
