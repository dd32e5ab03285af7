use super::Opponent;
use crate::gameplay::*;

/// Replays a fixed sequence of moves, starting over when it runs out.
/// The move for round `i` is `script[i % len]`, so the script follows
/// the session rather than the number of times it was asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scripted(Vec<Choice>);

impl Scripted {
    pub fn new(script: Vec<Choice>) -> anyhow::Result<Self> {
        match script.is_empty() {
            true => Err(anyhow::anyhow!("script must contain at least one choice")),
            false => Ok(Self(script)),
        }
    }
}

impl Opponent for Scripted {
    fn decide(&mut self, session: &Session, _: Seat) -> Choice {
        self.0[session.round() % self.0.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Choice::*;

    #[test]
    fn follows_round_and_cycles() {
        let mut script = Scripted::new(vec![Cooperate, Betray, Betray]).unwrap();
        let mut session = Session::new(8);
        let mut moves = Vec::new();
        while !session.terminal() {
            let next = script.decide(&session, Seat::P1);
            moves.push(next);
            session = session.record(next, Cooperate);
        }
        assert_eq!(
            moves,
            vec![Cooperate, Betray, Betray, Cooperate, Betray, Betray, Cooperate, Betray]
        );
    }

    #[test]
    fn empty_script_rejected() {
        assert!(Scripted::new(vec![]).is_err());
    }
}
