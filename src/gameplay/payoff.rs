use super::choice::Choice;
use super::seat::Seat;
use crate::PUNISHMENT;
use crate::REWARD;
use crate::SUCKER;
use crate::TEMPTATION;
use crate::Years;

/// Jail years handed to each player for a single round.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Sentence {
    p1: Years,
    p2: Years,
}

impl Sentence {
    pub fn new(p1: Years, p2: Years) -> Self {
        Self { p1, p2 }
    }
    pub fn p1(&self) -> Years {
        self.p1
    }
    pub fn p2(&self) -> Years {
        self.p2
    }
    pub fn years(&self, seat: Seat) -> Years {
        match seat {
            Seat::P1 => self.p1,
            Seat::P2 => self.p2,
        }
    }
    pub fn total(&self) -> Years {
        self.p1 + self.p2
    }
}

/// The classic dilemma matrix.
/// Mutual cooperation costs both a little, a lone betrayer walks free
/// while the other takes the maximum, mutual betrayal costs both more
/// than mutual cooperation would have.
impl From<(Choice, Choice)> for Sentence {
    fn from((p1, p2): (Choice, Choice)) -> Self {
        match (p1, p2) {
            (Choice::Cooperate, Choice::Cooperate) => Self::new(REWARD, REWARD),
            (Choice::Betray, Choice::Cooperate) => Self::new(TEMPTATION, SUCKER),
            (Choice::Cooperate, Choice::Betray) => Self::new(SUCKER, TEMPTATION),
            (Choice::Betray, Choice::Betray) => Self::new(PUNISHMENT, PUNISHMENT),
        }
    }
}

impl std::ops::Add for Sentence {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.p1 + rhs.p1, self.p2 + rhs.p2)
    }
}

impl std::ops::AddAssign for Sentence {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}y / {}y", self.p1, self.p2)
    }
}
