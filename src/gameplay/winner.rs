use crate::Years;
use serde::Deserialize;
use serde::Serialize;
use std::cmp::Ordering;

/// Result of comparing final jail years. Fewer years wins.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    #[serde(rename = "Player 1")]
    P1,
    #[serde(rename = "Player 2")]
    P2,
    #[serde(rename = "It's a tie!")]
    Tie,
}

impl Winner {
    pub fn is_tie(&self) -> bool {
        matches!(self, Self::Tie)
    }
}

impl From<(Years, Years)> for Winner {
    fn from((p1, p2): (Years, Years)) -> Self {
        match p1.cmp(&p2) {
            Ordering::Less => Self::P1,
            Ordering::Greater => Self::P2,
            Ordering::Equal => Self::Tie,
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::P1 => write!(f, "Player 1"),
            Self::P2 => write!(f, "Player 2"),
            Self::Tie => write!(f, "It's a tie!"),
        }
    }
}
