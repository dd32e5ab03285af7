use serde::Deserialize;
use serde::Serialize;

/// Which side of the payoff table a participant occupies.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seat {
    P1,
    #[default]
    P2,
}

impl Seat {
    pub fn other(&self) -> Self {
        match self {
            Self::P1 => Self::P2,
            Self::P2 => Self::P1,
        }
    }
    /// Orders a (mine, theirs) pair into (P1, P2).
    pub fn arrange<T>(&self, mine: T, theirs: T) -> (T, T) {
        match self {
            Self::P1 => (mine, theirs),
            Self::P2 => (theirs, mine),
        }
    }
}

impl TryFrom<&str> for Seat {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "1" | "P1" => Ok(Self::P1),
            "2" | "P2" => Ok(Self::P2),
            other => Err(anyhow::anyhow!("invalid seat: {:?}", other)),
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::P1 => write!(f, "Player 1"),
            Self::P2 => write!(f, "Player 2"),
        }
    }
}
