use crate::Arbitrary;
use serde::Deserialize;
use serde::Serialize;

/// A player's decision for one round.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Cooperate,
    /// Also known as defecting. "default" is accepted as a synonym when parsing.
    #[serde(alias = "defect", alias = "default")]
    Betray,
}

impl Choice {
    pub const ALL: [Self; 2] = [Self::Cooperate, Self::Betray];

    pub fn is_cooperate(&self) -> bool {
        matches!(self, Self::Cooperate)
    }
}

impl Arbitrary for Choice {
    fn random() -> Self {
        match rand::random::<bool>() {
            true => Self::Cooperate,
            false => Self::Betray,
        }
    }
}

impl TryFrom<&str> for Choice {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "c" | "cooperate" => Ok(Self::Cooperate),
            "b" | "d" | "betray" | "defect" | "default" => Ok(Self::Betray),
            other => Err(anyhow::anyhow!("invalid choice: {:?}", other)),
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cooperate => write!(f, "cooperate"),
            Self::Betray => write!(f, "betray"),
        }
    }
}
