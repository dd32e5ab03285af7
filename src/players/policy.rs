use super::*;
use crate::gameplay::Choice;

/// Configurable description of an opponent.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Policy {
    #[default]
    Random,
    Fixed(Choice),
    Mirror,
    Scripted(Vec<Choice>),
}

impl Policy {
    /// Build the opponent this policy describes.
    /// The seed only matters to random opponents.
    pub fn opponent(&self, seed: Option<u64>) -> anyhow::Result<Box<dyn Opponent>> {
        let opponent: Box<dyn Opponent> = match self {
            Self::Random => match seed {
                Some(seed) => Box::new(Random::seeded(seed)),
                None => Box::new(Random::default()),
            },
            Self::Fixed(choice) => Box::new(Fixed(*choice)),
            Self::Mirror => Box::new(Mirror),
            Self::Scripted(script) => Box::new(Scripted::new(script.clone())?),
        };
        Ok(opponent)
    }
}

impl TryFrom<&str> for Policy {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "random" => Ok(Self::Random),
            "mirror" | "tft" | "tit-for-tat" => Ok(Self::Mirror),
            script if script.contains(',') => script
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(Choice::try_from)
                .collect::<anyhow::Result<Vec<Choice>>>()
                .and_then(|script| match script.is_empty() {
                    true => Err(anyhow::anyhow!("empty opponent script")),
                    false => Ok(Self::Scripted(script)),
                }),
            choice => Choice::try_from(choice)
                .map(Self::Fixed)
                .map_err(|_| anyhow::anyhow!("invalid opponent: {:?}", choice)),
        }
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Random => write!(f, "random"),
            Self::Fixed(choice) => write!(f, "{}", choice),
            Self::Mirror => write!(f, "mirror"),
            Self::Scripted(script) => write!(
                f,
                "{}",
                script
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<String>>()
                    .join(",")
            ),
        }
    }
}
