use crate::Millis;
use crate::Years;
use crate::gameplay::Winner;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

/// One game in the score history.
/// Created when a game ends or is reset, never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    #[serde(rename = "totalJailYearsPlayer1")]
    p1: Years,
    #[serde(rename = "totalJailYearsPlayer2")]
    p2: Years,
    /// Unrecognised winner text reads as no winner.
    #[serde(default, deserialize_with = "lenient")]
    winner: Option<Winner>,
    /// Older records were written without one.
    #[serde(default)]
    timestamp: Millis,
}

impl ScoreEntry {
    pub fn new(p1: Years, p2: Years, winner: Option<Winner>, timestamp: Millis) -> Self {
        Self {
            p1,
            p2,
            winner,
            timestamp,
        }
    }
    pub fn p1(&self) -> Years {
        self.p1
    }
    pub fn p2(&self) -> Years {
        self.p2
    }
    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }
    pub fn timestamp(&self) -> Millis {
        self.timestamp
    }
    /// Column titles lined up with the [`Display`](std::fmt::Display) rows.
    pub fn header() -> String {
        format!("{:>15} {:>5} {:>5} {}", "timestamp", "P1", "P2", "winner")
    }
}

fn lenient<'de, D>(deserializer: D) -> Result<Option<Winner>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match serde_json::from_value::<Winner>(v.clone()) {
        Ok(winner) => Some(winner),
        Err(_) => {
            log::debug!("unrecognised winner {}", v);
            None
        }
    }))
}

impl std::fmt::Display for ScoreEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:>15} {:>5} {:>5} {}",
            self.timestamp,
            self.p1,
            self.p2,
            self.winner
                .map(|w| w.to_string())
                .unwrap_or_else(|| String::from("-"))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format() {
        let entry = ScoreEntry::new(5, 10, Some(Winner::P1), 1_700_000_000_000);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "totalJailYearsPlayer1": 5,
                "totalJailYearsPlayer2": 10,
                "winner": "Player 1",
                "timestamp": 1_700_000_000_000i64,
            })
        );
    }

    #[test]
    fn reads_records_without_timestamp_or_winner() {
        let json = r#"{"totalJailYearsPlayer1":8,"totalJailYearsPlayer2":8,"winner":null}"#;
        let entry = serde_json::from_str::<ScoreEntry>(json).unwrap();
        assert_eq!(entry, ScoreEntry::new(8, 8, None, 0));
    }

    #[test]
    fn unknown_winner_reads_as_none() {
        let json = r#"{"totalJailYearsPlayer1":3,"totalJailYearsPlayer2":9,"winner":"Invalid results","timestamp":4}"#;
        let entry = serde_json::from_str::<ScoreEntry>(json).unwrap();
        assert_eq!(entry, ScoreEntry::new(3, 9, None, 4));
        let json = r#"{"totalJailYearsPlayer1":3,"totalJailYearsPlayer2":9,"winner":7}"#;
        assert_eq!(serde_json::from_str::<ScoreEntry>(json).unwrap().winner(), None);
        let json = r#"{"totalJailYearsPlayer1":3,"totalJailYearsPlayer2":9}"#;
        assert_eq!(serde_json::from_str::<ScoreEntry>(json).unwrap().winner(), None);
    }

    #[test]
    fn rows_line_up_with_header() {
        let header = ScoreEntry::header();
        let row = ScoreEntry::new(12, 7, Some(Winner::P2), 1_700_000_000_000).to_string();
        let unfinished = ScoreEntry::new(3, 3, None, 0).to_string();
        assert_eq!(&header[..21], "      timestamp    P1");
        assert_eq!(&row[..21], "  1700000000000    12");
        assert_eq!(&header[21..28], "    P2 ");
        assert_eq!(&row[21..28], "     7 ");
        assert_eq!(&unfinished[28..], "-");
    }

    #[test]
    fn reads_tie() {
        let json = r#"{"totalJailYearsPlayer1":8,"totalJailYearsPlayer2":8,"winner":"It's a tie!","timestamp":1}"#;
        let entry = serde_json::from_str::<ScoreEntry>(json).unwrap();
        assert_eq!(entry.winner(), Some(Winner::Tie));
    }
}
