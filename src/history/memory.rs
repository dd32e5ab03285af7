use super::*;

/// In-process history. Lost when dropped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Memory(Vec<ScoreEntry>);

impl Memory {
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.0
    }
}

impl From<Vec<ScoreEntry>> for Memory {
    fn from(entries: Vec<ScoreEntry>) -> Self {
        Self(entries)
    }
}

impl Store for Memory {
    fn load(&self) -> anyhow::Result<Vec<ScoreEntry>> {
        Ok(self.0.clone())
    }
    fn save_all(&mut self, entries: &[ScoreEntry]) -> anyhow::Result<()> {
        self.0 = entries.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::Winner;

    fn entries() -> Vec<ScoreEntry> {
        vec![
            ScoreEntry::new(8, 13, Some(Winner::P1), 10),
            ScoreEntry::new(3, 3, None, 20),
            ScoreEntry::new(12, 7, Some(Winner::P2), 20),
            ScoreEntry::new(8, 8, Some(Winner::Tie), 30),
        ]
    }

    #[test]
    fn starts_empty() {
        assert!(Memory::default().load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let ref mut store = Memory::default();
        store.save_all(&entries()).unwrap();
        assert_eq!(store.load().unwrap(), entries());
    }

    #[test]
    fn last_write_wins() {
        let ref mut store = Memory::from(entries());
        store.save_all(&entries()[..1]).unwrap();
        assert_eq!(store.load().unwrap(), entries()[..1].to_vec());
    }

    #[test]
    fn delete_drops_matching_timestamps_only() {
        let ref mut store = Memory::from(entries());
        store.delete(20).unwrap();
        let kept = store.load().unwrap();
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|e| e.timestamp() != 20));
        assert_eq!(kept[0].timestamp(), 10);
        assert_eq!(kept[1].timestamp(), 30);
    }

    #[test]
    fn delete_unknown_timestamp_is_harmless() {
        let ref mut store = Memory::from(entries());
        store.delete(99).unwrap();
        assert_eq!(store.load().unwrap(), entries());
    }
}
