use super::ScoreEntry;
use crate::Millis;

/// Durable home of the score history.
///
/// The history is read and written as a whole ordered sequence, so the
/// last successful [`Store::save_all`] wins. Stores make no transactional
/// promises beyond that.
pub trait Store {
    /// Read the full history, oldest first. An empty store yields an empty history.
    fn load(&self) -> anyhow::Result<Vec<ScoreEntry>>;
    /// Replace the full history.
    fn save_all(&mut self, entries: &[ScoreEntry]) -> anyhow::Result<()>;
    /// Drop every entry recorded at `timestamp`.
    fn delete(&mut self, timestamp: Millis) -> anyhow::Result<()> {
        let entries = self
            .load()?
            .into_iter()
            .filter(|e| e.timestamp() != timestamp)
            .collect::<Vec<ScoreEntry>>();
        self.save_all(&entries)
    }
}
