use super::*;
use crate::config::Config;
use anyhow::Context;
use std::path::PathBuf;

/// History kept as a JSON array in `<home>/<key>.json`.
///
/// Writes land in a sibling temp file that is then renamed over the
/// target, so readers see either the old history or the new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Json {
    home: PathBuf,
    key: String,
}

impl Json {
    pub fn new(home: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            key: key.into(),
        }
    }
    /// path to file on disk
    pub fn path(&self) -> PathBuf {
        self.home.join(format!("{}.json", self.key))
    }
    /// check if file exists on disk
    pub fn done(&self) -> bool {
        std::fs::metadata(self.path()).is_ok()
    }
    fn scratch(&self) -> PathBuf {
        self.home.join(format!(".{}.json.tmp", self.key))
    }
}

impl From<&Config> for Json {
    fn from(config: &Config) -> Self {
        Self::new(config.home.clone(), config.key.clone())
    }
}

impl Store for Json {
    fn load(&self) -> anyhow::Result<Vec<ScoreEntry>> {
        let ref path = self.path();
        match std::fs::read(path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e).with_context(|| format!("read {}", path.display())),
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Vec::new()),
            Ok(bytes) => serde_json::from_slice(&bytes)
                .with_context(|| format!("decode score history {}", path.display())),
        }
    }

    fn save_all(&mut self, entries: &[ScoreEntry]) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.home)
            .with_context(|| format!("create {}", self.home.display()))?;
        let ref path = self.path();
        let ref scratch = self.scratch();
        let bytes = serde_json::to_vec_pretty(entries).context("encode score history")?;
        std::fs::write(scratch, bytes).with_context(|| format!("write {}", scratch.display()))?;
        std::fs::rename(scratch, path).with_context(|| format!("replace {}", path.display()))?;
        log::debug!("saved {} entries to {}", entries.len(), path.display());
        Ok(())
    }
}
