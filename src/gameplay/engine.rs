use super::*;
use crate::Millis;
use crate::config::Config;
use crate::history::ScoreEntry;
use crate::history::Store;
use crate::players::Opponent;

/// Drives one game at a time against an opponent and keeps the score history.
///
/// The in-memory session and history always move forward. Every change to
/// the history is mirrored to the store right away; when that fails the
/// error goes back to the caller, the history stays marked unsaved, and
/// [`Engine::flush`] retries. The session is never rolled back.
pub struct Engine<S: Store> {
    seat: Seat,
    session: Session,
    opponent: Box<dyn Opponent>,
    store: S,
    history: Vec<ScoreEntry>,
    unsaved: bool,
    clock: fn() -> Millis,
}

impl<S: Store> Engine<S> {
    /// Start a fresh session and load the existing history from the store.
    /// A game needs at least one round.
    pub fn new(config: &Config, store: S) -> anyhow::Result<Self> {
        if config.rounds == 0 {
            return Err(anyhow::anyhow!("a game needs at least one round"));
        }
        let opponent = config.policy.opponent(config.seed)?;
        let history = store.load()?;
        log::debug!("loaded {} past games", history.len());
        Ok(Self {
            seat: config.seat,
            session: Session::new(config.rounds),
            opponent,
            store,
            history,
            unsaved: false,
            clock: crate::now,
        })
    }
    /// Replace the configured opponent.
    pub fn with_opponent<O>(mut self, opponent: O) -> Self
    where
        O: Opponent + 'static,
    {
        self.opponent = Box::new(opponent);
        self
    }
    /// Replace the wall clock used to timestamp history entries.
    pub fn with_clock(mut self, clock: fn() -> Millis) -> Self {
        self.clock = clock;
        self
    }

    /// Play the human's choice for the current round.
    ///
    /// Returns `Ok(None)` without touching anything once the game is over.
    /// When this round ends the game, the finished game is appended to the
    /// history and persisted; a persistence error is returned after the
    /// round has been applied, and [`Session::last`] still reports it.
    pub fn play(&mut self, choice: Choice) -> anyhow::Result<Option<Ply>> {
        if self.session.terminal() {
            log::debug!("game over, ignoring {}", choice);
            return Ok(None);
        }
        let theirs = self.opponent.decide(&self.session, self.seat.other());
        let (p1, p2) = self.seat.arrange(choice, theirs);
        self.session = self.session.record(p1, p2);
        let entry = self
            .session
            .terminal()
            .then(|| self.session.entry((self.clock)()));
        let ply = Ply::new(self.session.round(), p1, p2, entry.clone());
        log::debug!("{}", ply);
        if let Some(entry) = entry {
            log::info!("game over: {} ({})", self.session.winner(), self.session.score());
            self.history.push(entry);
            self.persist()?;
        }
        Ok(Some(ply))
    }

    /// Compare current totals. Fewer jail years wins.
    pub fn winner(&self) -> Winner {
        self.session.winner()
    }

    /// Snapshot the current game into the history and start over.
    /// Always appends exactly one entry, whether or not the game had finished.
    pub fn reset(&mut self) -> anyhow::Result<ScoreEntry> {
        let entry = self.session.entry((self.clock)());
        log::info!("reset after {} rounds", self.session.round());
        self.history.push(entry.clone());
        self.session = self.session.reset();
        self.persist()?;
        Ok(entry)
    }

    /// Start the next game. A finished game is already in the history,
    /// so only an unfinished one is snapshotted through [`Engine::reset`].
    pub fn rematch(&mut self) -> anyhow::Result<Option<ScoreEntry>> {
        match self.session.terminal() {
            true => {
                self.session = self.session.reset();
                Ok(None)
            }
            false => self.reset().map(Some),
        }
    }

    /// Remove every history entry recorded at `timestamp`.
    /// Returns how many were removed.
    pub fn delete(&mut self, timestamp: Millis) -> anyhow::Result<usize> {
        let before = self.history.len();
        self.history.retain(|e| e.timestamp() != timestamp);
        let removed = before - self.history.len();
        if removed > 0 {
            log::info!("deleted {} entries at {}", removed, timestamp);
            self.persist()?;
        }
        Ok(removed)
    }

    /// Retry persisting a history that failed to save.
    pub fn flush(&mut self) -> anyhow::Result<()> {
        match self.unsaved {
            true => self.persist(),
            false => Ok(()),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
    pub fn seat(&self) -> Seat {
        self.seat
    }
    pub fn history(&self) -> &[ScoreEntry] {
        &self.history
    }
    pub fn unsaved(&self) -> bool {
        self.unsaved
    }
    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self) -> anyhow::Result<()> {
        match self.store.save_all(&self.history) {
            Ok(()) => {
                self.unsaved = false;
                Ok(())
            }
            Err(e) => {
                log::warn!("score history not saved: {:#}", e);
                self.unsaved = true;
                Err(e.context("persist score history"))
            }
        }
    }
}
