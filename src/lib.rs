//! Round engine and score history for a two-player Prisoner's Dilemma.
//!
//! A [`gameplay::Session`] is a pure value advanced one round at a time.
//! The [`gameplay::Engine`] pairs a session with an [`players::Opponent`]
//! and a [`history::Store`], snapshotting finished games into a score history.
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod gameplay;
pub mod history;
pub mod players;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Jail years accumulated by a player. Fewer is better.
pub type Years = u32;
/// Milliseconds since the unix epoch.
pub type Millis = i64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Rounds in a game before the session turns terminal.
pub const ROUNDS: u8 = 4;
/// Both cooperate.
pub const REWARD: Years = 2;
/// Betray a cooperator.
pub const TEMPTATION: Years = 0;
/// Cooperate with a betrayer.
pub const SUCKER: Years = 5;
/// Both betray.
pub const PUNISHMENT: Years = 3;

// ============================================================================
// SCORE HISTORY
// ============================================================================
/// Fixed identifier the score history is stored under.
pub const HISTORY_KEY: &str = "gameScores";
/// Default directory for the on-disk score history, relative to the working directory.
pub const HISTORY_DIR: &str = ".dilemma";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Wall clock in epoch milliseconds.
pub fn now() -> Millis {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as Millis)
        .unwrap_or_default()
}

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", now() / 1000)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}
