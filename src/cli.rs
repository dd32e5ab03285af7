//! Terminal front end for the round engine.
use crate::Millis;
use crate::config::Config;
use crate::gameplay::*;
use crate::history::*;
use crate::players::Human;
use crate::players::Policy;
use clap::Parser;
use clap::Subcommand;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Prisoner's Dilemma against the computer", long_about = None)]
pub struct Args {
    /// Directory holding the score history.
    #[arg(long, global = true)]
    home: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Play rounds against the computer", alias = "p")]
    Play {
        /// Rounds per game, at least one.
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..))]
        rounds: Option<u8>,
        /// random, mirror, cooperate, betray, or a script like c,b,b.
        #[arg(long)]
        opponent: Option<String>,
        /// Seed for the random opponent.
        #[arg(long)]
        seed: Option<u64>,
        /// Your seat, 1 or 2.
        #[arg(long)]
        seat: Option<String>,
    },
    #[command(about = "List past games", alias = "ls")]
    Scores,
    #[command(about = "Delete past games by timestamp", alias = "rm")]
    Delete {
        #[arg(required = true)]
        timestamp: Millis,
    },
}

impl Args {
    /// Layer the command line over an existing configuration.
    pub fn configure(&self, mut config: Config) -> anyhow::Result<Config> {
        if let Some(ref home) = self.home {
            config.home = home.clone();
        }
        if let Some(Command::Play {
            rounds,
            opponent,
            seed,
            seat,
        }) = &self.command
        {
            if let Some(rounds) = rounds {
                config.rounds = *rounds;
            }
            if let Some(opponent) = opponent {
                config.policy = Policy::try_from(opponent.as_str())?;
            }
            if let Some(seed) = seed {
                config.seed = Some(*seed);
            }
            if let Some(seat) = seat {
                config.seat = Seat::try_from(seat.as_str())?;
            }
        }
        Ok(config)
    }
}

pub struct CLI;

impl CLI {
    pub fn run() -> anyhow::Result<()> {
        let args = Args::parse();
        let ref config = args.configure(Config::from_env())?;
        match args.command {
            None | Some(Command::Play { .. }) => Self::play(config),
            Some(Command::Scores) => Self::scores(config),
            Some(Command::Delete { timestamp }) => Self::delete(config, timestamp).map(|n| {
                println!("deleted {} games", n);
            }),
        }
    }

    fn play(config: &Config) -> anyhow::Result<()> {
        let mut engine = Engine::new(config, Json::from(config))?;
        log::info!(
            "{} rounds against {} opponent, you are {}",
            config.rounds,
            config.policy,
            config.seat
        );
        loop {
            while !engine.session().terminal() {
                let Some(choice) = Human.decide(engine.session())? else {
                    return engine.flush();
                };
                match engine.play(choice) {
                    Ok(Some(ply)) => println!("{}", Self::ply(&ply, engine.seat())),
                    Ok(None) => {}
                    Err(e) => {
                        if let Some(ply) = engine.session().last() {
                            println!("{}", Self::ply(&ply, engine.seat()));
                        }
                        eprintln!("{:#}", e);
                    }
                }
            }
            println!("{}", Self::result(engine.session()));
            if !Human.again()? {
                return engine.flush();
            }
            if let Err(e) = engine.rematch() {
                eprintln!("{:#}", e);
            }
        }
    }

    fn scores(config: &Config) -> anyhow::Result<()> {
        let history = Json::from(config).load()?;
        match history.is_empty() {
            true => println!("no games yet"),
            false => {
                println!("{}", ScoreEntry::header());
                for entry in history {
                    println!("{}", entry);
                }
            }
        }
        Ok(())
    }

    /// Remove past games recorded at `timestamp`. Returns how many went.
    fn delete(config: &Config, timestamp: Millis) -> anyhow::Result<usize> {
        let mut store = Json::from(config);
        let matches = store
            .load()?
            .iter()
            .filter(|e| e.timestamp() == timestamp)
            .count();
        if matches > 0 {
            store.delete(timestamp)?;
        }
        Ok(matches)
    }

    fn ply(ply: &Ply, seat: Seat) -> String {
        let paint = |choice: Choice| match choice {
            Choice::Cooperate => format!("{:<10}", choice).green(),
            Choice::Betray => format!("{:<10}", choice).red(),
        };
        let sentence = ply.sentence();
        format!(
            "Round {}  you {} them {} +{}y / +{}y",
            ply.round(),
            paint(ply.choice(seat)),
            paint(ply.choice(seat.other())),
            sentence.years(seat),
            sentence.years(seat.other()),
        )
    }

    fn result(session: &Session) -> String {
        format!(
            "\nPlayer 1 Total Jail Years: {}\nPlayer 2 Total Jail Years: {}\nWinner: {}\n",
            session.years(Seat::P1),
            session.years(Seat::P2),
            session.winner().to_string().bold(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> anyhow::Result<Args> {
        Ok(Args::try_parse_from(std::iter::once("dilemma").chain(argv.iter().copied()))?)
    }

    #[test]
    fn no_subcommand_plays_with_defaults() {
        let args = args(&[]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.configure(Config::default()).unwrap(), Config::default());
    }

    #[test]
    fn flags_override_config() {
        let args = args(&[
            "play", "--rounds", "6", "--opponent", "mirror", "--seed", "9", "--seat", "1",
            "--home", "/tmp/elsewhere",
        ])
        .unwrap();
        let env = Config {
            policy: Policy::Fixed(Choice::Betray),
            ..Config::default()
        };
        let config = args.configure(env).unwrap();
        assert_eq!(config.rounds, 6);
        assert_eq!(config.policy, Policy::Mirror);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.seat, Seat::P1);
        assert_eq!(config.home, PathBuf::from("/tmp/elsewhere"));
    }

    #[test]
    fn invalid_flags_are_errors() {
        assert!(args(&["play", "--rounds", "0"]).is_err());
        assert!(args(&["play", "--rounds", "256"]).is_err());
        assert!(args(&["delete"]).is_err());
        let bad_seat = args(&["play", "--seat", "middle"]).unwrap();
        assert!(bad_seat.configure(Config::default()).is_err());
        let bad_opponent = args(&["play", "--opponent", "psychic"]).unwrap();
        assert!(bad_opponent.configure(Config::default()).is_err());
    }

    #[test]
    fn aliases_dispatch() {
        assert!(matches!(args(&["ls"]).unwrap().command, Some(Command::Scores)));
        assert!(matches!(
            args(&["rm", "42"]).unwrap().command,
            Some(Command::Delete { timestamp: 42 })
        ));
        assert!(matches!(
            args(&["p"]).unwrap().command,
            Some(Command::Play { .. })
        ));
    }

    #[test]
    fn delete_counts_removed_games() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            home: dir.path().to_path_buf(),
            ..Config::default()
        };
        let mut store = Json::from(&config);
        store
            .save_all(&[
                ScoreEntry::new(1, 2, Some(Winner::P1), 10),
                ScoreEntry::new(2, 1, Some(Winner::P2), 20),
                ScoreEntry::new(3, 3, None, 10),
            ])
            .unwrap();
        assert_eq!(CLI::delete(&config, 99).unwrap(), 0);
        assert_eq!(CLI::delete(&config, 10).unwrap(), 2);
        assert_eq!(
            store.load().unwrap(),
            vec![ScoreEntry::new(2, 1, Some(Winner::P2), 20)]
        );
    }

    #[test]
    fn ply_line_is_from_the_human_seat() {
        let session = Session::new(1).record(Choice::Betray, Choice::Cooperate);
        let ply = session.last().unwrap();
        let line = CLI::ply(&ply, Seat::P2);
        assert!(line.starts_with("Round 1"));
        assert!(line.contains("+5y / +0y"));
    }
}
