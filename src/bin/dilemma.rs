//! Dilemma Binary
//!
//! Plays the Prisoner's Dilemma in the terminal and manages the score history.
//!
//! Commands: play, scores, delete <timestamp>

use dilemma::*;

fn main() {
    let logging = log()
        .map_err(|e| eprintln!("logging disabled: {:#}", e))
        .is_ok();
    if let Err(e) = cli::CLI::run() {
        match logging {
            true => log::error!("{:#}", e),
            false => eprintln!("{:#}", e),
        }
        std::process::exit(1);
    }
}
