use crate::gameplay::*;
use anyhow::Context;
use dialoguer::Select;

/// Terminal player. Prompts for a move with an arrow-key menu.
pub struct Human;

impl Human {
    /// `None` when the prompt is dismissed with Esc or q.
    pub fn decide(&self, session: &Session) -> anyhow::Result<Option<Choice>> {
        let choices = ["Cooperate", "Betray"];
        let selection = Select::new()
            .with_prompt(format!(
                "\nRound {}: Make your decision",
                session.round() + 1
            ))
            .report(false)
            .items(&choices[..])
            .default(0)
            .interact_opt()
            .context("read decision")?;
        selection
            .map(|i| Choice::try_from(choices[i]))
            .transpose()
    }

    /// Yes/no prompt between games.
    pub fn again(&self) -> anyhow::Result<bool> {
        dialoguer::Confirm::new()
            .with_prompt("Play again?")
            .default(true)
            .interact()
            .context("read confirmation")
    }
}

impl std::fmt::Debug for Human {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Human")
    }
}
