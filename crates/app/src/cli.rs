use std::path::PathBuf;

use clap::Parser;
use devpath_core::model::{DEFAULT_QUESTIONS_PER_SESSION, GameKind, MatchMode};

/// Play DevPath quiz games in the terminal.
#[derive(Debug, Parser)]
#[command(name = "devpath", version)]
pub struct Args {
    /// Game to play: fill-in-blanks or guess-output
    #[arg(required_unless_present = "list")]
    pub game: Option<GameKind>,

    /// Questions drawn per session
    #[arg(
        long,
        env = "DEVPATH_QUESTIONS_PER_SESSION",
        default_value_t = DEFAULT_QUESTIONS_PER_SESSION
    )]
    pub count: u32,

    /// Load questions from a JSON bank file instead of the built-in bank
    #[arg(long, env = "DEVPATH_BANK")]
    pub bank: Option<PathBuf>,

    /// Ignore leading/trailing whitespace when checking answers
    #[arg(long)]
    pub trim_answers: bool,

    /// Seed for reproducible question order
    #[arg(long)]
    pub seed: Option<u64>,

    /// List available games and exit
    #[arg(long)]
    pub list: bool,

    /// Log session transitions to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    #[must_use]
    pub fn match_mode(&self) -> MatchMode {
        if self.trim_answers {
            MatchMode::TrimWhitespace
        } else {
            MatchMode::Strict
        }
    }
}
