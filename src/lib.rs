pub mod cli;
pub mod commands;
pub mod demo;
pub mod error;
pub mod jaccard;
pub mod request;
pub mod tokens;

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::Result;
use cli::{Cli, Commands, ScoreArgs};

pub use jaccard::{Overlap, jaccard_similarity, overlap};
pub use tokens::TokenSet;

pub fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Some(Commands::Score(args)) => commands::score(&args),
        Some(Commands::Pair(args)) => commands::pair(&args),
        Some(Commands::Demo) => commands::demo(),
        None if io::stdin().is_terminal() => commands::demo(),
        None => commands::score(&ScoreArgs::default()),
    }
}
