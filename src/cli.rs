use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "jaccard-similarity")]
#[command(about = "Jaccard similarity between sets of string tokens", long_about = None)]
pub struct Cli {
    /// Without a subcommand, score a request piped on stdin, or print the demo on a terminal.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a JSON request (single pair or batch) and print a JSON response.
    Score(ScoreArgs),
    /// Score two sets given on the command line.
    Pair(PairArgs),
    /// Print the reference examples.
    Demo,
}

#[derive(Args, Debug, Default)]
pub struct ScoreArgs {
    /// Read the request from this file instead of stdin.
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Pretty-print the JSON response.
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug)]
pub struct PairArgs {
    /// Token of the first set (repeatable).
    #[arg(long = "set-a", value_name = "TOKEN")]
    pub set_a: Vec<String>,
    /// Token of the second set (repeatable).
    #[arg(long = "set-b", value_name = "TOKEN")]
    pub set_b: Vec<String>,
    /// Also print the intersection and union sizes.
    #[arg(long)]
    pub explain: bool,
}
