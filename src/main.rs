use std::process::ExitCode;

use clap::Parser;
use jaccard_similarity::cli::Cli;
use jaccard_similarity::run;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    // stdout carries the JSON response; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("jaccard_similarity=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli)
}
