use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::{PairArgs, ScoreArgs};
use crate::demo::{format_overlap, scenarios, summarize};
use crate::jaccard::overlap;
use crate::request::{Response, handle_request};
use crate::tokens::unique_tokens;

pub fn score(args: &ScoreArgs) -> Result<ExitCode> {
    let input = match args.input.as_ref() {
        Some(path) => fs::read(path)
            .with_context(|| format!("failed to read request {}", path.display()))?,
        None => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .context("failed to read request from stdin")?;
            buffer
        }
    };

    let response = handle_request(&input);
    if let Response::Batch { results } = &response {
        info!(pairs = results.len(), "scored batch");
    }
    write_response(&response, args.pretty)?;

    Ok(if response.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

pub fn pair(args: &PairArgs) -> Result<ExitCode> {
    let set_a = unique_tokens(&args.set_a);
    let set_b = unique_tokens(&args.set_b);
    let result = overlap(&set_a, &set_b);
    if args.explain {
        println!("{}", format_overlap(&result));
    } else {
        println!("{:?}", result.similarity);
    }
    Ok(ExitCode::SUCCESS)
}

pub fn demo() -> Result<ExitCode> {
    println!("{}", summarize(&scenarios()));
    Ok(ExitCode::SUCCESS)
}

fn write_response(response: &Response, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(response)
    } else {
        serde_json::to_string(response)
    }
    .context("failed to serialize response")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}").context("failed to write response")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}
