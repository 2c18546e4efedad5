#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use http2curl_lib::{BlockScanner, MethodClassifier, ParsedMessage, RequestLine};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Turn plain-text HTTP messages into curl commands.
///
/// Each file is one candidate text block, in display order. Without files the
/// whole of stdin is read as a single block.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Method keywords that mark a block as an HTTP request.
    #[arg(
        long,
        global = true,
        value_delimiter = ',',
        default_value = "GET,PUT,POST,DELETE,PATCH"
    )]
    methods: Vec<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the first request as a curl command.
    Curl(Input),
    /// Print the body of the request.
    RequestBody(Input),
    /// Print the body of the response following the request.
    ResponseBody(Input),
    /// Print every block's request line, headers and body as JSON.
    Parse(Input),
}

#[derive(Debug, Args)]
struct Input {
    files: Vec<PathBuf>,
}

#[derive(Serialize)]
struct ParsedBlock {
    request_line: Option<RequestLine>,
    #[serde(flatten)]
    message: ParsedMessage,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("warn"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .init();
}

fn read_blocks(input: &Input) -> anyhow::Result<Vec<String>> {
    if input.files.is_empty() {
        let mut block = String::new();
        std::io::stdin()
            .read_to_string(&mut block)
            .context("Failed to read stdin")?;
        return Ok(vec![block]);
    }
    input
        .files
        .iter()
        .map(|path| {
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let classifier =
        MethodClassifier::new(&cli.methods).context("Failed to build method classifier")?;
    let scanner = BlockScanner::new(classifier);
    debug!(methods = ?cli.methods, "Classifier ready");

    match cli.command {
        Command::Curl(input) => {
            let blocks = read_blocks(&input)?;
            let command = scanner
                .first_curl(&blocks)
                .context("No usable HTTP request found")?;
            println!("{command}");
        }
        Command::RequestBody(input) => {
            let body = scanner.request_body(&read_blocks(&input)?);
            if body.is_empty() {
                bail!("Request body is empty");
            }
            println!("{body}");
        }
        Command::ResponseBody(input) => {
            let body = scanner.response_body(&read_blocks(&input)?);
            if body.is_empty() {
                bail!("Response body is empty");
            }
            println!("{body}");
        }
        Command::Parse(input) => {
            let parsed: Vec<ParsedBlock> = read_blocks(&input)?
                .iter()
                .map(|block| ParsedBlock {
                    request_line: http2curl_lib::parse_request_line(block).ok(),
                    message: http2curl_lib::parse_message(block),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
    }
    Ok(())
}
