//! Streams CLI
//!
//! Reads ActivityStreams 2.0 JSON and either rewrites it in normal form or
//! reports what it contains.
//!
//! Usage:
//!   streams normalize note.json --pretty
//!   cat outbox.json | streams inspect -

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use streams_cli::{Options, inspect, normalize, read_input, render_summaries};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "streams")]
#[command(about = "Normalize and inspect ActivityStreams 2.0 documents")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Indent JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Add the ActivityStreams @context to normalized output
    #[arg(long, global = true)]
    context: bool,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode and re-encode a document in normal form
    Normalize {
        /// Input file, or - for stdin
        input: PathBuf,
    },
    /// Summarize type, capabilities and addressing of a document
    Inspect {
        /// Input file, or - for stdin
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let options = Options {
        pretty: args.pretty,
        context: args.context,
    };

    let output = match &args.command {
        Command::Normalize { input } => {
            info!("Normalizing {}", input.display());
            let text = read_input(input)?;
            normalize(&text, &options).context("Normalize failed")?
        }
        Command::Inspect { input } => {
            info!("Inspecting {}", input.display());
            let text = read_input(input)?;
            let summaries = inspect(&text).context("Inspect failed")?;
            render_summaries(&summaries, &options)?
        }
    };
    println!("{output}");
    Ok(())
}
