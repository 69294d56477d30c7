//! Judge Binary
//!
//! Reads commands line by line (file or stdin) and prints one report per
//! finished game. Logs go to stderr.

use anyhow::Context;
use clap::Parser;
use hanabi_judge::{Deck, GameRng, Session};
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Judge two-player Hanabi games", long_about = None)]
struct Args {
    /// Command file to read instead of stdin.
    input: Option<PathBuf>,

    /// Log verbosity (off, error, warn, info, debug, trace).
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,

    /// Print summaries as JSON objects.
    #[arg(long)]
    json: bool,

    /// Print a shuffled start line for the given seed and exit.
    #[arg(long, value_name = "SEED")]
    deal: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.log_level)?;

    if let Some(seed) = args.deal {
        let deck = Deck::shuffled(&mut GameRng::new(seed));
        println!("Start new game with deck {}", deck);
        return Ok(());
    }

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let mut session = Session::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line.context("reading input")?;
        let summary = session
            .handle_line(&line)
            .with_context(|| format!("line {}: {:?}", number + 1, line))?;

        if let Some(summary) = summary {
            if args.json {
                println!("{}", serde_json::to_string(&summary)?);
            } else {
                println!("{}", summary);
            }
        }
    }
    Ok(())
}

fn log(level: LevelFilter) -> anyhow::Result<()> {
    let config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();
    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)
        .context("installing logger")
}
