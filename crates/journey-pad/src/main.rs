use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use journey_pad_core::JourneyMap;
use journey_pad_mod_history::{HistoryConfig, HistoryStore};

mod commands;

use commands::{Command, Outcome};

/// A headless customer-journey-map editor with undo/redo history.
#[derive(Parser, Debug)]
#[command(name = "journey-pad", version, about)]
struct Cli {
    /// Map file to open. Created on first `save` if it does not exist.
    file: Option<PathBuf>,

    /// Title for a fresh map when no file is given or the file is missing.
    #[arg(long, default_value = "Untitled journey")]
    title: String,

    /// Undo history depth.
    #[arg(long, default_value_t = 50)]
    history_depth: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting journey-pad");

    let map = match &cli.file {
        Some(path) if path.exists() => {
            let map = JourneyMap::load(path)?;
            tracing::info!(path = %path.display(), "opened map");
            map
        }
        _ => JourneyMap::new(cli.title.clone()),
    };

    let mut store = HistoryStore::new(Some(map), HistoryConfig::with_depth(cli.history_depth));

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let cmd = match Command::parse(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                println!("error: {e}");
                continue;
            }
        };

        match commands::run(cmd, &mut store, cli.file.as_ref()) {
            Ok(Outcome::Continue) => {}
            Ok(Outcome::Quit) => break,
            Err(e) => println!("error: {e:#}"),
        }
    }

    Ok(())
}
