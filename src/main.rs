use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io;
use std::sync::Mutex;
use tracing::{error, info};
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use gitdeck::app::{self, GitDeckApp};
use gitdeck::cli::CliArgs;
use gitdeck::config::Config;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_tracing(&args)?;

    info!("Starting GitDeck");
    let config = Config::from_cli_and_file(&args)?;

    if args.dump {
        println!("{}", app::dump(&config)?);
        return Ok(());
    }

    let app = GitDeckApp::new(&config)?;
    if let Err(e) = app.run() {
        error!("Application error: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    info!("GitDeck shut down cleanly");
    Ok(())
}

/// Logs go to `--log-file` when given. Without one, dump mode logs to
/// stderr and the TUI discards them so the screen stays intact.
fn init_tracing(args: &CliArgs) -> Result<()> {
    let (writer, ansi) = match &args.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {:?}", path))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None if args.dump => (BoxMakeWriter::new(io::stderr), true),
        None => (BoxMakeWriter::new(io::sink), false),
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(writer)
        .with_ansi(ansi)
        .init();
    Ok(())
}
