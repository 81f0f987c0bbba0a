//! idgen CLI
//!
//! Pick an identifier type, pick a count, get a batch.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use idgen::config::{Config, DEBUG_ENV, DEFAULT_LOG_FILE};
use idgen::error::Result;
use idgen::{logging, tui};

#[derive(Parser)]
#[command(name = "idgen")]
#[command(about = "Interactively generate UUIDs, random names, and secure tokens")]
#[command(version)]
struct Cli {
    /// Write diagnostic logs (also enabled by a non-empty DEBUG variable)
    #[arg(long)]
    debug: bool,

    /// Diagnostic log file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::resolve(cli.debug, cli.log_file, std::env::var_os(DEBUG_ENV).as_deref());

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    // Held until exit so buffered log lines are flushed.
    let _log_guard = logging::init(&config.debug)?;

    let app = tui::run::run()?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(tui::view::view_text(&app).as_bytes())?;
    stdout.flush()?;
    Ok(())
}
