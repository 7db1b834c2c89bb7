//! Command-line driver for the haunt simulation.
//!
//! Loads configuration, applies command-line overrides, starts the
//! hunter and ghost threads and prints who won.
//!
//! # Startup Sequence
//!
//! 1. Parse the command line
//! 2. Load configuration from `haunt-config.yaml` (or `--config`)
//! 3. Apply command-line overrides; with `--prompt`, read hunter names
//! 4. Initialize structured logging (tracing)
//! 5. Prepare the haunting: house, roster, ghost
//! 6. Run every actor thread to completion
//! 7. Print the report, as text or JSON

mod cli;
mod error;
mod prompt;
mod report;
mod sink;

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use haunt_core::{Haunting, LoggingConfig, SimulationConfig};
use haunt_world::MAX_HUNTERS;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::error::EngineError;
use crate::sink::TracingSink;

fn main() -> ExitCode {
    // 1. Parse the command line.
    match run(&Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("haunt-engine: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), EngineError> {
    // 2. Load configuration.
    let (mut config, from_file) = load_config(&cli.config)?;

    // 3. Command-line overrides.
    cli.apply(&mut config);
    if cli.prompt {
        let stdin = io::stdin();
        config.hunters.names = prompt::read_hunter_names(stdin.lock(), io::stderr(), MAX_HUNTERS)?;
    }

    // 4. Initialize structured logging.
    init_logging(&config.logging)?;
    info!("haunt-engine starting");
    info!(
        path = %cli.config.display(),
        from_file,
        hunters = config.hunters.names.len(),
        hunter_rest_ms = config.hunters.rest_ms,
        ghost_rest_ms = config.ghost.rest_ms,
        seed = ?config.seed,
        "Configuration loaded"
    );

    // 5. Prepare the haunting.
    let haunting = Haunting::prepare(config)?;
    info!(
        seed = haunting.seed(),
        rooms = haunting.house().room_count(),
        "Haunting ready"
    );

    // 6. Run.
    let outcome = haunting.run(Arc::new(TracingSink))?;

    // 7. Report.
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &outcome)?;
        writeln!(out)?;
    } else {
        out.write_all(report::render(&outcome).as_bytes())?;
    }
    out.flush()?;
    Ok(())
}

/// Load configuration from `path`, falling back to defaults when the file
/// does not exist. The flag reports whether the file was read.
fn load_config(path: &Path) -> Result<(SimulationConfig, bool), EngineError> {
    if path.exists() {
        let config = SimulationConfig::from_file(path)?;
        Ok((config, true))
    } else {
        Ok((SimulationConfig::default(), false))
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the
/// configured level. Logs go to stderr so `--json` output stays clean.
fn init_logging(logging: &LoggingConfig) -> Result<(), EngineError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(true)
        .with_writer(io::stderr);
    let installed = if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| EngineError::Logging {
        message: e.to_string(),
    })
}
