//! CLI command implementations
//!
//! Both commands follow the same sequence: load configuration, set the log
//! level, build an empty store, then drive a session to completion.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use crate::observability::{log_event_with_fields, Event, Logger};
use crate::store::VersionStore;

use super::args::{Cli, Command, OutputFormat};
use super::config::VaultConfig;
use super::errors::{CliError, CliResult};
use super::session::{Session, SessionSummary};

/// Run the CLI with the given arguments
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run a specific command
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Repl { config, format } => repl(config.as_deref(), format).map(|_| ()),
        Command::Run {
            script,
            config,
            format,
        } => run_script(&script, config.as_deref(), format).map(|_| ()),
    }
}

/// Interactive session over stdin and stdout.
pub fn repl(config_path: Option<&Path>, format: OutputFormat) -> CliResult<SessionSummary> {
    let mut session = open_session(config_path, format)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    session.drive(stdin.lock(), &mut stdout, &mut stderr, true)
}

/// Executes every line of `script`, writing to stdout and stderr.
pub fn run_script(
    script: &Path,
    config_path: Option<&Path>,
    format: OutputFormat,
) -> CliResult<SessionSummary> {
    let file = File::open(script).map_err(|e| {
        CliError::script_error(format!(
            "Failed to open script '{}': {}",
            script.display(),
            e
        ))
    })?;
    let mut session = open_session(config_path, format)?;

    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    session.drive(BufReader::new(file), &mut stdout, &mut stderr, false)
}

/// Loads configuration and builds an empty store.
pub fn open_session(config_path: Option<&Path>, format: OutputFormat) -> CliResult<Session> {
    let config = VaultConfig::load_or_default(config_path)?;
    Logger::set_min_severity(config.severity()?);

    let source = config_path
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("log_level", &config.log_level), ("source", &source)],
    );

    let store = VersionStore::with_config(config.store_config())
        .map_err(|e| CliError::config_error(e.message()))?;
    Ok(Session::new(store, format))
}
