//! CLI module for snapvault
//!
//! Provides command-line interface for:
//! - repl: Interactive command session on stdin
//! - run: Execute a script of commands and exit

mod args;
mod commands;
mod config;
mod errors;
mod io;
mod parser;
mod response;
mod session;

pub use args::{Cli, Command, OutputFormat};
pub use commands::{open_session, repl, run, run_command, run_script};
pub use config::VaultConfig;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_error, write_response};
pub use parser::{parse_line, Request, USAGE};
pub use response::{write_usage, Response};
pub use session::{Session, SessionSummary};
