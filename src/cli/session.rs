//! Command session
//!
//! Reads commands line by line, executes each against one
//! [`VersionStore`], and writes a response per command. A rejected
//! command is reported and the session continues; only I/O failures end
//! it early.

use std::io::{BufRead, Write};

use crate::clock::{Clock, SystemClock};
use crate::observability::{log_event_with_fields, Event};
use crate::store::{parse_count, StoreError, StoreResult, VersionStore};

use super::args::OutputFormat;
use super::errors::CliResult;
use super::io::{write_error, write_response};
use super::parser::{parse_line, Request};
use super::response::{write_usage, Response};

const PROMPT: &str = "> ";

/// Counts reported when a session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    /// Commands executed, rejected ones included
    pub commands: u64,
    /// Commands that failed
    pub rejected: u64,
}

#[derive(Debug)]
pub struct Session<C: Clock = SystemClock> {
    store: VersionStore<C>,
    format: OutputFormat,
}

impl<C: Clock> Session<C> {
    pub fn new(store: VersionStore<C>, format: OutputFormat) -> Self {
        Self { store, format }
    }

    pub fn store(&self) -> &VersionStore<C> {
        &self.store
    }

    /// Runs commands from `input` until EXIT or end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD.
    ///
    /// Interactive text sessions print the usage banner and a prompt.
    /// Text-mode errors go to `err` as `Error: <message>`; JSON-mode errors
    /// go to `out` like any other response.
    pub fn drive<R, W, E>(
        &mut self,
        mut input: R,
        out: &mut W,
        err: &mut E,
        interactive: bool,
    ) -> CliResult<SessionSummary>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let prompt = interactive && self.format == OutputFormat::Text;
        let mut summary = SessionSummary::default();

        log_event_with_fields(
            Event::SessionStart,
            &[
                ("format", self.format_name()),
                ("interactive", if interactive { "true" } else { "false" }),
            ],
        );

        if prompt {
            write_usage(out)?;
            write!(out, "\n{}", PROMPT)?;
            out.flush()?;
        }

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let decoded = String::from_utf8_lossy(&buf);
            let line = decoded.trim_end_matches('\n');
            let line = line.strip_suffix('\r').unwrap_or(line);

            let request = match parse_line(line) {
                Ok(None) => {
                    if prompt {
                        write!(out, "{}", PROMPT)?;
                        out.flush()?;
                    }
                    continue;
                }
                Ok(Some(Request::Exit)) => break,
                Ok(Some(request)) => Ok(request),
                Err(e) => Err(e),
            };

            summary.commands += 1;
            let verb = request.as_ref().map(Request::verb).unwrap_or("UNKNOWN");
            match request.and_then(|request| self.execute(request)) {
                Ok(response) => self.emit(&response, out)?,
                Err(e) => {
                    summary.rejected += 1;
                    self.reject(verb, &e, out, err)?;
                }
            }

            if prompt {
                write!(out, "\n{}", PROMPT)?;
                out.flush()?;
            }
        }

        let (commands, rejected) = (summary.commands.to_string(), summary.rejected.to_string());
        log_event_with_fields(
            Event::SessionComplete,
            &[("commands", &commands), ("rejected", &rejected)],
        );
        Ok(summary)
    }

    /// Executes one request against the store.
    pub fn execute(&mut self, request: Request) -> StoreResult<Response> {
        let default_top_n = self.store.config().default_top_n;
        let response = match request {
            Request::Create { name } => {
                self.store.create(&name)?;
                Response::Created { name }
            }
            Request::Read { name } => Response::Content(self.store.read(&name)?),
            Request::Insert { name, text } => Response::Edited(self.store.insert(&name, &text)?),
            Request::Update { name, text } => Response::Edited(self.store.update(&name, &text)?),
            Request::Snapshot { name, message } => {
                Response::Snapshot(self.store.snapshot(&name, &message)?)
            }
            Request::Rollback { name, version } => Response::RolledBack {
                version: self.store.rollback(&name, &version)?,
                to_parent: version.is_empty(),
            },
            Request::History { name } => Response::History(self.store.history(&name)?),
            Request::RecentFiles { count } => {
                let n = parse_count(count.as_deref(), default_top_n)?;
                Response::RecentFiles(self.store.recent_files(n)?)
            }
            Request::BiggestTrees { count } => {
                let n = parse_count(count.as_deref(), default_top_n)?;
                Response::BiggestTrees(self.store.biggest_trees(n)?)
            }
            Request::Delete { name } => {
                self.store.delete(&name)?;
                Response::Deleted { name }
            }
            Request::List => Response::Listing(self.store.list()),
            Request::Stats => Response::Stats(self.store.stats()),
            Request::Help => Response::Help,
            Request::Exit => {
                return Err(StoreError::invalid_argument("EXIT ends the session."));
            }
        };
        Ok(response)
    }

    fn emit<W: Write>(&self, response: &Response, out: &mut W) -> CliResult<()> {
        match self.format {
            OutputFormat::Text => {
                response.render_text(out)?;
                out.flush()?;
                Ok(())
            }
            OutputFormat::Json => write_response(out, response.to_json()?),
        }
    }

    fn reject<W: Write, E: Write>(
        &self,
        verb: &str,
        error: &StoreError,
        out: &mut W,
        err: &mut E,
    ) -> CliResult<()> {
        self.store.metrics().increment_commands_rejected();
        log_event_with_fields(
            Event::CommandRejected,
            &[("code", error.code_str()), ("command", verb)],
        );

        match self.format {
            OutputFormat::Text => {
                writeln!(err, "Error: {}", error.message())?;
                err.flush()?;
                Ok(())
            }
            OutputFormat::Json => write_error(out, error.code_str(), error.message()),
        }
    }

    fn format_name(&self) -> &'static str {
        match self.format {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}
