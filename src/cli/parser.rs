//! Command line grammar
//!
//! `VERB [NAME [REST...]]`, split on the first two spaces only. REST is
//! kept verbatim: it may be empty, and it may contain further spaces.
//! For RECENT_FILES and BIGGEST_TREES the NAME position holds the count.

use crate::store::{StoreError, StoreResult};

/// One parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Create { name: String },
    Read { name: String },
    Insert { name: String, text: String },
    Update { name: String, text: String },
    Snapshot { name: String, message: String },
    Rollback { name: String, version: String },
    History { name: String },
    RecentFiles { count: Option<String> },
    BiggestTrees { count: Option<String> },
    Delete { name: String },
    List,
    Stats,
    Help,
    Exit,
}

impl Request {
    /// The verb this request was parsed from.
    pub fn verb(&self) -> &'static str {
        match self {
            Request::Create { .. } => "CREATE",
            Request::Read { .. } => "READ",
            Request::Insert { .. } => "INSERT",
            Request::Update { .. } => "UPDATE",
            Request::Snapshot { .. } => "SNAPSHOT",
            Request::Rollback { .. } => "ROLLBACK",
            Request::History { .. } => "HISTORY",
            Request::RecentFiles { .. } => "RECENT_FILES",
            Request::BiggestTrees { .. } => "BIGGEST_TREES",
            Request::Delete { .. } => "DELETE",
            Request::List => "LIST",
            Request::Stats => "STATS",
            Request::Help => "HELP",
            Request::Exit => "EXIT",
        }
    }
}

/// Usage lines printed by HELP and at REPL start.
pub const USAGE: &[&str] = &[
    "Available commands:",
    "  CREATE <filename>",
    "  READ <filename>",
    "  INSERT <filename> <content>",
    "  UPDATE <filename> <content>",
    "  SNAPSHOT <filename> <message>",
    "  ROLLBACK <filename> [versionID]",
    "  HISTORY <filename>",
    "  RECENT_FILES [num]",
    "  BIGGEST_TREES [num]",
    "  DELETE <filename>",
    "  LIST",
    "  STATS",
    "  HELP",
    "  EXIT",
];

/// Parses one input line.
///
/// Returns `Ok(None)` when the verb is empty, which covers blank lines and
/// lines starting with a space.
///
/// Any line starting with `EXIT` ends the session, whatever follows.
pub fn parse_line(line: &str) -> StoreResult<Option<Request>> {
    if line.starts_with("EXIT") {
        return Ok(Some(Request::Exit));
    }
    let (verb, name, rest) = split_line(line);
    if verb.is_empty() {
        return Ok(None);
    }

    let named = |verb: &str| -> StoreResult<String> {
        match name {
            Some(name) if !name.is_empty() => Ok(name.to_string()),
            _ => Err(StoreError::invalid_argument(format!(
                "Missing file name for {}.",
                verb
            ))),
        }
    };
    let rest = rest.unwrap_or_default().to_string();
    let count = name.filter(|n| !n.is_empty()).map(str::to_string);

    let request = match verb {
        "CREATE" => Request::Create { name: named(verb)? },
        "READ" => Request::Read { name: named(verb)? },
        "INSERT" => Request::Insert {
            name: named(verb)?,
            text: rest,
        },
        "UPDATE" => Request::Update {
            name: named(verb)?,
            text: rest,
        },
        "SNAPSHOT" => Request::Snapshot {
            name: named(verb)?,
            message: rest,
        },
        "ROLLBACK" => Request::Rollback {
            name: named(verb)?,
            version: rest,
        },
        "HISTORY" => Request::History { name: named(verb)? },
        "RECENT_FILES" => Request::RecentFiles { count },
        "BIGGEST_TREES" => Request::BiggestTrees { count },
        "DELETE" => Request::Delete { name: named(verb)? },
        "LIST" => Request::List,
        "STATS" => Request::Stats,
        "HELP" => Request::Help,
        _ => return Err(StoreError::invalid_argument("Unknown command.")),
    };
    Ok(Some(request))
}

fn split_line(line: &str) -> (&str, Option<&str>, Option<&str>) {
    match line.split_once(' ') {
        None => (line, None, None),
        Some((verb, tail)) => match tail.split_once(' ') {
            None => (verb, Some(tail), None),
            Some((name, rest)) => (verb, Some(name), Some(rest)),
        },
    }
}
