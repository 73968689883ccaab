//! Command results and their two renderings

use std::io::{self, Write};

use chrono::{DateTime, Local, Utc};
use serde_json::{json, Value};

use crate::observability::MetricsSnapshot;
use crate::ranking::FileSummary;
use crate::store::{FileListing, ReadOutcome};
use crate::version::{EditOutcome, SnapshotEntry, SnapshotOutcome, VersionId};

use super::errors::CliResult;
use super::parser::USAGE;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Result of one successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Created { name: String },
    Content(ReadOutcome),
    Edited(EditOutcome),
    Snapshot(SnapshotOutcome),
    RolledBack { version: VersionId, to_parent: bool },
    History(Vec<SnapshotEntry>),
    RecentFiles(Vec<FileSummary>),
    BiggestTrees(Vec<FileSummary>),
    Deleted { name: String },
    Listing(Vec<FileListing>),
    Stats(MetricsSnapshot),
    Help,
}

impl Response {
    /// The `data` payload of a JSON response.
    pub fn to_json(&self) -> CliResult<Value> {
        let value = match self {
            Response::Created { name } => json!({ "created": name }),
            Response::Content(read) => serde_json::to_value(read)?,
            Response::Edited(outcome) => serde_json::to_value(outcome)?,
            Response::Snapshot(outcome) => serde_json::to_value(outcome)?,
            Response::RolledBack { version, to_parent } => json!({
                "version": version,
                "to_parent": to_parent
            }),
            Response::History(entries) => serde_json::to_value(entries)?,
            Response::RecentFiles(files) | Response::BiggestTrees(files) => {
                serde_json::to_value(files)?
            }
            Response::Deleted { name } => json!({ "deleted": name }),
            Response::Listing(rows) => serde_json::to_value(rows)?,
            Response::Stats(stats) => serde_json::to_value(stats)?,
            Response::Help => json!({ "commands": usage_commands() }),
        };
        Ok(value)
    }

    /// Writes the human-readable form.
    ///
    /// Edits print nothing.
    pub fn render_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Response::Created { name } => {
                writeln!(out, "File '{}' created successfully.", name)
            }
            Response::Content(read) => {
                writeln!(out, "Content of file (version {}):", read.version)?;
                writeln!(out, "{}", read.content)
            }
            Response::Edited(_) => Ok(()),
            Response::Snapshot(SnapshotOutcome::Created(id)) => {
                writeln!(out, "Snapshot created for version ID {}", id)
            }
            Response::Snapshot(SnapshotOutcome::AlreadySnapshot(id)) => {
                writeln!(out, "Version ID {} is already a snapshot.", id)
            }
            Response::RolledBack {
                version,
                to_parent: true,
            } => writeln!(out, "Rolled back to parent version ID {}.", version),
            Response::RolledBack { version, .. } => {
                writeln!(out, "Successfully rolled back to version ID {}.", version)
            }
            Response::History(entries) => {
                writeln!(out, "Snapshot history for file:")?;
                for entry in entries {
                    writeln!(
                        out,
                        "  - ID: {}, Time: {}, Message: \"{}\"",
                        entry.id,
                        local_time(entry.snapshot_at),
                        entry.message
                    )?;
                }
                Ok(())
            }
            Response::RecentFiles(files) => {
                writeln!(out, "Most recently modified files:")?;
                for file in files {
                    writeln!(out, "  -> {}", file.name)?;
                }
                Ok(())
            }
            Response::BiggestTrees(files) => {
                writeln!(out, "Files with the most versions:")?;
                for file in files {
                    writeln!(out, "  - {} ({} versions)", file.name, file.version_count)?;
                }
                Ok(())
            }
            Response::Deleted { name } => writeln!(out, "File '{}' deleted.", name),
            Response::Listing(rows) if rows.is_empty() => writeln!(out, "No files tracked."),
            Response::Listing(rows) => {
                writeln!(out, "Tracked files:")?;
                for row in rows {
                    writeln!(
                        out,
                        "  - {} (active version {}, {} versions)",
                        row.name, row.active_version, row.version_count
                    )?;
                }
                Ok(())
            }
            Response::Stats(stats) => {
                writeln!(out, "Session statistics:")?;
                writeln!(out, "  files created: {}", stats.files_created)?;
                writeln!(out, "  files deleted: {}", stats.files_deleted)?;
                writeln!(out, "  versions branched: {}", stats.versions_branched)?;
                writeln!(out, "  snapshots created: {}", stats.snapshots_created)?;
                writeln!(out, "  rollbacks: {}", stats.rollbacks)?;
                writeln!(out, "  commands rejected: {}", stats.commands_rejected)
            }
            Response::Help => write_usage(out),
        }
    }
}

/// Writes the command summary.
pub fn write_usage<W: Write>(out: &mut W) -> io::Result<()> {
    for line in USAGE {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn usage_commands() -> Vec<&'static str> {
    USAGE.iter().skip(1).map(|line| line.trim_start()).collect()
}

fn local_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format(TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn text(response: &Response) -> String {
        let mut out = Vec::new();
        response.render_text(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_messages() {
        assert_eq!(
            text(&Response::Created {
                name: "a.txt".to_string()
            }),
            "File 'a.txt' created successfully.\n"
        );
        assert_eq!(
            text(&Response::Snapshot(SnapshotOutcome::Created(VersionId::new(2)))),
            "Snapshot created for version ID 2\n"
        );
        assert_eq!(
            text(&Response::Snapshot(SnapshotOutcome::AlreadySnapshot(VersionId::ROOT))),
            "Version ID 0 is already a snapshot.\n"
        );
        assert_eq!(
            text(&Response::RolledBack {
                version: VersionId::new(1),
                to_parent: false
            }),
            "Successfully rolled back to version ID 1.\n"
        );
        assert_eq!(
            text(&Response::RolledBack {
                version: VersionId::ROOT,
                to_parent: true
            }),
            "Rolled back to parent version ID 0.\n"
        );
    }

    #[test]
    fn test_content_and_edits() {
        let read = Response::Content(ReadOutcome {
            version: VersionId::new(1),
            content: " world".to_string(),
        });
        assert_eq!(text(&read), "Content of file (version 1):\n world\n");

        let edit = Response::Edited(EditOutcome {
            version: VersionId::new(1),
            branched: true,
        });
        assert_eq!(text(&edit), "");
    }

    #[test]
    fn test_history_line_shape() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
        let rendered = text(&Response::History(vec![SnapshotEntry {
            id: VersionId::ROOT,
            snapshot_at: at,
            message: "v1".to_string(),
        }]));

        let expected_time = local_time(at);
        assert_eq!(
            rendered,
            format!(
                "Snapshot history for file:\n  - ID: 0, Time: {}, Message: \"v1\"\n",
                expected_time
            )
        );
        assert_eq!(expected_time.len(), "2024-03-09 12:00:00".len());
    }

    #[test]
    fn test_rankings() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let files = vec![FileSummary {
            name: "big".to_string(),
            last_modified: at,
            version_count: 4,
        }];

        assert_eq!(
            text(&Response::BiggestTrees(files.clone())),
            "Files with the most versions:\n  - big (4 versions)\n"
        );
        assert_eq!(
            text(&Response::RecentFiles(files)),
            "Most recently modified files:\n  -> big\n"
        );
        assert_eq!(
            text(&Response::RecentFiles(Vec::new())),
            "Most recently modified files:\n"
        );
    }

    #[test]
    fn test_json_payloads() {
        let snapshot = Response::Snapshot(SnapshotOutcome::Created(VersionId::new(3)))
            .to_json()
            .unwrap();
        assert_eq!(snapshot, json!({"outcome": "created", "version": 3}));

        let help = Response::Help.to_json().unwrap();
        assert_eq!(help["commands"][0], "CREATE <filename>");
    }
}
