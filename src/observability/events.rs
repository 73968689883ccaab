//! Observable events
//!
//! Events are explicit and typed; their string form is the `event` key of
//! a log line.

use std::fmt;

/// Observable events in snapvault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Session lifecycle
    /// Command session begins
    SessionStart,
    /// Command session ends
    SessionComplete,
    /// Configuration loaded
    ConfigLoaded,

    // File lifecycle
    /// File registered
    FileCreated,
    /// File erased from the registry
    FileDeleted,

    // Version tree
    /// Edit on a snapshot created a new child version
    VersionBranched,
    /// Active draft frozen as a snapshot
    SnapshotCreated,
    /// Snapshot requested on a version that already is one
    SnapshotSkipped,
    /// Active cursor moved
    RollbackComplete,

    // Tables
    /// Probing table rehashed into a larger array
    TableGrown,

    // Commands
    /// Command failed and left state untouched
    CommandRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::SessionStart => "SESSION_START",
            Event::SessionComplete => "SESSION_COMPLETE",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::FileCreated => "FILE_CREATED",
            Event::FileDeleted => "FILE_DELETED",
            Event::VersionBranched => "VERSION_BRANCHED",
            Event::SnapshotCreated => "SNAPSHOT_CREATED",
            Event::SnapshotSkipped => "SNAPSHOT_SKIPPED",
            Event::RollbackComplete => "ROLLBACK_COMPLETE",
            Event::TableGrown => "TABLE_GROWN",
            Event::CommandRejected => "COMMAND_REJECTED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_events_are_upper_snake_case() {
        let events = [
            Event::SessionStart,
            Event::SessionComplete,
            Event::ConfigLoaded,
            Event::FileCreated,
            Event::FileDeleted,
            Event::VersionBranched,
            Event::SnapshotCreated,
            Event::SnapshotSkipped,
            Event::RollbackComplete,
            Event::TableGrown,
            Event::CommandRejected,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_event_display() {
        assert_eq!(format!("{}", Event::VersionBranched), "VERSION_BRANCHED");
    }
}
