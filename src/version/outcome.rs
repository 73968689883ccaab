//! Results of version tree operations

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::VersionId;

/// Result of an insert or update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EditOutcome {
    /// The version that received the edit.
    pub version: VersionId,
    /// Whether the edit had to branch off a snapshot first.
    pub branched: bool,
}

/// Result of a snapshot request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "version", rename_all = "snake_case")]
pub enum SnapshotOutcome {
    /// The active draft was frozen.
    Created(VersionId),
    /// The active version was already a snapshot; nothing changed.
    AlreadySnapshot(VersionId),
}

impl SnapshotOutcome {
    /// The version the request targeted.
    pub fn version(&self) -> VersionId {
        match self {
            SnapshotOutcome::Created(id) | SnapshotOutcome::AlreadySnapshot(id) => *id,
        }
    }
}

/// One entry of a file's snapshot history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotEntry {
    pub id: VersionId,
    pub snapshot_at: DateTime<Utc>,
    pub message: String,
}
