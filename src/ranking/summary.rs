//! FileSummary - Ranking record for one file

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::version::VersionedFile;

/// Lightweight per-file record pushed into a ranking heap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSummary {
    pub name: String,
    pub last_modified: DateTime<Utc>,
    pub version_count: u64,
}

impl FileSummary {
    /// Summarizes a file under the given name.
    pub fn of(name: &str, file: &VersionedFile) -> Self {
        Self {
            name: name.to_string(),
            last_modified: file.last_modified(),
            version_count: file.version_count(),
        }
    }
}
