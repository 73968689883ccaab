//! Values returned by store queries

use serde::Serialize;

use crate::version::VersionId;

/// Content of a file's active version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadOutcome {
    pub version: VersionId,
    pub content: String,
}

/// One row of a file listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileListing {
    pub name: String,
    pub active_version: VersionId,
    pub version_count: u64,
}
