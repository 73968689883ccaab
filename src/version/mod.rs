//! Per-file version trees
//!
//! Each file owns a branching tree of content versions:
//! - `VersionId` - sequential identity of a node within one file
//! - `VersionNode` - content, snapshot marker and tree links
//! - `VersionIndex` - id -> node lookup for O(1) rollback
//! - `VersionedFile` - the tree plus its active cursor
//!
//! # Invariants
//!
//! - Ids are assigned from 0 (the root) in creation order and never reused
//! - A node is a snapshot iff its snapshot time is set
//! - Snapshot nodes are frozen; the next edit branches into a new child
//! - Nodes are never removed while the file lives

mod errors;
mod file;
mod index;
mod node;
mod outcome;
mod version_id;

pub use errors::{VersionError, VersionResult};
pub use file::{VersionedFile, DEFAULT_INDEX_CAPACITY, INITIAL_MESSAGE};
pub use index::VersionIndex;
pub use node::{NodeSlot, VersionNode};
pub use outcome::{EditOutcome, SnapshotEntry, SnapshotOutcome};
pub use version_id::{ParseVersionIdError, VersionId};
