//! VersionedFile - A version tree with an active cursor
//!
//! Branching is lazy: a snapshot stays frozen until the next insert or
//! update, which creates a fresh child of the snapshot and edits that
//! child instead. The child starts with empty content.

use chrono::{DateTime, Utc};

use super::{
    EditOutcome, NodeSlot, SnapshotEntry, SnapshotOutcome, VersionError, VersionId, VersionIndex,
    VersionNode, VersionResult,
};
use crate::table::{DeletionPolicy, TableConfig};

/// Message attached to every file's root node.
pub const INITIAL_MESSAGE: &str = "File created.";

/// Initial version index size when no configuration is supplied.
pub const DEFAULT_INDEX_CAPACITY: usize = 101;

/// Slot of the root node in every arena.
const ROOT_SLOT: NodeSlot = 0;

/// A single file's version history.
///
/// Owns every node it has created. `active`, parent links and index
/// entries are arena slots, valid for the life of the file.
#[derive(Debug)]
pub struct VersionedFile {
    nodes: Vec<VersionNode>,
    active: NodeSlot,
    next_id: VersionId,
    index: VersionIndex,
}

impl VersionedFile {
    /// Creates a file whose version index uses `index_config`.
    ///
    /// The root is an empty draft carrying [`INITIAL_MESSAGE`].
    pub fn new(now: DateTime<Utc>, index_config: TableConfig) -> VersionResult<Self> {
        let mut index = VersionIndex::new(index_config)?;
        index.insert(VersionId::ROOT, ROOT_SLOT)?;

        Ok(Self {
            nodes: vec![VersionNode::root(INITIAL_MESSAGE, now)],
            active: ROOT_SLOT,
            next_id: VersionId::ROOT.next(),
            index,
        })
    }

    /// Creates a file with a growable index of [`DEFAULT_INDEX_CAPACITY`] slots.
    pub fn with_default_index(now: DateTime<Utc>) -> VersionResult<Self> {
        Self::new(
            now,
            TableConfig::growable(DEFAULT_INDEX_CAPACITY, 75, DeletionPolicy::Forbidden),
        )
    }

    /// The node reads and writes currently target.
    #[inline]
    pub fn active(&self) -> &VersionNode {
        &self.nodes[self.active]
    }

    #[inline]
    pub fn active_id(&self) -> VersionId {
        self.active().id()
    }

    #[inline]
    pub fn root(&self) -> &VersionNode {
        &self.nodes[ROOT_SLOT]
    }

    /// Number of versions ever created, which is also the next id.
    #[inline]
    pub fn version_count(&self) -> u64 {
        self.next_id.value()
    }

    /// Modification time used for recency ranking: the active node's
    /// last content change.
    #[inline]
    pub fn last_modified(&self) -> DateTime<Utc> {
        self.active().created_at()
    }

    /// Content of the active version.
    #[inline]
    pub fn read(&self) -> &str {
        self.active().content()
    }

    /// Looks up any version of this file by id.
    pub fn node(&self, id: VersionId) -> Option<&VersionNode> {
        self.index.get(id).map(|slot| &self.nodes[slot])
    }

    /// Parent of a node of this file.
    pub fn parent_of(&self, node: &VersionNode) -> Option<&VersionNode> {
        node.parent().map(|slot| &self.nodes[slot])
    }

    /// Children of a node of this file, in creation order.
    pub fn children_of<'a>(
        &'a self,
        node: &'a VersionNode,
    ) -> impl Iterator<Item = &'a VersionNode> + 'a {
        node.children().iter().map(move |&slot| &self.nodes[slot])
    }

    /// Current slot count of the version index.
    pub fn index_capacity(&self) -> usize {
        self.index.capacity()
    }

    /// Appends text to the active version, branching first if it is a snapshot.
    pub fn insert(&mut self, text: &str, now: DateTime<Utc>) -> VersionResult<EditOutcome> {
        let branched = self.branch_if_frozen(now)?;
        self.nodes[self.active].append(text, now);
        Ok(EditOutcome {
            version: self.active_id(),
            branched,
        })
    }

    /// Replaces the active version's content, branching first if it is a snapshot.
    pub fn update(&mut self, text: &str, now: DateTime<Utc>) -> VersionResult<EditOutcome> {
        let branched = self.branch_if_frozen(now)?;
        self.nodes[self.active].replace(text, now);
        Ok(EditOutcome {
            version: self.active_id(),
            branched,
        })
    }

    /// Freezes the active version under `message`.
    ///
    /// Snapshotting a snapshot changes nothing.
    pub fn snapshot(&mut self, message: &str, now: DateTime<Utc>) -> SnapshotOutcome {
        let active = &mut self.nodes[self.active];
        if active.is_snapshot() {
            return SnapshotOutcome::AlreadySnapshot(active.id());
        }
        active.mark_snapshot(message, now);
        SnapshotOutcome::Created(active.id())
    }

    /// Moves the cursor to the version with the given id.
    pub fn rollback(&mut self, id: VersionId) -> VersionResult<VersionId> {
        let slot = self.index.get(id).ok_or(VersionError::NotFound(id))?;
        self.active = slot;
        Ok(id)
    }

    /// Moves the cursor to the active version's parent.
    pub fn rollback_to_parent(&mut self) -> VersionResult<VersionId> {
        let parent = self.active().parent().ok_or(VersionError::NoParent)?;
        self.active = parent;
        Ok(self.active_id())
    }

    /// Snapshots on the path from the root to the active version, oldest first.
    pub fn history(&self) -> Vec<SnapshotEntry> {
        let mut entries: Vec<SnapshotEntry> = self
            .ancestry()
            .filter_map(|node| {
                node.snapshot_at().map(|snapshot_at| SnapshotEntry {
                    id: node.id(),
                    snapshot_at,
                    message: node.message().to_string(),
                })
            })
            .collect();
        entries.reverse();
        entries
    }

    /// Walks from the active version up to the root.
    fn ancestry(&self) -> impl Iterator<Item = &VersionNode> + '_ {
        std::iter::successors(Some(self.active()), move |node| self.parent_of(node))
    }

    /// Creates and activates an empty child when the active node is frozen.
    ///
    /// The index entry is registered first so a failed insert leaves the
    /// tree untouched.
    fn branch_if_frozen(&mut self, now: DateTime<Utc>) -> VersionResult<bool> {
        if !self.active().is_snapshot() {
            return Ok(false);
        }

        let id = self.next_id;
        let slot = self.nodes.len();
        self.index.insert(id, slot)?;

        self.nodes.push(VersionNode::child(id, self.active, now));
        self.nodes[self.active].push_child(slot);
        self.active = slot;
        self.next_id = id.next();
        Ok(true)
    }
}
