//! VersionNode - One node of a file's version tree
//!
//! A node is either a mutable draft or a frozen snapshot. Tree links are
//! arena slots owned by the enclosing `VersionedFile`, so a node never
//! owns its neighbours and parent links cannot form ownership cycles.

use chrono::{DateTime, Utc};

use super::VersionId;

/// Position of a node in its file's node arena.
pub type NodeSlot = usize;

/// A single version of a file.
///
/// Fields are private: content and snapshot state change only through
/// `VersionedFile`, which enforces the branching rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionNode {
    id: VersionId,
    content: String,
    /// Annotation, meaningful once the node is a snapshot.
    message: String,
    /// Time of the last content mutation.
    created_at: DateTime<Utc>,
    /// `None` while the node is a draft.
    snapshot_at: Option<DateTime<Utc>>,
    parent: Option<NodeSlot>,
    /// Child slots in creation order.
    children: Vec<NodeSlot>,
}

impl VersionNode {
    /// Creates a root draft carrying an initial message.
    pub(crate) fn root(message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: VersionId::ROOT,
            content: String::new(),
            message: message.into(),
            created_at: now,
            snapshot_at: None,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Creates an empty draft child of `parent`.
    ///
    /// The child never inherits the parent's content.
    pub(crate) fn child(id: VersionId, parent: NodeSlot, now: DateTime<Utc>) -> Self {
        Self {
            id,
            content: String::new(),
            message: String::new(),
            created_at: now,
            snapshot_at: None,
            parent: Some(parent),
            children: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> VersionId {
        self.id
    }

    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[inline]
    pub fn snapshot_at(&self) -> Option<DateTime<Utc>> {
        self.snapshot_at
    }

    /// Returns true once the node has been marked as a snapshot.
    #[inline]
    pub fn is_snapshot(&self) -> bool {
        self.snapshot_at.is_some()
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeSlot> {
        self.parent
    }

    #[inline]
    pub fn children(&self) -> &[NodeSlot] {
        &self.children
    }

    pub(crate) fn append(&mut self, text: &str, now: DateTime<Utc>) {
        debug_assert!(!self.is_snapshot());
        self.content.push_str(text);
        self.created_at = now;
    }

    pub(crate) fn replace(&mut self, text: &str, now: DateTime<Utc>) {
        debug_assert!(!self.is_snapshot());
        self.content.clear();
        self.content.push_str(text);
        self.created_at = now;
    }

    pub(crate) fn mark_snapshot(&mut self, message: &str, now: DateTime<Utc>) {
        self.snapshot_at = Some(now);
        self.message = message.to_string();
        self.created_at = now;
    }

    pub(crate) fn push_child(&mut self, slot: NodeSlot) {
        self.children.push(slot);
    }
}
