//! VersionIndex - Version id to node lookup
//!
//! Entries are added when a node is created and never removed, so the
//! underlying table runs without tombstones.

use super::{NodeSlot, VersionId};
use crate::table::{DeletionPolicy, ProbeTable, TableConfig, TableResult};

/// Hash index from version id to arena slot.
#[derive(Debug)]
pub struct VersionIndex {
    table: ProbeTable<VersionId, NodeSlot>,
}

impl VersionIndex {
    /// Creates an index from a table configuration.
    ///
    /// The deletion policy is always forced to `Forbidden`.
    pub fn new(config: TableConfig) -> TableResult<Self> {
        let config = TableConfig {
            deletion: DeletionPolicy::Forbidden,
            ..config
        };
        Ok(Self {
            table: ProbeTable::new(config)?,
        })
    }

    /// Registers a node.
    pub fn insert(&mut self, id: VersionId, slot: NodeSlot) -> TableResult<()> {
        self.table.insert(id, slot)?;
        Ok(())
    }

    /// Looks up the slot of a node.
    pub fn get(&self, id: VersionId) -> Option<NodeSlot> {
        self.table.get(&id).copied()
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if no node is registered.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Current slot count of the underlying table.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }
}
