//! Store sizing

use crate::registry::DEFAULT_REGISTRY_CAPACITY;
use crate::table::{DeletionPolicy, TableConfig};
use crate::version::DEFAULT_INDEX_CAPACITY;

/// Number of files ranking queries return when no count is given.
pub const DEFAULT_TOP_N: usize = 5;

/// Largest initial slot count a configuration may request.
pub const MAX_TABLE_CAPACITY: usize = 1 << 24;

/// Occupancy percentage at which growable tables rehash.
pub const DEFAULT_MAX_LOAD_PERCENT: u8 = 75;

/// Table sizing for a [`VersionStore`](super::VersionStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Initial slot count of the file registry.
    pub registry_capacity: usize,
    /// Initial slot count of each file's version index.
    pub version_index_capacity: usize,
    /// Whether tables grow or stay at their initial size.
    pub grow_tables: bool,
    /// Occupancy percentage that triggers growth.
    pub max_load_percent: u8,
    /// Ranking size used when a query gives none.
    pub default_top_n: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            registry_capacity: DEFAULT_REGISTRY_CAPACITY,
            version_index_capacity: DEFAULT_INDEX_CAPACITY,
            grow_tables: true,
            max_load_percent: DEFAULT_MAX_LOAD_PERCENT,
            default_top_n: DEFAULT_TOP_N,
        }
    }
}

impl StoreConfig {
    /// Fixed-size tables of the given capacities.
    ///
    /// A full table rejects inserts instead of growing.
    pub fn fixed(registry_capacity: usize, version_index_capacity: usize) -> Self {
        Self {
            registry_capacity,
            version_index_capacity,
            grow_tables: false,
            ..Self::default()
        }
    }

    /// Table configuration for the file registry.
    pub fn registry_table(&self) -> TableConfig {
        self.table(self.registry_capacity, DeletionPolicy::Tombstone)
    }

    /// Table configuration for each file's version index.
    pub fn version_index_table(&self) -> TableConfig {
        self.table(self.version_index_capacity, DeletionPolicy::Forbidden)
    }

    fn table(&self, capacity: usize, deletion: DeletionPolicy) -> TableConfig {
        if self.grow_tables {
            TableConfig::growable(capacity, self.max_load_percent, deletion)
        } else {
            TableConfig::fixed(capacity, deletion)
        }
    }
}
