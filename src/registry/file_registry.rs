//! FileRegistry - Name to versioned file lookup

use crate::table::{DeletionPolicy, ProbeTable, TableConfig, TableResult};
use crate::version::VersionedFile;

/// Initial registry size when no configuration is supplied.
pub const DEFAULT_REGISTRY_CAPACITY: usize = 101;

/// Owns every tracked file, keyed by name.
#[derive(Debug)]
pub struct FileRegistry {
    table: ProbeTable<String, VersionedFile>,
    /// Names in creation order.
    order: Vec<String>,
}

impl FileRegistry {
    /// Creates a registry from a table configuration.
    ///
    /// The deletion policy is always forced to `Tombstone`.
    pub fn new(config: TableConfig) -> TableResult<Self> {
        let config = TableConfig {
            deletion: DeletionPolicy::Tombstone,
            ..config
        };
        Ok(Self {
            table: ProbeTable::new(config)?,
            order: Vec::new(),
        })
    }

    /// Creates a growable registry of [`DEFAULT_REGISTRY_CAPACITY`] slots.
    pub fn with_default_capacity() -> TableResult<Self> {
        Self::new(TableConfig::growable(
            DEFAULT_REGISTRY_CAPACITY,
            75,
            DeletionPolicy::Tombstone,
        ))
    }

    /// Inserts a file, or replaces the file already stored under `name`.
    ///
    /// A replaced file keeps its original position in the order list.
    /// Returns the replaced file, if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        file: VersionedFile,
    ) -> TableResult<Option<VersionedFile>> {
        let name = name.into();
        let replaced = self.table.insert(name.clone(), file)?;
        if replaced.is_none() {
            self.order.push(name);
        }
        Ok(replaced)
    }

    pub fn get(&self, name: &str) -> Option<&VersionedFile> {
        self.table.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut VersionedFile> {
        self.table.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains(name)
    }

    /// Removes a file, leaving a tombstone in the table.
    pub fn erase(&mut self, name: &str) -> TableResult<Option<VersionedFile>> {
        let removed = self.table.remove(name)?;
        if removed.is_some() {
            self.order.retain(|existing| existing != name);
        }
        Ok(removed)
    }

    /// Names in creation order.
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Files in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VersionedFile)> {
        self.order
            .iter()
            .filter_map(|name| self.table.get(name.as_str()).map(|file| (name.as_str(), file)))
    }

    /// Live names in table slot order.
    pub fn table_keys(&self) -> Vec<&str> {
        self.table.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Current slot count of the underlying table.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Number of tombstoned slots in the underlying table.
    pub fn tombstones(&self) -> usize {
        self.table.tombstones()
    }
}
