//! VersionStore - Named files and their version trees

use chrono::{DateTime, Utc};

use crate::clock::{Clock, SystemClock};
use crate::observability::{log_event_with_fields, Event, MetricsRegistry, MetricsSnapshot};
use crate::ranking::{FileSummary, RankBy, TopKHeap};
use crate::registry::FileRegistry;
use crate::version::{
    EditOutcome, SnapshotEntry, SnapshotOutcome, VersionId, VersionResult, VersionedFile,
};

use super::{FileListing, ReadOutcome, StoreConfig, StoreError, StoreResult};

/// Tracks any number of named files, each with its own version tree.
#[derive(Debug)]
pub struct VersionStore<C: Clock = SystemClock> {
    registry: FileRegistry,
    config: StoreConfig,
    clock: C,
    metrics: MetricsRegistry,
}

impl VersionStore<SystemClock> {
    /// Creates a store with default sizing and the wall clock.
    pub fn new() -> StoreResult<Self> {
        Self::with_config(StoreConfig::default())
    }

    /// Creates a store with the given sizing and the wall clock.
    pub fn with_config(config: StoreConfig) -> StoreResult<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> VersionStore<C> {
    /// Creates a store that takes timestamps from `clock`.
    pub fn with_clock(config: StoreConfig, clock: C) -> StoreResult<Self> {
        Ok(Self {
            registry: FileRegistry::new(config.registry_table())?,
            config,
            clock,
            metrics: MetricsRegistry::new(),
        })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }

    /// Current counter values.
    pub fn stats(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Number of tracked files.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Read-only access to a file's full tree.
    pub fn file(&self, name: &str) -> Option<&VersionedFile> {
        self.registry.get(name)
    }

    /// Registers a new file with an empty draft root.
    pub fn create(&mut self, name: &str) -> StoreResult<()> {
        if name.is_empty() {
            return Err(StoreError::invalid_argument("File name must not be empty."));
        }
        if self.registry.contains(name) {
            return Err(StoreError::already_exists(name));
        }

        let file = VersionedFile::new(self.clock.now(), self.config.version_index_table())?;
        let capacity_before = self.registry.capacity();
        self.registry.insert(name, file)?;
        self.log_growth("file_registry", capacity_before, self.registry.capacity());

        self.metrics.increment_files_created();
        log_event_with_fields(Event::FileCreated, &[("file", name)]);
        Ok(())
    }

    /// Returns the active version's content.
    pub fn read(&self, name: &str) -> StoreResult<ReadOutcome> {
        let file = self.lookup(name)?;
        Ok(ReadOutcome {
            version: file.active_id(),
            content: file.read().to_string(),
        })
    }

    /// Appends text to the active version.
    pub fn insert(&mut self, name: &str, text: &str) -> StoreResult<EditOutcome> {
        self.edit(name, |file, now| file.insert(text, now))
    }

    /// Replaces the active version's content.
    pub fn update(&mut self, name: &str, text: &str) -> StoreResult<EditOutcome> {
        self.edit(name, |file, now| file.update(text, now))
    }

    /// Marks the active version as a snapshot.
    pub fn snapshot(&mut self, name: &str, message: &str) -> StoreResult<SnapshotOutcome> {
        let now = self.clock.now();
        let outcome = self.lookup_mut(name)?.snapshot(message, now);

        let version = outcome.version().to_string();
        match outcome {
            SnapshotOutcome::Created(_) => {
                self.metrics.increment_snapshots();
                log_event_with_fields(
                    Event::SnapshotCreated,
                    &[("file", name), ("version", &version)],
                );
            }
            SnapshotOutcome::AlreadySnapshot(_) => {
                log_event_with_fields(
                    Event::SnapshotSkipped,
                    &[("file", name), ("version", &version)],
                );
            }
        }
        Ok(outcome)
    }

    /// Rolls back by textual id, or to the parent when `version` is empty.
    ///
    /// Ids must be ASCII digits only.
    pub fn rollback(&mut self, name: &str, version: &str) -> StoreResult<VersionId> {
        self.lookup(name)?;
        if version.is_empty() {
            return self.rollback_to_parent(name);
        }
        let id: VersionId = version.parse()?;
        self.rollback_to(name, id)
    }

    /// Makes the version with `id` active.
    pub fn rollback_to(&mut self, name: &str, id: VersionId) -> StoreResult<VersionId> {
        let target = self.lookup_mut(name)?.rollback(id)?;
        self.record_rollback(name, target);
        Ok(target)
    }

    /// Makes the active version's parent active.
    pub fn rollback_to_parent(&mut self, name: &str) -> StoreResult<VersionId> {
        let target = self.lookup_mut(name)?.rollback_to_parent()?;
        self.record_rollback(name, target);
        Ok(target)
    }

    /// Snapshots from the root to the active version, oldest first.
    pub fn history(&self, name: &str) -> StoreResult<Vec<SnapshotEntry>> {
        Ok(self.lookup(name)?.history())
    }

    /// Up to `n` files, most recently modified first.
    pub fn recent_files(&self, n: usize) -> StoreResult<Vec<FileSummary>> {
        self.rank(RankBy::Recency, n)
    }

    /// Up to `n` files, largest version tree first.
    pub fn biggest_trees(&self, n: usize) -> StoreResult<Vec<FileSummary>> {
        self.rank(RankBy::VersionCount, n)
    }

    /// Removes a file and its whole tree.
    pub fn delete(&mut self, name: &str) -> StoreResult<()> {
        self.registry
            .erase(name)?
            .ok_or_else(|| StoreError::file_not_found(name))?;

        self.metrics.increment_files_deleted();
        log_event_with_fields(Event::FileDeleted, &[("file", name)]);
        Ok(())
    }

    /// Every file in creation order.
    pub fn list(&self) -> Vec<FileListing> {
        self.registry
            .iter()
            .map(|(name, file)| FileListing {
                name: name.to_string(),
                active_version: file.active_id(),
                version_count: file.version_count(),
            })
            .collect()
    }

    fn lookup(&self, name: &str) -> StoreResult<&VersionedFile> {
        self.registry
            .get(name)
            .ok_or_else(|| StoreError::file_not_found(name))
    }

    fn lookup_mut(&mut self, name: &str) -> StoreResult<&mut VersionedFile> {
        self.registry
            .get_mut(name)
            .ok_or_else(|| StoreError::file_not_found(name))
    }

    fn edit<F>(&mut self, name: &str, apply: F) -> StoreResult<EditOutcome>
    where
        F: FnOnce(&mut VersionedFile, DateTime<Utc>) -> VersionResult<EditOutcome>,
    {
        let now = self.clock.now();
        let file = self.lookup_mut(name)?;
        let capacity_before = file.index_capacity();
        let outcome = apply(file, now)?;
        let capacity_after = file.index_capacity();

        self.log_growth("version_index", capacity_before, capacity_after);
        if outcome.branched {
            self.metrics.increment_versions_branched();
            let version = outcome.version.to_string();
            log_event_with_fields(
                Event::VersionBranched,
                &[("file", name), ("version", &version)],
            );
        }
        Ok(outcome)
    }

    fn rank(&self, rank_by: RankBy, n: usize) -> StoreResult<Vec<FileSummary>> {
        let mut heap = TopKHeap::with_capacity(rank_by, self.registry.len());
        heap.extend(
            self.registry
                .iter()
                .map(|(name, file)| FileSummary::of(name, file)),
        );

        Ok(heap.top(n))
    }

    fn record_rollback(&self, name: &str, target: VersionId) {
        self.metrics.increment_rollbacks();
        let version = target.to_string();
        log_event_with_fields(
            Event::RollbackComplete,
            &[("file", name), ("version", &version)],
        );
    }

    fn log_growth(&self, table: &str, before: usize, after: usize) {
        if after != before {
            let (before, after) = (before.to_string(), after.to_string());
            log_event_with_fields(
                Event::TableGrown,
                &[("table", table), ("from", &before), ("to", &after)],
            );
        }
    }
}

/// Parses a ranking size, falling back to `default` when none is given.
///
/// Negative and non-numeric counts are rejected.
pub fn parse_count(raw: Option<&str>, default: usize) -> StoreResult<usize> {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return Ok(default);
    };
    let count: i64 = raw
        .parse()
        .map_err(|_| StoreError::invalid_argument(format!("Invalid count '{}'.", raw)))?;
    if count < 0 {
        return Err(StoreError::invalid_argument(
            "Number of files must be non-negative.",
        ));
    }
    usize::try_from(count)
        .map_err(|_| StoreError::invalid_argument(format!("Count '{}' is out of range.", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::store::StoreErrorCode;

    fn store() -> VersionStore<ManualClock> {
        VersionStore::with_clock(StoreConfig::default(), ManualClock::default()).unwrap()
    }

    #[test]
    fn test_create_and_read() {
        let mut store = store();
        store.create("a.txt").unwrap();

        let read = store.read("a.txt").unwrap();
        assert_eq!(read.version, VersionId::ROOT);
        assert_eq!(read.content, "");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_create_rejects_duplicates_and_empty_names() {
        let mut store = store();
        store.create("a.txt").unwrap();

        assert_eq!(
            store.create("a.txt").unwrap_err().code(),
            StoreErrorCode::AlreadyExists
        );
        assert_eq!(
            store.create("").unwrap_err().code(),
            StoreErrorCode::InvalidArgument
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_unknown_file_is_not_found() {
        let mut store = store();
        for err in [
            store.read("nope").unwrap_err(),
            store.insert("nope", "x").unwrap_err(),
            store.update("nope", "x").unwrap_err(),
            store.snapshot("nope", "m").unwrap_err(),
            store.rollback("nope", "").unwrap_err(),
            store.history("nope").unwrap_err(),
            store.delete("nope").unwrap_err(),
        ] {
            assert_eq!(err.code(), StoreErrorCode::NotFound);
            assert_eq!(err.message(), "File 'nope' not found.");
        }
    }

    #[test]
    fn test_branching_scenario() {
        let mut store = store();
        store.create("a.txt").unwrap();
        store.insert("a.txt", "hello").unwrap();
        store.snapshot("a.txt", "v1").unwrap();
        let outcome = store.insert("a.txt", " world").unwrap();

        assert!(outcome.branched);
        assert_eq!(store.read("a.txt").unwrap().content, " world");

        let history = store.history("a.txt").unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].message, "v1");
        assert_eq!(store.stats().versions_branched, 1);
    }

    #[test]
    fn test_rollback_parsing() {
        let mut store = store();
        store.create("a.txt").unwrap();
        store.snapshot("a.txt", "base").unwrap();
        store.insert("a.txt", "child").unwrap();

        assert_eq!(store.rollback("a.txt", "0").unwrap(), VersionId::ROOT);
        assert_eq!(store.rollback("a.txt", "1").unwrap(), VersionId::new(1));
        assert_eq!(store.rollback("a.txt", "").unwrap(), VersionId::ROOT);

        let bad = store.rollback("a.txt", "x1").unwrap_err();
        assert_eq!(bad.code(), StoreErrorCode::InvalidArgument);
        let missing = store.rollback("a.txt", "7").unwrap_err();
        assert_eq!(missing.code(), StoreErrorCode::NotFound);
        let orphan = store.rollback("a.txt", "").unwrap_err();
        assert_eq!(orphan.message(), "Cannot roll back. No parent version found.");

        assert_eq!(store.read("a.txt").unwrap().version, VersionId::ROOT);
        assert_eq!(store.stats().rollbacks, 3);
    }

    #[test]
    fn test_rankings_use_clock() {
        let mut store = store();
        store.create("old").unwrap();
        store.create("new").unwrap();
        store.snapshot("old", "s").unwrap();
        store.insert("old", "x").unwrap();
        store.insert("new", "y").unwrap();

        let recent: Vec<String> = store
            .recent_files(5)
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(recent, vec!["new", "old"]);

        let biggest = store.biggest_trees(1).unwrap();
        assert_eq!(biggest.len(), 1);
        assert_eq!(biggest[0].name, "old");
        assert_eq!(biggest[0].version_count, 2);

        assert!(store.recent_files(0).unwrap().is_empty());
    }

    #[test]
    fn test_delete_and_recreate() {
        let mut store = store();
        store.create("a.txt").unwrap();
        store.insert("a.txt", "first life").unwrap();
        store.delete("a.txt").unwrap();

        assert!(store.file("a.txt").is_none());
        assert!(store.list().is_empty());

        store.create("a.txt").unwrap();
        assert_eq!(store.read("a.txt").unwrap().content, "");
        assert_eq!(store.stats().files_deleted, 1);
        assert_eq!(store.stats().files_created, 2);
    }

    #[test]
    fn test_list_in_creation_order() {
        let mut store = store();
        for name in ["c", "a", "b"] {
            store.create(name).unwrap();
        }
        let names: Vec<String> = store.list().into_iter().map(|row| row.name).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_fixed_registry_full_is_invariant_violation() {
        let mut store =
            VersionStore::with_clock(StoreConfig::fixed(2, 4), ManualClock::default()).unwrap();
        store.create("a").unwrap();
        store.create("b").unwrap();

        let err = store.create("c").unwrap_err();
        assert_eq!(err.code(), StoreErrorCode::InvariantViolation);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_unallocatable_registry_is_an_error() {
        let config = StoreConfig::fixed(usize::MAX / 2, 4);
        let err = VersionStore::with_clock(config, ManualClock::default()).unwrap_err();
        assert_eq!(err.code(), StoreErrorCode::InvariantViolation);
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(None, 5).unwrap(), 5);
        assert_eq!(parse_count(Some(""), 5).unwrap(), 5);
        assert_eq!(parse_count(Some("0"), 5).unwrap(), 0);
        assert_eq!(parse_count(Some("12"), 5).unwrap(), 12);
        assert_eq!(
            parse_count(Some("-1"), 5).unwrap_err().message(),
            "Number of files must be non-negative."
        );
        assert_eq!(
            parse_count(Some("many"), 5).unwrap_err().code(),
            StoreErrorCode::InvalidArgument
        );
    }
}
