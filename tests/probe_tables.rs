//! Probing Table Tests
//!
//! Tests for the open-addressing tables behind the file registry and the
//! version index:
//! - Lookups survive collisions, tombstones and growth
//! - Fixed tables fail fast when full
//! - The registry keeps creation order independent of slot order

use chrono::{TimeZone, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use snapvault::registry::FileRegistry;
use snapvault::table::{rolling_hash, DeletionPolicy, ProbeTable, TableConfig, TableError};
use snapvault::version::VersionedFile;

fn file() -> VersionedFile {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    VersionedFile::with_default_index(now).unwrap()
}

// =============================================================================
// Growth
// =============================================================================

/// A growable table keeps every entry retrievable across many rehashes.
#[test]
fn test_growable_table_keeps_all_entries() {
    let config = TableConfig::growable(5, 75, DeletionPolicy::Tombstone);
    let mut table: ProbeTable<String, usize> = ProbeTable::new(config).unwrap();

    for i in 0..500 {
        assert_eq!(table.insert(format!("file-{}", i), i).unwrap(), None);
    }

    assert_eq!(table.len(), 500);
    assert!(table.capacity() * 75 >= 500 * 100);
    for i in 0..500 {
        assert_eq!(table.get(format!("file-{}", i).as_str()), Some(&i));
    }
}

/// Growth drops tombstones.
#[test]
fn test_growth_clears_tombstones() {
    let config = TableConfig::growable(7, 50, DeletionPolicy::Tombstone);
    let mut table: ProbeTable<u64, u64> = ProbeTable::new(config).unwrap();

    table.insert(1, 1).unwrap();
    table.insert(2, 2).unwrap();
    table.remove(&1).unwrap();
    assert_eq!(table.tombstones(), 1);

    for key in 10..20 {
        table.insert(key, key).unwrap();
    }
    assert!(table.capacity() > 7);
    assert_eq!(table.tombstones(), 0);
    assert_eq!(table.get(&1), None);
    assert_eq!(table.get(&2), Some(&2));
}

// =============================================================================
// Fixed Capacity
// =============================================================================

/// A full fixed table reports `Full` instead of probing forever.
#[test]
fn test_full_fixed_table_fails_fast() {
    let mut table: ProbeTable<u64, ()> =
        ProbeTable::new(TableConfig::fixed(3, DeletionPolicy::Forbidden)).unwrap();
    for key in 0..3 {
        table.insert(key, ()).unwrap();
    }

    assert_eq!(table.insert(3, ()), Err(TableError::Full { capacity: 3 }));
    assert!(!table.contains(&3));
    // Overwriting an existing key still works.
    assert_eq!(table.insert(1, ()).unwrap(), Some(()));
}

/// Integer tables refuse removal.
#[test]
fn test_forbidden_deletion() {
    let mut table: ProbeTable<u64, ()> =
        ProbeTable::new(TableConfig::fixed(3, DeletionPolicy::Forbidden)).unwrap();
    table.insert(0, ()).unwrap();

    assert_eq!(table.remove(&0), Err(TableError::DeletionForbidden));
    assert!(table.contains(&0));
}

// =============================================================================
// Tombstones
// =============================================================================

/// Erase then get is absent; a later insert reuses the tombstone.
#[test]
fn test_tombstone_reuse() {
    let mut table: ProbeTable<String, u32> =
        ProbeTable::new(TableConfig::fixed(11, DeletionPolicy::Tombstone)).unwrap();
    table.insert("a".to_string(), 1).unwrap();

    assert_eq!(table.remove("a").unwrap(), Some(1));
    assert_eq!(table.get("a"), None);
    assert_eq!(table.tombstones(), 1);

    table.insert("a".to_string(), 2).unwrap();
    assert_eq!(table.tombstones(), 0);
    assert_eq!(table.get("a"), Some(&2));
}

/// Random inserts and removals agree with a plain vector model.
#[test]
fn test_random_operations_match_model() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut names: Vec<String> = (0..64).map(|i| format!("n{}", i)).collect();
    names.shuffle(&mut rng);

    let config = TableConfig::growable(3, 60, DeletionPolicy::Tombstone);
    let mut table: ProbeTable<String, usize> = ProbeTable::new(config).unwrap();
    let mut model: Vec<Option<usize>> = vec![None; names.len()];

    for round in 0..10 {
        for (i, name) in names.iter().enumerate() {
            if (i + round) % 3 == 0 {
                let expected = model[i].take();
                assert_eq!(table.remove(name.as_str()).unwrap(), expected);
            } else {
                let previous = model[i].replace(round);
                assert_eq!(table.insert(name.clone(), round).unwrap(), previous);
            }
        }
        for (i, name) in names.iter().enumerate() {
            assert_eq!(table.get(name.as_str()), model[i].as_ref());
        }
        assert_eq!(table.len(), model.iter().filter(|v| v.is_some()).count());
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Registry iteration follows creation order, not slot order.
#[test]
fn test_registry_creation_order() {
    let mut registry = FileRegistry::with_default_capacity().unwrap();
    let names = ["zeta", "alpha", "mid", "b"];
    for name in names {
        registry.insert(name, file()).unwrap();
    }

    let ordered: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
    assert_eq!(ordered, names);
    assert_eq!(registry.names(), names);

    let mut by_slot = registry.table_keys();
    by_slot.sort_unstable();
    let mut expected = names.to_vec();
    expected.sort_unstable();
    assert_eq!(by_slot, expected);
}

/// Erased names leave lookups and ordering; recreation appends.
#[test]
fn test_registry_erase_and_recreate() {
    let mut registry = FileRegistry::with_default_capacity().unwrap();
    registry.insert("a", file()).unwrap();
    registry.insert("b", file()).unwrap();

    assert!(registry.erase("a").unwrap().is_some());
    assert!(registry.erase("a").unwrap().is_none());
    assert!(!registry.contains("a"));
    assert_eq!(registry.tombstones(), 1);

    registry.insert("a", file()).unwrap();
    assert_eq!(registry.names(), ["b", "a"]);
}

/// Registry and owned-string lookups hash identically.
#[test]
fn test_string_hash_is_stable() {
    assert_eq!(rolling_hash(b"a.txt", 101), rolling_hash("a.txt".as_bytes(), 101));
    assert!(rolling_hash(b"a.txt", 101) < 101);
}
