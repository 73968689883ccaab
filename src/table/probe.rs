//! Linear-probing table with optional tombstones and growth

use std::borrow::Borrow;

use super::errors::{TableError, TableResult};
use super::key::TableKey;

/// How a table handles removal of entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionPolicy {
    /// Entries are permanent; `remove` is rejected.
    Forbidden,
    /// Removed entries leave a tombstone that keeps probe chains intact
    /// and is reused by later inserts.
    Tombstone,
}

/// Sizing and behavior of a [`ProbeTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    /// Initial number of slots.
    pub capacity: usize,
    /// Occupancy limit, as a percentage of capacity, that triggers growth.
    pub max_load_percent: u8,
    /// Whether the table rehashes into a larger array when the limit is hit.
    pub growable: bool,
    /// Removal behavior.
    pub deletion: DeletionPolicy,
}

impl TableConfig {
    /// Fixed-size table: never grows, fails with `Full` once every slot is used.
    pub fn fixed(capacity: usize, deletion: DeletionPolicy) -> Self {
        Self {
            capacity,
            max_load_percent: 100,
            growable: false,
            deletion,
        }
    }

    /// Growable table that rehashes past `max_load_percent` occupancy.
    pub fn growable(capacity: usize, max_load_percent: u8, deletion: DeletionPolicy) -> Self {
        Self {
            capacity,
            max_load_percent,
            growable: true,
            deletion,
        }
    }

    fn validate(&self) -> TableResult<()> {
        if self.capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }
        if self.max_load_percent == 0 || self.max_load_percent > 100 {
            return Err(TableError::InvalidLoadLimit(self.max_load_percent));
        }
        Ok(())
    }
}

#[derive(Debug)]
enum Slot<K, V> {
    Empty,
    Occupied { key: K, value: V },
    Deleted,
}

/// Open-addressing hash table with linear probing.
///
/// Iteration order is slot order and carries no meaning; callers that
/// need a stable order keep it separately.
#[derive(Debug)]
pub struct ProbeTable<K, V> {
    slots: Vec<Slot<K, V>>,
    config: TableConfig,
    live: usize,
    tombstones: usize,
}

impl<K: TableKey, V> ProbeTable<K, V> {
    /// Creates an empty table.
    pub fn new(config: TableConfig) -> TableResult<Self> {
        config.validate()?;
        Ok(Self {
            slots: empty_slots(config.capacity)?,
            config,
            live: 0,
            tombstones: 0,
        })
    }

    /// Number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns true if the table holds no live entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Current number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of tombstoned slots.
    #[inline]
    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    /// Returns the table configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Inserts or overwrites an entry.
    ///
    /// Overwriting replaces the value in place and returns the old value.
    /// A new key reuses the first tombstone on its probe path.
    pub fn insert(&mut self, key: K, value: V) -> TableResult<Option<V>> {
        if let Some(index) = self.find(&key) {
            if let Slot::Occupied { value: existing, .. } = &mut self.slots[index] {
                return Ok(Some(std::mem::replace(existing, value)));
            }
        }

        if self.config.growable && self.exceeds_load_after_insert() {
            self.grow()?;
        }

        let index = self.vacant_slot_for(&key).ok_or(TableError::Full {
            capacity: self.capacity(),
        })?;
        if matches!(self.slots[index], Slot::Deleted) {
            self.tombstones -= 1;
        }
        self.slots[index] = Slot::Occupied { key, value };
        self.live += 1;
        Ok(None)
    }

    /// Looks up a value by key.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        let index = self.find(key)?;
        match &self.slots[index] {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Looks up a value by key for mutation.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        let index = self.find(key)?;
        match &mut self.slots[index] {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Returns true if the key has a live entry.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Removes an entry, leaving a tombstone, and returns its value.
    ///
    /// Returns `Ok(None)` if the key is absent.
    pub fn remove<Q>(&mut self, key: &Q) -> TableResult<Option<V>>
    where
        K: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        if self.config.deletion == DeletionPolicy::Forbidden {
            return Err(TableError::DeletionForbidden);
        }
        let Some(index) = self.find(key) else {
            return Ok(None);
        };
        match std::mem::replace(&mut self.slots[index], Slot::Deleted) {
            Slot::Occupied { value, .. } => {
                self.live -= 1;
                self.tombstones += 1;
                Ok(Some(value))
            }
            other => {
                self.slots[index] = other;
                Ok(None)
            }
        }
    }

    /// Iterates live entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Occupied { key, value } => Some((key, value)),
            _ => None,
        })
    }

    /// Live keys in slot order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Finds the slot holding `key`, probing at most `capacity` slots.
    fn find<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        let capacity = self.capacity();
        let mut index = key.home_slot(capacity);
        for _ in 0..capacity {
            match &self.slots[index] {
                Slot::Empty => return None,
                Slot::Occupied { key: existing, .. }
                    if <K as Borrow<Q>>::borrow(existing) == key =>
                {
                    return Some(index)
                }
                _ => {}
            }
            index = (index + 1) % capacity;
        }
        None
    }

    /// First empty or tombstoned slot on `key`'s probe path.
    ///
    /// Only valid once `key` is known to be absent.
    fn vacant_slot_for(&self, key: &K) -> Option<usize> {
        let capacity = self.capacity();
        let mut index = key.home_slot(capacity);
        for _ in 0..capacity {
            if !matches!(self.slots[index], Slot::Occupied { .. }) {
                return Some(index);
            }
            index = (index + 1) % capacity;
        }
        None
    }

    fn exceeds_load_after_insert(&self) -> bool {
        let occupied = self.live + self.tombstones + 1;
        occupied * 100 > self.capacity() * usize::from(self.config.max_load_percent)
    }

    /// Rehashes every live entry into `2 * capacity + 1` slots.
    ///
    /// Tombstones are dropped.
    fn grow(&mut self) -> TableResult<()> {
        let capacity = self.capacity();
        let new_capacity = capacity
            .checked_mul(2)
            .and_then(|doubled| doubled.checked_add(1))
            .ok_or(TableError::CapacityOverflow { capacity })?;
        let old = std::mem::replace(&mut self.slots, empty_slots(new_capacity)?);
        self.tombstones = 0;

        for slot in old {
            if let Slot::Occupied { key, value } = slot {
                // The new array has more free slots than live entries.
                if let Some(index) = self.vacant_slot_for(&key) {
                    self.slots[index] = Slot::Occupied { key, value };
                }
            }
        }
        Ok(())
    }
}

fn empty_slots<K, V>(capacity: usize) -> TableResult<Vec<Slot<K, V>>> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| TableError::CapacityOverflow { capacity })?;
    slots.extend((0..capacity).map(|_| Slot::Empty));
    Ok(slots)
}
