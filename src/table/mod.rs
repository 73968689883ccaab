//! Open-addressing hash tables
//!
//! A single generic probing table backs both lookups the store needs:
//! - version id -> node slot (integer keys, no deletion)
//! - file name -> versioned file (string keys, tombstoned deletion)
//!
//! # Probing
//!
//! - Home slot is computed by the key's [`TableKey`] implementation
//! - Collisions advance one slot at a time, wrapping at the end
//! - Every probe is bounded by the table capacity, so a full table
//!   reports [`TableError::Full`] instead of cycling forever
//!
//! # Growth
//!
//! Growable tables rehash into `2 * capacity + 1` slots once occupancy
//! (live entries plus tombstones) would exceed the configured load limit.

mod errors;
mod key;
mod probe;

pub use errors::{TableError, TableResult};
pub use key::{rolling_hash, TableKey};
pub use probe::{DeletionPolicy, ProbeTable, TableConfig};
