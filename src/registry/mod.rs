//! File registry
//!
//! Maps file names to their version histories through a tombstoned
//! probing table, and keeps creation order separately because slot order
//! in the table carries no meaning.
//!
//! # Invariants
//!
//! - Every name in the order list has a live table entry, and vice versa
//! - Erasing a name updates both the table and the order list

mod file_registry;

pub use file_registry::{FileRegistry, DEFAULT_REGISTRY_CAPACITY};
