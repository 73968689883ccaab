//! Version store
//!
//! The entry points a command dispatcher calls. Each call resolves a file
//! name through the registry and runs exactly one operation on that file.
//!
//! # Guarantees
//!
//! - Single-threaded and synchronous; no call suspends
//! - A failed call leaves every file untouched
//! - Errors carry a kind and a human-readable message; none are fatal

mod config;
mod errors;
mod types;
mod vault;

pub use config::{StoreConfig, DEFAULT_MAX_LOAD_PERCENT, DEFAULT_TOP_N, MAX_TABLE_CAPACITY};
pub use errors::{StoreError, StoreErrorCode, StoreResult};
pub use types::{FileListing, ReadOutcome};
pub use vault::{parse_count, VersionStore};
