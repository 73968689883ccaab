//! Probing table errors

use thiserror::Error;

/// Result type for probing table operations
pub type TableResult<T> = Result<T, TableError>;

/// Probing table errors
///
/// None of these are recoverable by retrying the same call; callers
/// surface them as invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("Table capacity must be greater than zero")]
    ZeroCapacity,

    #[error("Invalid load limit: {0}% (expected 1..=100)")]
    InvalidLoadLimit(u8),

    #[error("Table is full: every one of {capacity} slots is in use")]
    Full { capacity: usize },

    #[error("Table does not permit deletion")]
    DeletionForbidden,

    #[error("Cannot allocate a table of {capacity} slots")]
    CapacityOverflow { capacity: usize },
}
