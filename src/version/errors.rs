//! Version tree errors

use thiserror::Error;

use super::VersionId;
use crate::table::TableError;

/// Result type for version tree operations
pub type VersionResult<T> = Result<T, VersionError>;

/// Version tree errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("Version ID {0} not found")]
    NotFound(VersionId),

    #[error("Cannot roll back: no parent version found")]
    NoParent,

    #[error("Version index failure: {0}")]
    Index(#[from] TableError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_id() {
        let err = VersionError::NotFound(VersionId::new(12));
        assert_eq!(err.to_string(), "Version ID 12 not found");
    }

    #[test]
    fn test_index_error_converts() {
        let err: VersionError = TableError::Full { capacity: 4 }.into();
        assert!(matches!(err, VersionError::Index(TableError::Full { capacity: 4 })));
    }
}
