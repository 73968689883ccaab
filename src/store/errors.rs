//! Store error types
//!
//! Error codes:
//! - VAULT_NOT_FOUND
//! - VAULT_ALREADY_EXISTS
//! - VAULT_INVALID_ARGUMENT
//! - VAULT_INVARIANT_VIOLATION
//!
//! No store error is fatal: a failed command leaves state untouched and
//! the session continues.

use std::fmt;

use crate::ranking::RankingError;
use crate::table::TableError;
use crate::version::{ParseVersionIdError, VersionError, VersionId};

/// Store error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorCode {
    /// Unknown file name, unknown version id, or no parent to roll back to
    NotFound,
    /// Duplicate file name on create
    AlreadyExists,
    /// Malformed input: empty name, bad version id, bad count
    InvalidArgument,
    /// Internal structure failure: full table, empty ranking heap
    InvariantViolation,
}

impl StoreErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            StoreErrorCode::NotFound => "VAULT_NOT_FOUND",
            StoreErrorCode::AlreadyExists => "VAULT_ALREADY_EXISTS",
            StoreErrorCode::InvalidArgument => "VAULT_INVALID_ARGUMENT",
            StoreErrorCode::InvariantViolation => "VAULT_INVARIANT_VIOLATION",
        }
    }
}

impl fmt::Display for StoreErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Store error with code and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    code: StoreErrorCode,
    message: String,
}

impl StoreError {
    pub fn new(code: StoreErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn file_not_found(name: &str) -> Self {
        Self::new(
            StoreErrorCode::NotFound,
            format!("File '{}' not found.", name),
        )
    }

    pub fn version_not_found(id: VersionId) -> Self {
        Self::new(
            StoreErrorCode::NotFound,
            format!("Version ID {} not found.", id),
        )
    }

    pub fn no_parent() -> Self {
        Self::new(
            StoreErrorCode::NotFound,
            "Cannot roll back. No parent version found.",
        )
    }

    pub fn already_exists(name: &str) -> Self {
        Self::new(
            StoreErrorCode::AlreadyExists,
            format!("File '{}' already exists.", name),
        )
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(StoreErrorCode::InvalidArgument, message)
    }

    pub fn invariant_violation(message: impl Into<String>) -> Self {
        Self::new(StoreErrorCode::InvariantViolation, message)
    }

    /// Get the error code
    pub fn code(&self) -> StoreErrorCode {
        self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for StoreError {}

impl From<VersionError> for StoreError {
    fn from(e: VersionError) -> Self {
        match e {
            VersionError::NotFound(id) => Self::version_not_found(id),
            VersionError::NoParent => Self::no_parent(),
            VersionError::Index(table) => table.into(),
        }
    }
}

impl From<TableError> for StoreError {
    fn from(e: TableError) -> Self {
        Self::invariant_violation(e.to_string())
    }
}

impl From<RankingError> for StoreError {
    fn from(e: RankingError) -> Self {
        Self::invariant_violation(e.to_string())
    }
}

impl From<ParseVersionIdError> for StoreError {
    fn from(e: ParseVersionIdError) -> Self {
        Self::invalid_argument(format!("Invalid version ID provided. {}", e))
    }
}

/// Store result type
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(StoreErrorCode::NotFound.code(), "VAULT_NOT_FOUND");
        assert_eq!(StoreErrorCode::AlreadyExists.code(), "VAULT_ALREADY_EXISTS");
        assert_eq!(StoreErrorCode::InvalidArgument.code(), "VAULT_INVALID_ARGUMENT");
        assert_eq!(
            StoreErrorCode::InvariantViolation.code(),
            "VAULT_INVARIANT_VIOLATION"
        );
    }

    #[test]
    fn test_display_includes_code_and_message() {
        let err = StoreError::file_not_found("a.txt");
        assert_eq!(err.to_string(), "VAULT_NOT_FOUND: File 'a.txt' not found.");
    }

    #[test]
    fn test_version_errors_map_to_kinds() {
        let missing: StoreError = VersionError::NotFound(VersionId::new(4)).into();
        assert_eq!(missing.code(), StoreErrorCode::NotFound);
        assert_eq!(missing.message(), "Version ID 4 not found.");

        let orphan: StoreError = VersionError::NoParent.into();
        assert_eq!(orphan.code(), StoreErrorCode::NotFound);

        let full: StoreError = VersionError::Index(TableError::Full { capacity: 2 }).into();
        assert_eq!(full.code(), StoreErrorCode::InvariantViolation);
    }

    #[test]
    fn test_ranking_and_parse_errors_map_to_kinds() {
        let empty: StoreError = RankingError::Empty.into();
        assert_eq!(empty.code(), StoreErrorCode::InvariantViolation);

        let bad: StoreError = ParseVersionIdError::NonDigit("x".to_string()).into();
        assert_eq!(bad.code(), StoreErrorCode::InvalidArgument);
        assert!(bad.message().starts_with("Invalid version ID provided."));
    }
}
