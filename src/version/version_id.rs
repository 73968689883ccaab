//! VersionId - Sequential identity of a version node

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::table::TableKey;

/// Identity of a node within one file's version tree.
///
/// Ids are assigned sequentially starting at [`VersionId::ROOT`] and
/// are unique only within their owning file.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[serde(transparent)]
pub struct VersionId(u64);

impl VersionId {
    /// Id of every file's root node.
    pub const ROOT: VersionId = VersionId(0);

    /// Creates a VersionId with the given value.
    #[inline]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying value.
    #[inline]
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns the id that follows this one.
    #[inline]
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TableKey for VersionId {
    #[inline]
    fn home_slot(&self, capacity: usize) -> usize {
        self.0.home_slot(capacity)
    }
}

/// Reasons a textual version id is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseVersionIdError {
    #[error("Version ID is empty")]
    Empty,

    #[error("Version ID '{0}' must contain digits only")]
    NonDigit(String),

    #[error("Version ID '{0}' is out of range")]
    Overflow(String),
}

impl FromStr for VersionId {
    type Err = ParseVersionIdError;

    /// Accepts ASCII digits only: no sign, no whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseVersionIdError::Empty);
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseVersionIdError::NonDigit(s.to_string()));
        }
        s.parse::<u64>()
            .map(VersionId)
            .map_err(|_| ParseVersionIdError::Overflow(s.to_string()))
    }
}
