//! Ranking errors

use thiserror::Error;

/// Result type for ranking operations
pub type RankingResult<T> = Result<T, RankingError>;

/// Ranking errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankingError {
    #[error("Cannot pop from an empty ranking heap")]
    Empty,
}
