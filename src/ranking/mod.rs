//! Top-K file ranking
//!
//! Ranking queries are answered by a transient max-heap built fresh per
//! query: push one summary per file, then pop up to N times.

mod errors;
mod heap;
mod summary;

pub use errors::{RankingError, RankingResult};
pub use heap::{RankBy, TopKHeap};
pub use summary::FileSummary;
