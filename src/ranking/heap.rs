//! TopKHeap - Array-backed binary max-heap over file summaries

use super::{FileSummary, RankingError, RankingResult};

/// Ordering applied by a [`TopKHeap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBy {
    /// Most recently modified first.
    Recency,
    /// Largest version tree first.
    VersionCount,
}

/// Binary max-heap under a fixed [`RankBy`] ordering.
///
/// Intended for build-then-drain use: push every candidate, then pop the
/// top N. Equal keys come out in no particular order.
#[derive(Debug, Clone)]
pub struct TopKHeap {
    heap: Vec<FileSummary>,
    rank_by: RankBy,
}

impl TopKHeap {
    /// Creates an empty heap.
    pub fn new(rank_by: RankBy) -> Self {
        Self {
            heap: Vec::new(),
            rank_by,
        }
    }

    /// Creates an empty heap with room for `capacity` summaries.
    pub fn with_capacity(rank_by: RankBy, capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            rank_by,
        }
    }

    #[inline]
    pub fn rank_by(&self) -> RankBy {
        self.rank_by
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The current top summary, if any.
    pub fn peek(&self) -> Option<&FileSummary> {
        self.heap.first()
    }

    /// Appends a summary and restores heap order.
    pub fn push(&mut self, summary: FileSummary) {
        self.heap.push(summary);
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes and returns the top summary.
    ///
    /// Popping an empty heap is an error rather than a default value.
    pub fn pop(&mut self) -> RankingResult<FileSummary> {
        if self.heap.is_empty() {
            return Err(RankingError::Empty);
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let top = self.heap.pop().ok_or(RankingError::Empty)?;
        self.sift_down(0);
        Ok(top)
    }

    /// Drains at most `n` summaries, best first.
    pub fn top(mut self, n: usize) -> Vec<FileSummary> {
        let mut ranked = Vec::with_capacity(n.min(self.heap.len()));
        while ranked.len() < n {
            match self.pop() {
                Ok(summary) => ranked.push(summary),
                Err(RankingError::Empty) => break,
            }
        }
        ranked
    }

    /// Returns true if `a` belongs above `b`.
    fn outranks(&self, a: &FileSummary, b: &FileSummary) -> bool {
        match self.rank_by {
            RankBy::Recency => a.last_modified > b.last_modified,
            RankBy::VersionCount => a.version_count > b.version_count,
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.outranks(&self.heap[index], &self.heap[parent]) {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut best = index;

            if left < len && self.outranks(&self.heap[left], &self.heap[best]) {
                best = left;
            }
            if right < len && self.outranks(&self.heap[right], &self.heap[best]) {
                best = right;
            }
            if best == index {
                break;
            }
            self.heap.swap(index, best);
            index = best;
        }
    }
}

impl Extend<FileSummary> for TopKHeap {
    fn extend<I: IntoIterator<Item = FileSummary>>(&mut self, iter: I) {
        for summary in iter {
            self.push(summary);
        }
    }
}
