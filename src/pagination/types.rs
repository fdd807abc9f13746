//! Pagination types
//!
//! Core types shared by the two page cursor modes.

use crate::types::BlockHeight;

/// A half-open height range `[start, end)` addressing one page query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeightRange {
    pub start: BlockHeight,
    pub end: BlockHeight,
}

impl HeightRange {
    /// Sentinel end meaning "unbounded, rely on the backend signal".
    pub const UNBOUNDED: BlockHeight = BlockHeight::MAX;

    /// Create a bounded range. `start` must not exceed `end`.
    pub fn new(start: BlockHeight, end: BlockHeight) -> Self {
        debug_assert!(start <= end, "height range start must not exceed end");
        Self { start, end }
    }

    /// Create an open-ended range from `start`.
    pub fn unbounded(start: BlockHeight) -> Self {
        Self {
            start,
            end: Self::UNBOUNDED,
        }
    }

    /// An empty range yields zero page queries.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether the end relies on the backend's completion signal.
    pub fn is_unbounded(&self) -> bool {
        self.end == Self::UNBOUNDED
    }
}

/// What one completed page reports back to its cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOutcome {
    /// The backend's continuation signal for this page
    pub more: bool,
    /// Maximum height observed among all records accumulated so far
    pub max_height: Option<BlockHeight>,
}

impl PageOutcome {
    /// Outcome of a page in a fetch with more data signaled
    pub fn more(max_height: Option<BlockHeight>) -> Self {
        Self {
            more: true,
            max_height,
        }
    }

    /// Outcome of a final page
    pub fn done(max_height: Option<BlockHeight>) -> Self {
        Self {
            more: false,
            max_height,
        }
    }
}
