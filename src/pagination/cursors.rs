//! Page cursor implementations
//!
//! A cursor computes successive page queries for one multi-page fetch. The
//! height cursor only ever advances: a next start height is strictly greater
//! than every height already covered.

use super::types::{HeightRange, PageOutcome};

/// Explicit-range cursor: partitions `[start, end)` into fixed-size chunks
/// and issues one page per chunk, regardless of the backend's per-page
/// continuation signal.
#[derive(Debug, Clone)]
pub struct FixedStepCursor {
    next: u64,
    end: u64,
    step: u64,
    pages: u32,
}

impl FixedStepCursor {
    /// Create a cursor over `range` with the given page step.
    pub fn new(range: HeightRange, step: u64) -> Self {
        debug_assert!(step > 0, "page step must be positive");
        Self {
            next: range.start,
            end: range.end,
            step: step.max(1),
            pages: 0,
        }
    }

    /// Next chunk to query, or `None` when the range is exhausted. An empty
    /// range yields no chunks at all.
    pub fn next_range(&mut self) -> Option<HeightRange> {
        if self.next >= self.end {
            return None;
        }
        let chunk = HeightRange::new(self.next, self.end.min(self.next.saturating_add(self.step)));
        self.next = chunk.end;
        self.pages += 1;
        Some(chunk)
    }

    /// Number of chunks handed out so far
    pub fn pages_issued(&self) -> u32 {
        self.pages
    }
}

/// Backend-signaled cursor: issues a page for the whole remaining range and
/// continues only while the page reports more data, restarting one past the
/// maximum height observed among the accumulated records.
#[derive(Debug, Clone)]
pub struct SignalCursor {
    current: Option<HeightRange>,
    pages: u32,
}

impl SignalCursor {
    /// Create a cursor over `range`; an empty range yields no pages.
    pub fn new(range: HeightRange) -> Self {
        Self {
            current: (!range.is_empty()).then_some(range),
            pages: 0,
        }
    }

    /// The range to query next, or `None` when the fetch is complete.
    pub fn current(&self) -> Option<HeightRange> {
        self.current
    }

    /// Feed back one completed page. The fetch ends when the backend stops
    /// signaling more, and also when a continuation cannot advance the
    /// cursor forward (no heights observed, or heights at or below the
    /// current start).
    pub fn advance(&mut self, outcome: PageOutcome) {
        self.pages += 1;
        let Some(window) = self.current.take() else {
            return;
        };
        if !outcome.more {
            return;
        }
        let Some(max_height) = outcome.max_height else {
            return;
        };
        let next_start = max_height.saturating_add(1);
        if next_start > window.start && next_start < window.end {
            self.current = Some(HeightRange {
                start: next_start,
                end: window.end,
            });
        }
    }

    /// Number of pages fed back so far
    pub fn pages_issued(&self) -> u32 {
        self.pages
    }
}
