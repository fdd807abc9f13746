//! Tests for the page cursors

use super::*;
use test_case::test_case;

fn collect_chunks(mut cursor: FixedStepCursor) -> Vec<(u64, u64)> {
    let mut chunks = Vec::new();
    while let Some(range) = cursor.next_range() {
        chunks.push((range.start, range.end));
    }
    chunks
}

#[test]
fn test_fixed_step_partitions_range() {
    let cursor = FixedStepCursor::new(HeightRange::new(0, 12_000), 5_000);
    assert_eq!(
        collect_chunks(cursor),
        vec![(0, 5_000), (5_000, 10_000), (10_000, 12_000)]
    );
}

// chunk count is ceil((end - start) / step)
#[test_case(0, 12_000, 5_000 => 3)]
#[test_case(0, 10_000, 5_000 => 2)]
#[test_case(0, 4_999, 5_000 => 1)]
#[test_case(7, 8, 5_000 => 1)]
#[test_case(100, 100, 5_000 => 0)]
#[test_case(0, 15_000, 5_000 => 3)]
fn test_fixed_step_chunk_count(start: u64, end: u64, step: u64) -> usize {
    collect_chunks(FixedStepCursor::new(HeightRange::new(start, end), step)).len()
}

#[test]
fn test_fixed_step_empty_range_yields_nothing() {
    let mut cursor = FixedStepCursor::new(HeightRange::new(500, 500), 5_000);
    assert_eq!(cursor.next_range(), None);
    assert_eq!(cursor.pages_issued(), 0);
}

#[test]
fn test_fixed_step_chunks_are_contiguous() {
    let chunks = collect_chunks(FixedStepCursor::new(HeightRange::new(3, 20_001), 5_000));
    for pair in chunks.windows(2) {
        assert_eq!(pair[0].1, pair[1].0);
    }
    assert_eq!(chunks.first().map(|c| c.0), Some(3));
    assert_eq!(chunks.last().map(|c| c.1), Some(20_001));
}

#[test]
fn test_signal_cursor_advances_past_max_height() {
    // page 1 reports more with max observed height 900: page 2 starts at
    // 901, not 0 and not the end of page 1's nominal range
    let mut cursor = SignalCursor::new(HeightRange::unbounded(0));
    assert_eq!(cursor.current(), Some(HeightRange::unbounded(0)));

    cursor.advance(PageOutcome::more(Some(900)));
    assert_eq!(cursor.current(), Some(HeightRange::unbounded(901)));

    cursor.advance(PageOutcome::more(Some(1_750)));
    assert_eq!(cursor.current(), Some(HeightRange::unbounded(1_751)));

    cursor.advance(PageOutcome::done(Some(2_000)));
    assert_eq!(cursor.current(), None);
    assert_eq!(cursor.pages_issued(), 3);
}

#[test]
fn test_signal_cursor_stops_without_signal() {
    let mut cursor = SignalCursor::new(HeightRange::unbounded(0));
    cursor.advance(PageOutcome::done(Some(42)));
    assert_eq!(cursor.current(), None);
}

#[test]
fn test_signal_cursor_never_regresses() {
    // a continuation whose heights sit at or below the current start cannot
    // advance the cursor; the fetch ends rather than looping or regressing
    let mut cursor = SignalCursor::new(HeightRange::unbounded(1_000));
    cursor.advance(PageOutcome::more(Some(999)));
    assert_eq!(cursor.current(), None);

    let mut cursor = SignalCursor::new(HeightRange::unbounded(0));
    cursor.advance(PageOutcome::more(None));
    assert_eq!(cursor.current(), None);
}

#[test]
fn test_signal_cursor_respects_bounded_end() {
    let mut cursor = SignalCursor::new(HeightRange::new(0, 1_000));
    cursor.advance(PageOutcome::more(Some(999)));
    assert_eq!(cursor.current(), None);
}

#[test]
fn test_signal_cursor_empty_range() {
    let cursor = SignalCursor::new(HeightRange::new(10, 10));
    assert_eq!(cursor.current(), None);
}

#[test]
fn test_height_range_properties() {
    assert!(HeightRange::new(5, 5).is_empty());
    assert!(!HeightRange::new(5, 6).is_empty());
    assert!(HeightRange::unbounded(0).is_unbounded());
    assert!(!HeightRange::new(0, 100).is_unbounded());
}
