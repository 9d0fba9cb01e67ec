// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Event Binning
//!
//! Aggregation must neither lose nor invent events, whatever the period.

use chrono::{DateTime, TimeZone, Utc};
use event_analytics::aggregation::{bucket, parse, parse_grid};
use event_analytics::cell::total;
use event_analytics::period::Period;
use proptest::prelude::*;

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Instants within 2028 through 2031
fn instant() -> impl Strategy<Value = DateTime<Utc>> {
    (1_830_297_600i64..1_956_528_000).prop_map(|secs| Utc.timestamp_opt(secs, 0).unwrap())
}

fn period() -> impl Strategy<Value = Period> {
    prop::sample::select(Period::ALL.to_vec())
}

fn batch() -> impl Strategy<Value = Vec<DateTime<Utc>>> {
    prop::collection::vec(instant(), 0..80)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: The sum of cell values equals the number of events
    #[test]
    fn prop_total_count_invariant(events in batch(), period in period()) {
        let cells = parse(&events, period);
        prop_assert_eq!(total(&cells), events.len() as u64);
    }

    /// Property: One cell per distinct bucket, aligned and ascending
    #[test]
    fn prop_one_cell_per_bucket(events in batch(), period in period()) {
        let cells = parse(&events, period);

        let mut buckets: Vec<_> = events.iter().map(|ts| period.truncate(*ts)).collect();
        buckets.sort();
        buckets.dedup();

        let indices: Vec<_> = cells.iter().map(|c| c.index).collect();
        prop_assert_eq!(indices, buckets);
        prop_assert!(cells.iter().all(|c| c.value > 0));
    }

    /// Property: Input order does not matter
    #[test]
    fn prop_order_independent(events in batch(), period in period()) {
        let mut reversed = events.clone();
        reversed.reverse();
        prop_assert_eq!(parse(&events, period), parse(&reversed, period));
    }

    /// Property: The grid preserves the count and stays in range
    #[test]
    fn prop_grid_total_and_bounds(events in batch()) {
        let grid = parse_grid(&events);

        prop_assert_eq!(total(&grid), events.len() as u64);
        prop_assert!(grid.iter().all(|c| (1..=7).contains(&c.row) && c.column < 24));
    }

    /// Property: Bucketing a window keeps exactly the events inside it
    #[test]
    fn prop_bucket_counts_window(events in batch(), at in instant(), period in period()) {
        let window = period.initial_range(at);
        let cells = parse(&events, Period::Hour);

        let series = bucket(&cells, &window, period.point_component());

        let inside = events.iter().filter(|ts| window.contains(*ts)).count() as u64;
        prop_assert_eq!(total(&series), inside);
    }
}
