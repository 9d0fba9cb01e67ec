// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for the Cell Algebra
//!
//! Combining cells at one coordinate is a commutative monoid over the value
//! type with the zero cell as identity.

use chrono::{DateTime, TimeZone, Utc};
use event_analytics::cell::{merge_duplicates, total, Cell, Combining, GridCell};
use proptest::prelude::*;

// ============================================================================
// Property Test Strategies
// ============================================================================

fn index() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..4_000_000_000).prop_map(|secs| Utc.timestamp_opt(secs, 0).unwrap())
}

fn value() -> impl Strategy<Value = u64> {
    0u64..1_000_000
}

fn coordinate() -> impl Strategy<Value = (u32, u32)> {
    (1u32..=7, 0u32..24)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Combine is commutative
    #[test]
    fn prop_cell_combine_commutative(at in index(), a in value(), b in value()) {
        let left = Cell::new(at, a).combine(Cell::new(at, b));
        let right = Cell::new(at, b).combine(Cell::new(at, a));

        prop_assert_eq!(left, right);
        prop_assert_eq!(left.value, a + b);
    }

    /// Property: Combine is associative
    #[test]
    fn prop_grid_combine_associative(
        (row, column) in coordinate(),
        a in value(),
        b in value(),
        c in value(),
    ) {
        let cell = |v| GridCell::new(row, column, v);

        let left = (cell(a) + cell(b)) + cell(c);
        let right = cell(a) + (cell(b) + cell(c));

        prop_assert_eq!(left, right);
    }

    /// Property: Zero is the identity
    #[test]
    fn prop_zero_is_identity(at in index(), a in value()) {
        prop_assert_eq!(Cell::new(at, a) + Cell::zero(at), Cell::new(at, a));
        prop_assert_eq!(Cell::zero(at) + Cell::new(at, a), Cell::new(at, a));
    }

    /// Property: Merging duplicates keeps the total and leaves unique coordinates
    #[test]
    fn prop_merge_keeps_total(cells in prop::collection::vec((coordinate(), value()), 0..60)) {
        let cells: Vec<GridCell<u64>> = cells
            .into_iter()
            .map(|((row, column), v)| GridCell::new(row, column, v))
            .collect();

        let merged = merge_duplicates(cells.clone());

        prop_assert_eq!(total(&merged), total(&cells));
        for (i, a) in merged.iter().enumerate() {
            for b in &merged[i + 1..] {
                prop_assert_ne!(a.coordinate(), b.coordinate());
            }
        }
    }
}
