// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Chart Extent Navigation

use chrono::{DateTime, TimeZone, Utc};
use event_analytics::extent::ChartExtent;
use event_analytics::period::Period;
use proptest::prelude::*;

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Instants within 2028 through 2031
fn reference() -> impl Strategy<Value = DateTime<Utc>> {
    (1_830_297_600i64..1_956_528_000).prop_map(|secs| Utc.timestamp_opt(secs, 0).unwrap())
}

fn navigable_period() -> impl Strategy<Value = Period> {
    prop::sample::select(vec![Period::Hour, Period::Day, Period::Week, Period::Month])
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: Left navigation stops exactly at the year boundary
    ///
    /// Every reachable window starts inside the current year, and the
    /// window beyond the last reachable one would not.
    #[test]
    fn prop_left_boundary_exact(now in reference(), period in navigable_period()) {
        let year_start = Period::Year.initial_range(now).start;
        let mut extent = ChartExtent::with_reference(period, now);

        while extent.is_left_enabled() {
            extent.move_left();
            prop_assert!(extent.domain().start >= year_start);
        }

        let beyond = period.range_component().shift(extent.domain(), -1);
        prop_assert!(beyond.start < year_start);
    }

    /// Property: Left then right is the identity on aligned windows
    #[test]
    fn prop_left_right_inverse(now in reference(), period in navigable_period(), steps in 0usize..30) {
        let mut extent = ChartExtent::with_reference(period, now);
        for _ in 0..steps {
            extent.move_left();
        }
        for _ in 0..steps {
            extent.move_right();
        }

        prop_assert_eq!(extent.domain().clone(), period.initial_range(now));
    }

    /// Property: Right is enabled exactly when away from the latest window
    #[test]
    fn prop_right_enablement(now in reference(), period in navigable_period(), steps in 1usize..30) {
        let mut extent = ChartExtent::with_reference(period, now);
        prop_assert!(!extent.is_right_enabled());

        for _ in 0..steps {
            extent.move_left();
            prop_assert!(extent.is_right_enabled());
        }

        extent.move_right_edge();
        prop_assert!(!extent.is_right_enabled());
    }

    /// Property: Every window is aligned to its period
    #[test]
    fn prop_windows_stay_aligned(now in reference(), period in navigable_period(), steps in 0usize..30) {
        let mut extent = ChartExtent::with_reference(period, now);
        for _ in 0..steps {
            extent.move_left();
        }

        let domain = extent.domain().clone();
        prop_assert_eq!(period.truncate(domain.start), domain.start);
        prop_assert_eq!(period.range_component().add(domain.start, 1), domain.end);
    }
}
