// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Active-User Windows
//!
//! Longer windows never count fewer users than shorter ones on the same day.

use chrono::{DateTime, TimeZone, Utc};
use event_analytics::activity::{active_users, ActivityPeriod};
use event_analytics::cell::PeriodCell;
use event_analytics::events::{Event, Level};
use proptest::prelude::*;
use std::collections::HashSet;
use uuid::Uuid;

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Instants within February through April 2030
fn instant() -> impl Strategy<Value = DateTime<Utc>> {
    (1_896_134_400i64..1_903_824_000).prop_map(|secs| Utc.timestamp_opt(secs, 0).unwrap())
}

fn sighting() -> impl Strategy<Value = Event> {
    (0u128..8, instant()).prop_map(|(user, at)| {
        let mut event = Event::new("app_open", Level::Info, at);
        event.user_id = Some(Uuid::from_u128(user));
        event
    })
}

fn sightings() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(sighting(), 0..40)
}

fn march() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 3, 1, 0, 0, 0).unwrap()
}

fn count_on(cells: &[PeriodCell<u64>], period: ActivityPeriod, day: u32) -> u64 {
    cells
        .iter()
        .find(|cell| cell.period == period && cell.day == day)
        .map_or(0, |cell| cell.value)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: daily <= weekly <= monthly on every day of the month
    #[test]
    fn prop_windows_are_nested(events in sightings()) {
        let cells = active_users(&events, march());

        for day in 0..31 {
            let daily = count_on(&cells, ActivityPeriod::Daily, day);
            let weekly = count_on(&cells, ActivityPeriod::Weekly, day);
            let monthly = count_on(&cells, ActivityPeriod::Monthly, day);
            prop_assert!(daily <= weekly, "day {}: {} > {}", day, daily, weekly);
            prop_assert!(weekly <= monthly, "day {}: {} > {}", day, weekly, monthly);
        }
    }

    /// Property: No day counts more users than were ever seen
    #[test]
    fn prop_counts_bounded_by_users(events in sightings()) {
        let users: HashSet<_> = events.iter().filter_map(|e| e.user_id).collect();
        let cells = active_users(&events, march());

        prop_assert!(cells.iter().all(|cell| cell.value <= users.len() as u64));
        prop_assert!(cells.iter().all(|cell| cell.value > 0 && cell.day < 31));
    }
}
