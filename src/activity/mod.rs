// Copyright (c) 2025 - Cowboy AI, Inc.
//! Active Users
//!
//! Distinct-user counts per day of a month, for each [`ActivityPeriod`].
//! A user seen on day `D` stays counted for every day in
//! `[D, D + spread)`, so the value at day `X` is the number of distinct users
//! seen in the spread window ending on `X`:
//!
//! ```text
//! seen(user, D) ──spread──> days D..D+spread ──distinct──> PeriodCell(period, X, users)
//! ```
//!
//! Events without a user id are not counted.

mod matrix;
mod period;

pub use matrix::{ActivityMatrix, ACTIVITY_MATRIX_NAME};
pub use period::{ActivityPeriod, ParseActivityPeriodError};

use chrono::{DateTime, Datelike, Utc};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;
use uuid::Uuid;

use crate::calendar::CalendarUnit;
use crate::cell::PeriodCell;
use crate::events::Event;

/// Distinct users per activity period and day of the month containing `month`
///
/// Only days with at least one active user get a cell. Cells are ordered by
/// period, then day.
pub fn active_users(events: &[Event], month: DateTime<Utc>) -> Vec<PeriodCell<u64>> {
    let month = CalendarUnit::Month.enclosing(month);
    let mut cells = Vec::new();

    for period in ActivityPeriod::ALL {
        let mut users: BTreeMap<u32, HashSet<Uuid>> = BTreeMap::new();

        for event in events {
            let Some(user) = event.user_id else {
                continue;
            };
            let seen = CalendarUnit::Day.truncate(event.timestamp);
            let limit = period.spread_component().add(seen, 1);

            let mut day = seen.max(month.start);
            while day < limit && day < month.end {
                users.entry(day.day0()).or_default().insert(user);
                let next = CalendarUnit::Day.add(day, 1);
                if next <= day {
                    break;
                }
                day = next;
            }
        }

        cells.extend(
            users
                .into_iter()
                .map(|(day, users)| PeriodCell::new(period, day, users.len() as u64)),
        );
    }

    debug!(
        month = %month.start.format("%Y-%m"),
        events = events.len(),
        cells = cells.len(),
        "Counted active users"
    );
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Level;
    use chrono::{TimeDelta, TimeZone};
    use pretty_assertions::assert_eq;

    fn march() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 3, 1, 0, 0, 0).unwrap()
    }

    fn user(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    fn seen(user_id: Uuid, at: DateTime<Utc>) -> Event {
        let mut event = Event::new("app_open", Level::Info, at);
        event.user_id = Some(user_id);
        event
    }

    fn cells_for(cells: &[PeriodCell<u64>], period: ActivityPeriod) -> Vec<(u32, u64)> {
        cells
            .iter()
            .filter(|cell| cell.period == period)
            .map(|cell| (cell.day, cell.value))
            .collect()
    }

    #[test]
    fn test_daily_counts_distinct_users() {
        let day = march() + TimeDelta::days(4);
        let events = [
            seen(user(1), day + TimeDelta::hours(8)),
            seen(user(1), day + TimeDelta::hours(9)),
            seen(user(2), day + TimeDelta::hours(23)),
            seen(user(1), day + TimeDelta::days(1)),
        ];

        let cells = active_users(&events, march());

        assert_eq!(cells_for(&cells, ActivityPeriod::Daily), vec![(4, 2), (5, 1)]);
    }

    #[test]
    fn test_weekly_window_trails_each_day() {
        // Tuesday 5 March and Thursday 7 March
        let events = [
            seen(user(1), march() + TimeDelta::days(4)),
            seen(user(2), march() + TimeDelta::days(6)),
        ];

        let weekly = cells_for(&active_users(&events, march()), ActivityPeriod::Weekly);

        // user 1 is counted through 11 March, user 2 through 13 March
        let expected: Vec<(u32, u64)> = (4..=12)
            .map(|day| {
                let users = u64::from(day <= 10) + u64::from(day >= 6);
                (day, users)
            })
            .collect();
        assert_eq!(weekly, expected);
    }

    #[test]
    fn test_monthly_window_stops_at_month_end() {
        let events = [seen(user(1), march() + TimeDelta::days(29))];

        let monthly = cells_for(&active_users(&events, march()), ActivityPeriod::Monthly);

        assert_eq!(monthly, vec![(29, 1), (30, 1)]);
    }

    #[test]
    fn test_activity_before_the_month_carries_over() {
        // 25 February stays counted monthly until 25 March
        let events = [seen(user(3), march() - TimeDelta::days(4))];

        let cells = active_users(&events, march() + TimeDelta::days(10));

        assert!(cells_for(&cells, ActivityPeriod::Daily).is_empty());
        assert_eq!(cells_for(&cells, ActivityPeriod::Weekly), vec![(0, 1), (1, 1), (2, 1)]);
        assert_eq!(cells_for(&cells, ActivityPeriod::Monthly).len(), 24);
    }

    #[test]
    fn test_anonymous_events_are_ignored() {
        let events = [Event::new("app_open", Level::Info, march())];
        assert!(active_users(&events, march()).is_empty());
    }

    #[test]
    fn test_cells_ordered_by_period_then_day() {
        let events = [
            seen(user(1), march() + TimeDelta::days(2)),
            seen(user(2), march()),
        ];

        let cells = active_users(&events, march());

        let mut sorted = cells.clone();
        sorted.sort_by_key(PeriodCell::coordinate);
        assert_eq!(cells, sorted);
        assert_eq!(cells[0], PeriodCell::new(ActivityPeriod::Daily, 0, 1));
    }
}
