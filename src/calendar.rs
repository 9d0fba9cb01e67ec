// Copyright (c) 2025 - Cowboy AI, Inc.
//! Fixed UTC Calendar
//!
//! All truncation and stepping in this crate goes through this module so that
//! bucket boundaries never depend on the device locale or time zone.
//!
//! - Weeks start on Monday (ISO 8601)
//! - Month and year steps are calendar-aware
//! - Arithmetic saturates at the bounds chrono can represent

use chrono::{DateTime, Datelike, Months, NaiveTime, TimeDelta, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Calendar units used for truncation and window stepping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarUnit {
    /// One minute
    Minute,
    /// One hour
    Hour,
    /// One day
    Day,
    /// One ISO week, Monday to Sunday
    WeekOfYear,
    /// One calendar month
    Month,
    /// One calendar year
    Year,
}

impl CalendarUnit {
    /// Start of the unit containing `ts`
    ///
    /// Zeroes every smaller component. For [`CalendarUnit::WeekOfYear`] the
    /// result is the Monday of the ISO week.
    pub fn truncate(self, ts: DateTime<Utc>) -> DateTime<Utc> {
        let date = ts.date_naive();
        let midnight = date.and_time(NaiveTime::MIN).and_utc();
        let back = |days: u32| {
            midnight
                .checked_sub_signed(TimeDelta::days(i64::from(days)))
                .unwrap_or(DateTime::<Utc>::MIN_UTC)
        };

        match self {
            Self::Minute => {
                midnight
                    + TimeDelta::hours(i64::from(ts.hour()))
                    + TimeDelta::minutes(i64::from(ts.minute()))
            }
            Self::Hour => midnight + TimeDelta::hours(i64::from(ts.hour())),
            Self::Day => midnight,
            Self::WeekOfYear => back(date.weekday().num_days_from_monday()),
            Self::Month => back(date.day0()),
            Self::Year => back(date.ordinal0()),
        }
    }

    /// Step `ts` by `value` units; negative values step backwards
    pub fn add(self, ts: DateTime<Utc>, value: i32) -> DateTime<Utc> {
        let stepped = match self {
            Self::Minute => ts.checked_add_signed(TimeDelta::minutes(i64::from(value))),
            Self::Hour => ts.checked_add_signed(TimeDelta::hours(i64::from(value))),
            Self::Day => ts.checked_add_signed(TimeDelta::days(i64::from(value))),
            Self::WeekOfYear => ts.checked_add_signed(TimeDelta::weeks(i64::from(value))),
            Self::Month => add_months(ts, i64::from(value)),
            Self::Year => add_months(ts, i64::from(value) * 12),
        };

        stepped.unwrap_or(if value < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
    }

    /// Move both bounds of `range` by `value` units
    pub fn shift(self, range: &Range<DateTime<Utc>>, value: i32) -> Range<DateTime<Utc>> {
        self.add(range.start, value)..self.add(range.end, value)
    }

    /// Half-open range covering the unit that contains `ts`
    pub fn enclosing(self, ts: DateTime<Utc>) -> Range<DateTime<Utc>> {
        let start = self.truncate(ts);
        start..self.add(start, 1)
    }
}

fn add_months(ts: DateTime<Utc>, months: i64) -> Option<DateTime<Utc>> {
    let magnitude = u32::try_from(months.unsigned_abs()).ok()?;
    if months >= 0 {
        ts.checked_add_months(Months::new(magnitude))
    } else {
        ts.checked_sub_months(Months::new(magnitude))
    }
}

/// ISO weekday number, Monday = 1 through Sunday = 7
pub fn weekday_number(ts: DateTime<Utc>) -> u32 {
    ts.weekday().number_from_monday()
}

/// Hour of day in UTC, 0 through 23
pub fn hour(ts: DateTime<Utc>) -> u32 {
    ts.hour()
}
