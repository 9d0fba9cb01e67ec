// Copyright (c) 2025 - Cowboy AI, Inc.
//! Period Model
//!
//! The closed set of calendar granularities a chart can be viewed at. Each
//! period owns the calendar unit that one window spans (and is stepped by),
//! the finer unit its points are laid out on, and the window that contains
//! "now".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::calendar::CalendarUnit;

/// Calendar granularity of a chart window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// One hour window
    Hour,
    /// One day window
    Day,
    /// One ISO week window
    Week,
    /// One calendar month window
    Month,
    /// One calendar year window
    Year,
}

/// Error returned when a string names no period
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown period: {0}")]
pub struct ParsePeriodError(pub String);

impl Period {
    /// Every period, finest first
    pub const ALL: [Period; 5] = [
        Period::Hour,
        Period::Day,
        Period::Week,
        Period::Month,
        Period::Year,
    ];

    /// Unit a window spans and is moved by
    pub fn range_component(self) -> CalendarUnit {
        match self {
            Self::Hour => CalendarUnit::Hour,
            Self::Day => CalendarUnit::Day,
            Self::Week => CalendarUnit::WeekOfYear,
            Self::Month => CalendarUnit::Month,
            Self::Year => CalendarUnit::Year,
        }
    }

    /// Unit the points inside one window are laid out on
    ///
    /// - hour  → minutes
    /// - day   → hours (00 | 01 | … | 23)
    /// - week  → days (Mon | Tue | … | Sun)
    /// - month → days (1 | 2 | … | 31)
    /// - year  → months (Jan | Feb | … | Dec)
    pub fn point_component(self) -> CalendarUnit {
        match self {
            Self::Hour => CalendarUnit::Minute,
            Self::Day => CalendarUnit::Hour,
            Self::Week | Self::Month => CalendarUnit::Day,
            Self::Year => CalendarUnit::Month,
        }
    }

    /// Bucket start of `ts` at this granularity
    pub fn truncate(self, ts: DateTime<Utc>) -> DateTime<Utc> {
        self.range_component().truncate(ts)
    }

    /// Most recent window: `[truncate(now), truncate(now) + 1 unit)`
    pub fn initial_range(self, now: DateTime<Utc>) -> Range<DateTime<Utc>> {
        self.range_component().enclosing(now)
    }

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl Default for Period {
    fn default() -> Self {
        Self::Week
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hour" | "hourly" => Ok(Self::Hour),
            "day" | "daily" | "today" => Ok(Self::Day),
            "week" | "weekly" => Ok(Self::Week),
            "month" | "monthly" => Ok(Self::Month),
            "year" | "yearly" => Ok(Self::Year),
            other => Err(ParsePeriodError(other.to_string())),
        }
    }
}
