// Copyright (c) 2025 - Cowboy AI, Inc.
//! Activity periods for DAU, WAU and MAU

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::calendar::CalendarUnit;

/// Window over which distinct users are counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityPeriod {
    /// Daily active users
    Daily,
    /// Weekly active users
    Weekly,
    /// Monthly active users
    Monthly,
}

/// Error returned when a string names no activity period
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown activity period: {0}")]
pub struct ParseActivityPeriodError(pub String);

impl ActivityPeriod {
    /// Every activity period, shortest window first
    pub const ALL: [ActivityPeriod; 3] = [Self::Daily, Self::Weekly, Self::Monthly];

    /// Length of the window a user stays counted after being seen
    ///
    /// - daily   → one day
    /// - weekly  → one ISO week
    /// - monthly → one calendar month
    pub fn spread_component(self) -> CalendarUnit {
        match self {
            Self::Daily => CalendarUnit::Day,
            Self::Weekly => CalendarUnit::WeekOfYear,
            Self::Monthly => CalendarUnit::Month,
        }
    }

    /// Unit an activity chart spans
    pub fn range_component(self) -> CalendarUnit {
        CalendarUnit::Month
    }

    /// Unit the points of an activity chart are laid out on
    pub fn point_component(self) -> CalendarUnit {
        CalendarUnit::Day
    }

    /// Month containing `now`
    pub fn initial_range(self, now: DateTime<Utc>) -> Range<DateTime<Utc>> {
        self.range_component().enclosing(now)
    }

    /// One-letter key used in persisted cell keys
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "d",
            Self::Weekly => "w",
            Self::Monthly => "m",
        }
    }

    /// Lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Human-readable title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for ActivityPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ActivityPeriod {
    type Err = ParseActivityPeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "d" | "daily" | "dau" => Ok(Self::Daily),
            "w" | "weekly" | "wau" => Ok(Self::Weekly),
            "m" | "monthly" | "mau" => Ok(Self::Monthly),
            other => Err(ParseActivityPeriodError(other.to_string())),
        }
    }
}
