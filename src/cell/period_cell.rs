// Copyright (c) 2025 - Cowboy AI, Inc.
//! Active-user cell for one day of a month
//!
//! Persisted under `cell_<period>_<day>` where the period is its one-letter
//! name and the day is one-based and zero-padded, so day 0 of the month is
//! stored as `cell_d_01`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

use super::{CellKeyError, CellValue, Combining, HasValue, CELL_KEY_PREFIX};
use crate::activity::ActivityPeriod;

/// Accumulated value for one activity period and day offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodCell<V> {
    /// Window the count was taken over
    pub period: ActivityPeriod,
    /// Days since the start of the month
    pub day: u32,
    /// Accumulated measurement
    pub value: V,
}

impl<V: CellValue> PeriodCell<V> {
    /// Create a cell
    pub fn new(period: ActivityPeriod, day: u32, value: V) -> Self {
        Self { period, day, value }
    }

    /// Identity cell for `(period, day)`
    pub fn zero(period: ActivityPeriod, day: u32) -> Self {
        Self::new(period, day, V::zero())
    }

    /// `(period, day)`, ordered by period then day
    pub fn coordinate(&self) -> (ActivityPeriod, u32) {
        (self.period, self.day)
    }

    /// Persisted key, e.g. `cell_w_05` for day 4
    pub fn key(&self) -> String {
        format!("{CELL_KEY_PREFIX}{}_{:02}", self.period.as_str(), self.day + 1)
    }

    /// Rebuild a cell from its persisted key and value
    pub fn from_key(key: &str, value: V) -> Result<Self, CellKeyError> {
        let parts: Vec<&str> = key.split('_').collect();
        let [prefix, period, day] = parts.as_slice() else {
            return Err(CellKeyError::InvalidFormat(key.to_string()));
        };
        if format!("{prefix}_") != CELL_KEY_PREFIX {
            return Err(CellKeyError::InvalidFormat(key.to_string()));
        }

        let period = period
            .parse()
            .map_err(|_| CellKeyError::InvalidPeriod(key.to_string()))?;
        let day = day
            .parse::<u32>()
            .ok()
            .and_then(|day| day.checked_sub(1))
            .ok_or_else(|| CellKeyError::InvalidDay(key.to_string()))?;

        Ok(Self::new(period, day, value))
    }
}

impl<V: CellValue> Combining for PeriodCell<V> {
    fn is_duplicate(&self, other: &Self) -> bool {
        self.period == other.period && self.day == other.day
    }

    fn combine(self, other: Self) -> Self {
        assert_eq!(self.period, other.period, "activity periods must match");
        assert_eq!(self.day, other.day, "days must match");
        Self::new(self.period, self.day, self.value + other.value)
    }
}

impl<V: CellValue> Add for PeriodCell<V> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.combine(rhs)
    }
}

impl<V: CellValue> HasValue for PeriodCell<V> {
    type Value = V;

    fn value(&self) -> V {
        self.value
    }
}

impl<V: fmt::Display> fmt::Display for PeriodCell<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.period, self.day, self.value)
    }
}
