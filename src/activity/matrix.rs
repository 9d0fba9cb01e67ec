// Copyright (c) 2025 - Cowboy AI, Inc.
//! Monthly active-user matrices
//!
//! One [`ActivityMatrix`] holds the DAU, WAU and MAU cells for one month.
//! Matrices for the same month combine by summing cells, which is how counts
//! from separate installations reconcile. The flat record form mirrors the
//! grid matrix:
//!
//! ```text
//! { "name": "active_users", "date": "2030-03-01T00:00:00Z", "cell_d_05": 2, "cell_m_05": 9 }
//! ```

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::{active_users, ActivityPeriod};
use crate::aggregation::{ChartPoint, MatrixError};
use crate::calendar::CalendarUnit;
use crate::cell::{merge_duplicates, CellValue, Combining, PeriodCell, CELL_KEY_PREFIX};
use crate::events::Event;

/// Record name of every activity matrix
pub const ACTIVITY_MATRIX_NAME: &str = "active_users";

/// Active-user cells for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityMatrix<V> {
    /// Start of the month
    pub date: DateTime<Utc>,
    /// Cells for every activity period
    pub cells: Vec<PeriodCell<V>>,
}

impl ActivityMatrix<u64> {
    /// Count the active users of the month containing `month`
    pub fn of_events(events: &[Event], month: DateTime<Utc>) -> Self {
        Self {
            date: CalendarUnit::Month.truncate(month),
            cells: active_users(events, month),
        }
    }
}

impl<V: CellValue> ActivityMatrix<V> {
    /// Dated points for `period`, one per cell at `date + day` days
    pub fn points(&self, period: ActivityPeriod) -> Vec<ChartPoint<V>> {
        let mut points: Vec<_> = self
            .cells
            .iter()
            .filter(|cell| cell.period == period)
            .map(|cell| ChartPoint {
                date: self.date + TimeDelta::days(i64::from(cell.day)),
                count: cell.value,
            })
            .collect();
        points.sort_by_key(|point| point.date);
        points
    }

    /// Flat record form
    pub fn to_record(&self) -> Result<Map<String, Value>, MatrixError>
    where
        V: Serialize,
    {
        let mut record = Map::new();
        record.insert("name".to_string(), Value::from(ACTIVITY_MATRIX_NAME));
        record.insert("date".to_string(), Value::String(self.date.to_rfc3339()));
        for cell in &self.cells {
            let value = serde_json::to_value(cell.value)
                .ok()
                .filter(Value::is_number)
                .ok_or_else(|| MatrixError::UnencodableCell(cell.key()))?;
            record.insert(cell.key(), value);
        }
        Ok(record)
    }

    /// Decode the flat record form
    pub fn from_record(record: &Map<String, Value>) -> Result<Self, MatrixError>
    where
        V: for<'de> Deserialize<'de>,
    {
        let date = record
            .get("date")
            .and_then(Value::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .ok_or_else(|| MatrixError::MissingField("date".to_string()))?
            .with_timezone(&Utc);

        let mut cells = Vec::new();
        for (key, value) in record.iter().filter(|(k, _)| k.starts_with(CELL_KEY_PREFIX)) {
            let value: V = serde_json::from_value(value.clone())
                .map_err(|_| MatrixError::InvalidCells(value.to_string()))?;
            cells.push(PeriodCell::from_key(key, value)?);
        }
        if cells.is_empty() {
            return Err(MatrixError::MissingCells);
        }
        cells.sort_by_key(PeriodCell::coordinate);

        Ok(Self { date, cells })
    }
}

impl<V: CellValue> Combining for ActivityMatrix<V> {
    fn is_duplicate(&self, other: &Self) -> bool {
        self.date == other.date
    }

    fn combine(self, other: Self) -> Self {
        assert!(self.is_duplicate(&other), "activity months must match");
        let mut cells = merge_duplicates(self.cells.into_iter().chain(other.cells));
        cells.sort_by_key(PeriodCell::coordinate);
        Self {
            date: self.date,
            cells,
        }
    }
}

impl<V> fmt::Display for ActivityMatrix<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ActivityMatrix({}, {} cells)",
            self.date.format("%Y-%m"),
            self.cells.len()
        )
    }
}
