// Copyright (c) 2025 - Cowboy AI, Inc.
//! Weekly grid matrices
//!
//! A [`Matrix`] is the unit that leaves the device: all events with one name
//! recorded during one ISO week, folded into a weekday/hour grid. Matrices
//! with the same identity combine by merging their cells, which is how
//! partial uploads of the same week reconcile.
//!
//! The flat record form stores each cell under its key:
//!
//! ```text
//! { "name": "app_open", "date": "2030-03-04T00:00:00Z", "cell_1_09": 2, "cell_7_23": 1 }
//! ```

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::parse_grid;
use crate::calendar::CalendarUnit;
use crate::cell::{merge_duplicates, CellKeyError, CellValue, Combining, GridCell, CELL_KEY_PREFIX};
use crate::events::Event;

/// Errors raised while building or decoding a matrix
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// A property needed to group the batch is missing
    #[error("Missing property: {0}. Cannot group objects.")]
    MissingProperty(String),

    /// A record field is missing or has the wrong type
    #[error("Missing {0} field")]
    MissingField(String),

    /// The record has no cell keys
    #[error("Missing cells")]
    MissingCells,

    /// A cell value is not numeric
    #[error("Invalid cells. Expected numeric values, found {0}")]
    InvalidCells(String),

    /// A cell value has no numeric record form
    #[error("Cell {0} cannot be encoded")]
    UnencodableCell(String),

    /// A cell key could not be parsed
    #[error(transparent)]
    CellKey(#[from] CellKeyError),
}

/// Named weekly batch of grid cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<V> {
    /// Event name
    pub name: String,
    /// Start of the ISO week the cells belong to
    pub date: DateTime<Utc>,
    /// Optional grouping category
    pub category: Option<String>,
    /// Weekday/hour cells
    pub cells: Vec<GridCell<V>>,
}

impl Matrix<u64> {
    /// Fold a batch of events sharing one name and week
    ///
    /// The name and week are taken from the first event; callers group the
    /// batch beforehand.
    pub fn of_batch(batch: &[Event]) -> Result<Self, MatrixError> {
        let first = batch
            .first()
            .ok_or_else(|| MatrixError::MissingProperty("name".to_string()))?;

        Ok(Self {
            name: first.name.clone(),
            date: CalendarUnit::WeekOfYear.truncate(first.timestamp),
            category: None,
            cells: parse_grid(batch),
        })
    }
}

impl<V: CellValue> Matrix<V> {
    /// Flat record form
    ///
    /// Fails when a cell value has no JSON number form, such as a NaN.
    pub fn to_record(&self) -> Result<Map<String, Value>, MatrixError>
    where
        V: Serialize,
    {
        let mut record = Map::new();
        record.insert("name".to_string(), Value::String(self.name.clone()));
        record.insert("date".to_string(), Value::String(self.date.to_rfc3339()));
        if let Some(category) = &self.category {
            record.insert("category".to_string(), Value::String(category.clone()));
        }
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
        let name = record
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| MatrixError::MissingField("name".to_string()))?
            .to_string();
        let date = record
            .get("date")
            .and_then(Value::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .ok_or_else(|| MatrixError::MissingField("date".to_string()))?
            .with_timezone(&Utc);
        let category = record
            .get("category")
            .and_then(Value::as_str)
            .map(str::to_string);

        let mut cells = Vec::new();
        for (key, value) in record.iter().filter(|(k, _)| k.starts_with(CELL_KEY_PREFIX)) {
            let value: V = serde_json::from_value(value.clone())
                .map_err(|_| MatrixError::InvalidCells(value.to_string()))?;
            cells.push(GridCell::from_key(key, value)?);
        }
        if cells.is_empty() {
            return Err(MatrixError::MissingCells);
        }
        cells.sort_by_key(GridCell::coordinate);

        Ok(Self {
            name,
            date,
            category,
            cells,
        })
    }
}

impl<V: CellValue> Combining for Matrix<V> {
    fn is_duplicate(&self, other: &Self) -> bool {
        self.date == other.date && self.name == other.name && self.category == other.category
    }

    fn combine(self, other: Self) -> Self {
        assert!(self.is_duplicate(&other), "matrix identities must match");
        let mut cells = merge_duplicates(self.cells.into_iter().chain(other.cells));
        cells.sort_by_key(GridCell::coordinate);
        Self {
            name: self.name,
            date: self.date,
            category: self.category,
            cells,
        }
    }
}

impl<V> fmt::Display for Matrix<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Matrix({}, {}, {} cells)",
            self.name,
            self.date.to_rfc3339(),
            self.cells.len()
        )
    }
}

/// Dated measurement ready for plotting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint<V> {
    /// Point instant
    pub date: DateTime<Utc>,
    /// Measurement
    pub count: V,
}

/// Expand a weekly grid matrix into dated points
///
/// Each cell lands at `week start + (row - 1) days + column hours`. Output is
/// ordered by date.
pub fn points_from_grid<V: CellValue>(matrix: &Matrix<V>) -> Vec<ChartPoint<V>> {
    let mut points: Vec<_> = matrix
        .cells
        .iter()
        .map(|cell| ChartPoint {
            date: matrix.date
                + TimeDelta::days(i64::from(cell.row) - 1)
                + TimeDelta::hours(i64::from(cell.column)),
            count: cell.value,
        })
        .collect();
    points.sort_by_key(|point| point.date);
    points
}
