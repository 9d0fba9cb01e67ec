// Copyright (c) 2025 - Cowboy AI, Inc.
//! Two-axis cell addressed by row and column
//!
//! Grid cells back the weekday/hour heatmap. When a grid is persisted as a
//! flat record each cell is stored under a key of the form
//! `cell_<row>_<column>` with the column zero-padded to two digits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

use super::{CellValue, Combining, HasValue};

/// Prefix shared by every persisted cell key
pub const CELL_KEY_PREFIX: &str = "cell_";

/// Errors raised while parsing a persisted cell key
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CellKeyError {
    /// Key does not have the `cell_<a>_<b>` shape
    #[error("Invalid cell key format: {0}")]
    InvalidFormat(String),

    /// Row segment is not a number
    #[error("Invalid row index in cell key: {0}")]
    InvalidRow(String),

    /// Column segment is not a number
    #[error("Invalid column index in cell key: {0}")]
    InvalidColumn(String),

    /// Period segment names no activity period
    #[error("Invalid activity period in cell key: {0}")]
    InvalidPeriod(String),

    /// Day segment is not a one-based day number
    #[error("Invalid day in cell key: {0}")]
    InvalidDay(String),
}

/// Accumulated value at one row/column coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell<V> {
    /// Row coordinate
    pub row: u32,
    /// Column coordinate
    pub column: u32,
    /// Accumulated measurement
    pub value: V,
}

impl<V: CellValue> GridCell<V> {
    /// Create a cell
    pub fn new(row: u32, column: u32, value: V) -> Self {
        Self { row, column, value }
    }

    /// Identity cell at `(row, column)`
    pub fn zero(row: u32, column: u32) -> Self {
        Self::new(row, column, V::zero())
    }

    /// `(row, column)`, ordered row-major
    pub fn coordinate(&self) -> (u32, u32) {
        (self.row, self.column)
    }

    /// Persisted key, e.g. `cell_3_07`
    pub fn key(&self) -> String {
        format!("{CELL_KEY_PREFIX}{}_{:02}", self.row, self.column)
    }

    /// Rebuild a cell from its persisted key and value
    pub fn from_key(key: &str, value: V) -> Result<Self, CellKeyError> {
        let parts: Vec<&str> = key.split('_').collect();
        let [prefix, row, column] = parts.as_slice() else {
            return Err(CellKeyError::InvalidFormat(key.to_string()));
        };
        if format!("{prefix}_") != CELL_KEY_PREFIX {
            return Err(CellKeyError::InvalidFormat(key.to_string()));
        }

        let row = row
            .parse()
            .map_err(|_| CellKeyError::InvalidRow(key.to_string()))?;
        let column = column
            .parse()
            .map_err(|_| CellKeyError::InvalidColumn(key.to_string()))?;

        Ok(Self::new(row, column, value))
    }
}

impl<V: CellValue> Combining for GridCell<V> {
    fn is_duplicate(&self, other: &Self) -> bool {
        self.row == other.row && self.column == other.column
    }

    fn combine(self, other: Self) -> Self {
        assert_eq!(self.row, other.row, "row indices must match");
        assert_eq!(self.column, other.column, "column indices must match");
        Self::new(self.row, self.column, self.value + other.value)
    }
}

impl<V: CellValue> Add for GridCell<V> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.combine(rhs)
    }
}

impl<V: CellValue> HasValue for GridCell<V> {
    type Value = V;

    fn value(&self) -> V {
        self.value
    }
}

impl<V: fmt::Debug> fmt::Display for GridCell<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cell(row: {}, column: {}, value: {:?})",
            self.row, self.column, self.value
        )
    }
}
