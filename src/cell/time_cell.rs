// Copyright (c) 2025 - Cowboy AI, Inc.
//! One-axis cell indexed by a bucket start

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

use super::{CellValue, Combining, HasValue};

/// Accumulated value for one period-aligned bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell<V> {
    /// Bucket start
    pub index: DateTime<Utc>,
    /// Accumulated measurement
    pub value: V,
}

impl<V: CellValue> Cell<V> {
    /// Create a cell
    pub fn new(index: DateTime<Utc>, value: V) -> Self {
        Self { index, value }
    }

    /// Identity cell for `index`
    pub fn zero(index: DateTime<Utc>) -> Self {
        Self::new(index, V::zero())
    }
}

impl<V: CellValue> Combining for Cell<V> {
    fn is_duplicate(&self, other: &Self) -> bool {
        self.index == other.index
    }

    fn combine(self, other: Self) -> Self {
        assert_eq!(self.index, other.index, "cell indices must match");
        Self::new(self.index, self.value + other.value)
    }
}

impl<V: CellValue> Add for Cell<V> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.combine(rhs)
    }
}

impl<V: CellValue> HasValue for Cell<V> {
    type Value = V;

    fn value(&self) -> V {
        self.value
    }
}

impl<V: fmt::Debug> fmt::Display for Cell<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?}", self.index.to_rfc3339(), self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn bucket() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 3, 4, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_cell_addition() {
        let a = Cell::new(bucket(), 3);
        let b = Cell::new(bucket(), 4);
        assert_eq!(a + b, Cell::new(bucket(), 7));
    }

    #[test]
    fn test_zero_is_identity() {
        let a = Cell::new(bucket(), 9u64);
        assert_eq!(a + Cell::zero(bucket()), a);
        assert_eq!(Cell::zero(bucket()) + a, a);
    }

    #[test]
    #[should_panic(expected = "cell indices must match")]
    fn test_mismatched_indices_panic() {
        let later = bucket() + chrono::TimeDelta::hours(1);
        let _ = Cell::new(bucket(), 1) + Cell::new(later, 1);
    }

    #[test]
    fn test_display() {
        let cell = Cell::new(bucket(), 2);
        assert_eq!(cell.to_string(), "2030-03-04T00:00:00+00:00: 2");
    }
}
