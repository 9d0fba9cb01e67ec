// Copyright (c) 2025 - Cowboy AI, Inc.
//! Binning Aggregator
//!
//! Converts a finite batch of timestamped events into period-aligned cells.
//!
//! ```text
//! events ──truncate(timestamp, period)──> buckets ──fold(combine)──> cells
//! ```
//!
//! # Guarantees
//!
//! 1. Exactly one cell per distinct bucket present in the input
//! 2. No zero-filled gaps (use [`bucket`] for a contiguous series)
//! 3. The values of all emitted cells sum to the input measurement total
//! 4. Output is ordered by bucket ascending
//!
//! The 2-D variant [`parse_grid`] keys cells by `(weekday, hour)` and feeds
//! the activity heatmap.

mod matrix;

pub use matrix::{points_from_grid, ChartPoint, Matrix, MatrixError};

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::ops::Range;
use tracing::debug;

use crate::calendar::{self, CalendarUnit};
use crate::cell::{Cell, CellValue, GridCell};
use crate::period::Period;

/// Anything carrying an absolute instant
pub trait Timestamped {
    /// When the item happened
    fn timestamp(&self) -> DateTime<Utc>;
}

impl Timestamped for DateTime<Utc> {
    fn timestamp(&self) -> DateTime<Utc> {
        *self
    }
}

impl<T: Timestamped + ?Sized> Timestamped for &T {
    fn timestamp(&self) -> DateTime<Utc> {
        (**self).timestamp()
    }
}

/// Count events per bucket of `period`
pub fn parse<E: Timestamped>(events: &[E], period: Period) -> Vec<Cell<u64>> {
    parse_with(events, period, |_| 1u64)
}

/// Sum a caller-supplied measurement per bucket of `period`
pub fn parse_with<E, V, F>(events: &[E], period: Period, measure: F) -> Vec<Cell<V>>
where
    E: Timestamped,
    V: CellValue,
    F: Fn(&E) -> V,
{
    let cells = parse_by_unit(events, period.range_component(), measure);
    debug!(
        period = %period,
        events = events.len(),
        cells = cells.len(),
        "Aggregated events into period cells"
    );
    cells
}

/// Sum a measurement per bucket of an arbitrary calendar unit
pub fn parse_by_unit<E, V, F>(events: &[E], unit: CalendarUnit, measure: F) -> Vec<Cell<V>>
where
    E: Timestamped,
    V: CellValue,
    F: Fn(&E) -> V,
{
    let mut groups: BTreeMap<DateTime<Utc>, Cell<V>> = BTreeMap::new();

    for event in events {
        let index = unit.truncate(event.timestamp());
        let cell = Cell::new(index, measure(event));
        groups
            .entry(index)
            .and_modify(|existing| *existing = *existing + cell)
            .or_insert(cell);
    }

    groups.into_values().collect()
}

/// Count events per `(weekday, hour)` coordinate
///
/// Rows are ISO weekdays (Monday = 1 through Sunday = 7); columns are UTC
/// hours 0 through 23.
pub fn parse_grid<E: Timestamped>(events: &[E]) -> Vec<GridCell<u64>> {
    let mut groups: BTreeMap<(u32, u32), GridCell<u64>> = BTreeMap::new();

    for event in events {
        let ts = event.timestamp();
        let cell = GridCell::new(calendar::weekday_number(ts), calendar::hour(ts), 1);
        groups
            .entry(cell.coordinate())
            .and_modify(|existing| *existing = *existing + cell)
            .or_insert(cell);
    }

    debug!(
        events = events.len(),
        cells = groups.len(),
        "Aggregated events into grid cells"
    );
    groups.into_values().collect()
}

/// Contiguous zero-filled series over `range`, one cell per `unit` step
///
/// Each emitted cell starts at its step and sums the cells whose index
/// falls inside `[step, step + 1 unit)`. Output is ordered ascending.
pub fn bucket<V: CellValue>(
    cells: &[Cell<V>],
    range: &Range<DateTime<Utc>>,
    unit: CalendarUnit,
) -> Vec<Cell<V>> {
    let mut result = Vec::new();
    let mut start = range.start;

    while start < range.end {
        let next = unit.add(start, 1);
        if next <= start {
            break;
        }
        let value = cells
            .iter()
            .filter(|cell| (start..next).contains(&cell.index))
            .fold(V::zero(), |sum, cell| sum + cell.value);
        result.push(Cell::new(start, value));
        start = next;
    }

    result
}
