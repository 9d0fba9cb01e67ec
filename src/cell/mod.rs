// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cell Algebra
//!
//! Cells are coordinate-addressed numeric accumulators. Two cells at the same
//! coordinate combine into one whose value is the sum of both; combining is
//! commutative and associative, and [`CellValue::zero`] is the identity.
//!
//! ```text
//! Cell(t, 2) + Cell(t, 3)            = Cell(t, 5)
//! GridCell(1, 2, 3) + GridCell(1, 2, 4) = GridCell(1, 2, 7)
//! ```
//!
//! - [`Cell`] - one axis, indexed by a bucket start
//! - [`GridCell`] - two axes, row and column
//! - [`PeriodCell`] - an active-user count for one day of a month
//!
//! Combining cells at different coordinates is a programming error and
//! panics. The aggregator only ever combines within groups it formed itself.

mod grid_cell;
mod period_cell;
mod time_cell;

pub use grid_cell::{CellKeyError, GridCell, CELL_KEY_PREFIX};
pub use period_cell::PeriodCell;
pub use time_cell::Cell;

use std::fmt::Debug;
use std::ops::Add;

/// Numeric value carried by a cell
pub trait CellValue: Copy + PartialEq + Debug + Add<Output = Self> + Send + Sync + 'static {
    /// Additive identity
    fn zero() -> Self;
}

macro_rules! impl_cell_value {
    ($($t:ty => $zero:expr),* $(,)?) => {
        $(
            impl CellValue for $t {
                fn zero() -> Self {
                    $zero
                }
            }
        )*
    };
}

impl_cell_value!(
    i32 => 0,
    i64 => 0,
    u32 => 0,
    u64 => 0,
    usize => 0,
    f32 => 0.0,
    f64 => 0.0,
);

/// Values that can be folded together when they describe the same thing
pub trait Combining: Sized {
    /// Whether `other` addresses the same coordinate as `self`
    fn is_duplicate(&self, other: &Self) -> bool;

    /// Combine two duplicates into one
    ///
    /// # Panics
    ///
    /// Panics if `other` is not a duplicate of `self`.
    fn combine(self, other: Self) -> Self;
}

/// Values exposing a numeric measurement
pub trait HasValue {
    /// The measurement type
    type Value: CellValue;

    /// The measurement
    fn value(&self) -> Self::Value;
}

/// Fold `items` so every coordinate appears once, in first-seen order
pub fn merge_duplicates<T, I>(items: I) -> Vec<T>
where
    T: Combining,
    I: IntoIterator<Item = T>,
{
    let mut merged: Vec<T> = Vec::new();
    for item in items {
        match merged.iter().position(|existing| existing.is_duplicate(&item)) {
            Some(index) => {
                let existing = merged.remove(index);
                merged.insert(index, existing.combine(item));
            }
            None => merged.push(item),
        }
    }
    merged
}

/// Sum of every value regardless of coordinate
pub fn total<'a, T, I>(items: I) -> T::Value
where
    T: HasValue + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .fold(T::Value::zero(), |sum, item| sum + item.value())
}
