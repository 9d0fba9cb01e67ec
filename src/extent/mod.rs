// Copyright (c) 2025 - Cowboy AI, Inc.
//! Chart Extent
//!
//! The visible window of a chart: a period granularity plus a half-open,
//! period-aligned `domain`. The window moves one period step at a time and
//! can jump back to the window containing the reference instant ("now").
//!
//! ```text
//!            year start                                now
//!                │                                      │
//!   ─────────────┼──────┬──────┬──────┬──────┬──────────┼──┬────
//!                │  ... │      │ left │domain│ right    │  │
//!                        ◀── move_left      move_right ──▶
//! ```
//!
//! # Boundaries
//!
//! - Left: a move is enabled while the window it would land on starts at or
//!   after the start of the current year. The year window is used whatever
//!   the extent's own period, so every period shares one earliest instant.
//! - Right: enabled while the domain is not the most recent window.
//!
//! The move methods themselves are unconditional state shifts; callers gate
//! them with the enablement predicates, or drive the extent through its
//! [`StateMachine`](crate::state_machine::StateMachine) implementation which
//! refuses disabled moves.

mod transitions;

pub use transitions::ExtentInput;

use chrono::{DateTime, Utc};
use std::ops::{Range, RangeInclusive};
use tracing::debug;

use crate::aggregation::bucket;
use crate::calendar::CalendarUnit;
use crate::cell::{Cell, CellValue};
use crate::period::Period;

/// Visible window over aggregated chart data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartExtent {
    period: Period,
    domain: Range<DateTime<Utc>>,
    reference: DateTime<Utc>,
}

impl ChartExtent {
    /// Extent showing the current window of `period`
    pub fn new(period: Period) -> Self {
        Self::with_reference(period, Utc::now())
    }

    /// Extent showing the window of `period` that contains `reference`
    pub fn with_reference(period: Period, reference: DateTime<Utc>) -> Self {
        Self {
            period,
            domain: period.initial_range(reference),
            reference,
        }
    }

    /// Extent showing an explicit `domain`
    pub fn with_domain(
        period: Period,
        domain: Range<DateTime<Utc>>,
        reference: DateTime<Utc>,
    ) -> Self {
        Self {
            period,
            domain,
            reference,
        }
    }

    /// Current granularity
    pub fn period(&self) -> Period {
        self.period
    }

    /// Visible half-open window
    pub fn domain(&self) -> &Range<DateTime<Utc>> {
        &self.domain
    }

    /// Instant treated as "now"
    pub fn reference(&self) -> DateTime<Utc> {
        self.reference
    }

    /// Most recent window for the current period
    pub fn initial_range(&self) -> Range<DateTime<Utc>> {
        self.period.initial_range(self.reference)
    }

    /// Switch granularity and show its most recent window
    pub fn set_period(&mut self, period: Period) {
        self.period = period;
        self.domain = self.initial_range();
        debug!(period = %period, "Switched chart period");
    }

    /// Re-anchor "now"; the domain is left where it is
    pub fn refresh(&mut self, reference: DateTime<Utc>) {
        self.reference = reference;
    }

    /// Shift the window back one period step
    pub fn move_left(&mut self) {
        self.domain = self.period.range_component().shift(&self.domain, -1);
        self.log_move("left");
    }

    /// Shift the window forward one period step
    pub fn move_right(&mut self) {
        self.domain = self.period.range_component().shift(&self.domain, 1);
        self.log_move("right");
    }

    /// Jump to the most recent window
    pub fn move_right_edge(&mut self) {
        self.domain = self.initial_range();
        self.log_move("right edge");
    }

    /// Whether the window one step to the left is still navigable
    pub fn is_left_enabled(&self) -> bool {
        let earliest = Period::Year.initial_range(self.reference).start;
        let left = self.period.range_component().shift(&self.domain, -1);
        left.start >= earliest
    }

    /// Whether the domain is not already the most recent window
    pub fn is_right_enabled(&self) -> bool {
        self.domain != self.initial_range()
    }

    /// Whether the "now" marker should be shown
    pub fn is_at_latest(&self) -> bool {
        !self.is_right_enabled()
    }

    /// Closed range from the first to the last point of the domain
    pub fn viewport(&self) -> RangeInclusive<DateTime<Utc>> {
        let last = self.point_component().add(self.domain.end, -1);
        self.domain.start..=last
    }

    /// Unit the points inside the window are laid out on
    pub fn point_component(&self) -> CalendarUnit {
        self.period.point_component()
    }

    /// Zero-filled series over the domain at point granularity
    pub fn segment<V: CellValue>(&self, cells: &[Cell<V>]) -> Vec<Cell<V>> {
        bucket(cells, &self.domain, self.point_component())
    }

    /// Human-readable label for the domain
    ///
    /// The upper bound is rendered one day back so a one-day window shows a
    /// single date. `format` is a chrono format string.
    pub fn range_label(&self, format: &str) -> String {
        let from = self.domain.start.format(format).to_string();
        let to = CalendarUnit::Day
            .add(self.domain.end, -1)
            .format(format)
            .to_string();

        if from == to {
            from
        } else {
            format!("{from} – {to}")
        }
    }

    fn log_move(&self, direction: &str) {
        debug!(
            period = %self.period,
            direction,
            start = %self.domain.start,
            end = %self.domain.end,
            "Moved chart extent"
        );
    }
}
