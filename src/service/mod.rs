// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service Layer for Chart Data
//!
//! Orchestrates the event store and the pure aggregation core.
//!
//! # Architecture
//!
//! ```text
//! ChartExtent ──domain──> EventStore::fetch_events
//!                              ↓
//!                 EventQuery + configured levels
//!                              ↓
//!                 parse / parse_grid / Matrix::of_batch
//!                              ↓
//!                     cells for the chart
//! ```
//!
//! Windows come from the extent or the activity period and bucketing from the
//! aggregator. The service only widens the active-user read by one month.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::activity::{ActivityMatrix, ActivityPeriod};
use crate::aggregation::{parse_by_unit, parse_grid, Matrix};
use crate::calendar::CalendarUnit;
use crate::cell::{merge_duplicates, Cell, GridCell};
use crate::config::AnalyticsConfig;
use crate::errors::AnalyticsResult;
use crate::event_store::EventStore;
use crate::events::{Event, EventQuery};
use crate::extent::ChartExtent;

/// Builds chart cells for an extent from a backing event store
#[derive(Debug)]
pub struct ChartDataProvider<S: EventStore + ?Sized> {
    store: Arc<S>,
    config: AnalyticsConfig,
}

impl<S: EventStore + ?Sized> Clone for ChartDataProvider<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: self.config.clone(),
        }
    }
}

impl<S: EventStore + ?Sized> ChartDataProvider<S> {
    /// Create a provider over `store` with default settings
    pub fn new(store: Arc<S>) -> Self {
        Self::with_config(store, AnalyticsConfig::default())
    }

    /// Create a provider over `store` with explicit settings
    pub fn with_config(store: Arc<S>, config: AnalyticsConfig) -> Self {
        Self { store, config }
    }

    /// Active settings
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// A fresh extent at the configured default period
    pub fn open_extent(&self) -> ChartExtent {
        ChartExtent::new(self.config.default_period)
    }

    /// Events inside the extent's domain that pass `query` and the
    /// configured levels
    ///
    /// When `max_events` is set, only the most recent events are kept.
    pub async fn events(
        &self,
        extent: &ChartExtent,
        query: &EventQuery,
    ) -> AnalyticsResult<Vec<Event>> {
        let mut events: Vec<Event> = self
            .store
            .fetch_events(extent.domain().clone())
            .await?
            .into_iter()
            .filter(|event| self.config.levels.contains(&event.level) && query.matches(event))
            .collect();

        if let Some(max) = self.config.max_events {
            if events.len() > max {
                warn!(
                    fetched = events.len(),
                    max, "Event count exceeds limit, keeping most recent"
                );
                events = events.split_off(events.len() - max);
            }
        }

        debug!(extent = %extent, query = %query, events = events.len(), "Selected chart events");
        Ok(events)
    }

    /// Sparse cells at the extent's point granularity
    pub async fn cells(
        &self,
        extent: &ChartExtent,
        query: &EventQuery,
    ) -> AnalyticsResult<Vec<Cell<u64>>> {
        let events = self.events(extent, query).await?;
        Ok(parse_by_unit(&events, extent.point_component(), |_| 1u64))
    }

    /// Zero-filled series covering every point of the extent's domain
    pub async fn series(
        &self,
        extent: &ChartExtent,
        query: &EventQuery,
    ) -> AnalyticsResult<Vec<Cell<u64>>> {
        let cells = self.cells(extent, query).await?;
        Ok(extent.segment(&cells))
    }

    /// Weekday/hour heatmap of the extent's domain
    pub async fn grid(
        &self,
        extent: &ChartExtent,
        query: &EventQuery,
    ) -> AnalyticsResult<Vec<GridCell<u64>>> {
        let events = self.events(extent, query).await?;
        Ok(parse_grid(&events))
    }

    /// One matrix per event name and week inside the extent's domain
    ///
    /// Matrices are ordered by week, then name.
    pub async fn matrices(
        &self,
        extent: &ChartExtent,
        query: &EventQuery,
    ) -> AnalyticsResult<Vec<Matrix<u64>>> {
        let events = self.events(extent, query).await?;

        let mut batches: BTreeMap<_, Vec<Event>> = BTreeMap::new();
        for event in events {
            let week = CalendarUnit::WeekOfYear.truncate(event.timestamp);
            batches
                .entry((week, event.name.clone()))
                .or_default()
                .push(event);
        }

        let matrices = batches
            .values()
            .map(|batch| Matrix::of_batch(batch))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(merge_duplicates(matrices))
    }

    /// Daily, weekly and monthly active users for the month containing `month`
    ///
    /// Reads from one month before the window so activity late in the
    /// previous month still counts toward the monthly and weekly figures.
    pub async fn active_users(&self, month: DateTime<Utc>) -> AnalyticsResult<ActivityMatrix<u64>> {
        let window = ActivityPeriod::Monthly.initial_range(month);
        let start = CalendarUnit::Month.add(window.start, -1);

        let events: Vec<Event> = self
            .store
            .fetch_events(start..window.end)
            .await?
            .into_iter()
            .filter(|event| self.config.levels.contains(&event.level))
            .collect();

        let matrix = ActivityMatrix::of_events(&events, window.start);
        debug!(matrix = %matrix, events = events.len(), "Built activity matrix");
        Ok(matrix)
    }
}
