// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event Store Abstraction
//!
//! The source events are read from before aggregation. The analytics core
//! never talks to storage directly; it receives plain event batches, and the
//! [`ChartDataProvider`](crate::service::ChartDataProvider) fetches those
//! batches through this trait.
//!
//! ```text
//! EventStore ──fetch_events(domain)──> [Event] ──parse──> [Cell]
//! ```
//!
//! # Store Requirements
//!
//! 1. **Append-Only**: events are never updated or deleted
//! 2. **Ordered reads**: fetches return events by timestamp ascending
//! 3. **Half-open ranges**: `fetch_events(start..end)` excludes `end`
//!
//! # Example
//!
//! ```rust
//! use event_analytics::event_store::{EventStore, InMemoryEventStore};
//! use event_analytics::events::{Event, Level};
//!
//! # tokio_test::block_on(async {
//! let store = InMemoryEventStore::new();
//! let now = chrono::Utc::now();
//! store.append(vec![Event::new("app_open", Level::Info, now)]).await?;
//!
//! let events = store.fetch_events(now..now + chrono::TimeDelta::hours(1)).await?;
//! assert_eq!(events.len(), 1);
//! # Ok::<(), event_analytics::AnalyticsError>(())
//! # }).unwrap();
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::ops::Range;

use crate::errors::AnalyticsResult;
use crate::events::{Event, EventQuery};

pub mod memory;

pub use memory::InMemoryEventStore;

/// Event Store trait for persisting and retrieving analytics events
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Append events, returning how many the store now holds
    async fn append(&self, events: Vec<Event>) -> AnalyticsResult<usize>;

    /// Read events whose timestamp falls inside `range`
    ///
    /// Returns events in chronological order.
    async fn fetch_events(&self, range: Range<DateTime<Utc>>) -> AnalyticsResult<Vec<Event>>;

    /// Read events satisfying `query`
    ///
    /// Returns events in chronological order.
    async fn fetch_matching(&self, query: &EventQuery) -> AnalyticsResult<Vec<Event>>;

    /// Number of stored events
    async fn len(&self) -> AnalyticsResult<usize>;

    /// Whether the store holds no events
    async fn is_empty(&self) -> AnalyticsResult<bool> {
        Ok(self.len().await? == 0)
    }
}
