// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-memory event store
//!
//! Keeps events sorted by timestamp so range reads are a binary search plus
//! a slice copy. Events with equal timestamps keep their append order.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::ops::Range;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::EventStore;
use crate::errors::AnalyticsResult;
use crate::events::{Event, EventQuery};

/// Event store backed by a sorted vector
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventStore {
    events: Arc<RwLock<Vec<Event>>>,
}

impl InMemoryEventStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `events`
    pub fn with_events(mut events: Vec<Event>) -> Self {
        events.sort_by_key(|event| event.timestamp);
        Self {
            events: Arc::new(RwLock::new(events)),
        }
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn append(&self, events: Vec<Event>) -> AnalyticsResult<usize> {
        let mut stored = self.events.write().await;
        let appended = events.len();

        for event in events {
            let at = stored.partition_point(|existing| existing.timestamp <= event.timestamp);
            stored.insert(at, event);
        }

        debug!(appended, total = stored.len(), "Appended events");
        Ok(stored.len())
    }

    async fn fetch_events(&self, range: Range<DateTime<Utc>>) -> AnalyticsResult<Vec<Event>> {
        let stored = self.events.read().await;
        let from = stored.partition_point(|event| event.timestamp < range.start);
        let to = stored.partition_point(|event| event.timestamp < range.end);
        let events = stored[from..to.max(from)].to_vec();

        debug!(
            start = %range.start,
            end = %range.end,
            fetched = events.len(),
            "Fetched events by range"
        );
        Ok(events)
    }

    async fn fetch_matching(&self, query: &EventQuery) -> AnalyticsResult<Vec<Event>> {
        let events: Vec<Event> = match &query.dates {
            Some(dates) => self.fetch_events(dates.clone()).await?,
            None => self.events.read().await.clone(),
        }
        .into_iter()
        .filter(|event| query.matches(event))
        .collect();

        debug!(query = %query, fetched = events.len(), "Fetched events by query");
        Ok(events)
    }

    async fn len(&self) -> AnalyticsResult<usize> {
        Ok(self.events.read().await.len())
    }
}
