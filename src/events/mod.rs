// Copyright (c) 2025 - Cowboy AI, Inc.
//! Recorded Analytics Events
//!
//! An [`Event`] is an immutable fact: something named happened at an instant,
//! tagged with the user, session and launch it happened in.
//!
//! # Module Organization
//!
//! - [`level`] - closed severity set used as a filter category
//! - [`query`] - predicate describing which events enter an aggregation
//! - [`ids`] - identifier provider the caller passes in

pub mod ids;
pub mod level;
pub mod query;

pub use ids::{FixedIds, IdProvider};
pub use level::Level;
pub use query::EventQuery;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::aggregation::Timestamped;

/// A recorded event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event identifier
    pub id: Uuid,
    /// Event name, e.g. `app_open`
    pub name: String,
    /// Severity
    #[serde(default)]
    pub level: Level,
    /// When the event happened
    pub timestamp: DateTime<Utc>,
    /// Installation-wide user identifier
    #[serde(default)]
    pub user_id: Option<Uuid>,
    /// Session the event happened in
    #[serde(default)]
    pub session_id: Option<Uuid>,
    /// Process launch the event happened in
    #[serde(default)]
    pub launch_id: Option<Uuid>,
    /// Free-form string parameters
    #[serde(default)]
    pub params: BTreeMap<String, String>,
}

impl Event {
    /// Create an event with a fresh id and no identifiers attached
    pub fn new(name: impl Into<String>, level: Level, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            level,
            timestamp,
            user_id: None,
            session_id: None,
            launch_id: None,
            params: BTreeMap::new(),
        }
    }

    /// Tag the event with the identifiers from `ids`
    pub fn with_ids(mut self, ids: &dyn IdProvider) -> Self {
        self.user_id = Some(ids.user_id());
        self.session_id = Some(ids.session_id());
        self.launch_id = Some(ids.launch_id());
        self
    }

    /// Attach a parameter
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

impl Timestamped for Event {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
