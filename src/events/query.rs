// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event query predicate
//!
//! An [`EventQuery`] narrows which events enter an aggregation. Every field
//! left at its default matches everything, so `EventQuery::default()` is the
//! "no filter" query.

use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::fmt;
use std::ops::Range;
use uuid::Uuid;

use super::{Event, Level};
use crate::filter::Categorical;

/// Conjunction of optional event constraints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventQuery {
    /// Accepted levels
    pub levels: HashSet<Level>,
    /// Name prefix
    pub text: String,
    /// Exact name
    pub name: String,
    /// Required user
    pub user_id: Option<Uuid>,
    /// Required session
    pub session_id: Option<Uuid>,
    /// Half-open time range
    pub dates: Option<Range<DateTime<Utc>>>,
}

impl Default for EventQuery {
    fn default() -> Self {
        Self {
            levels: Level::all().into_iter().collect(),
            text: String::new(),
            name: String::new(),
            user_id: None,
            session_id: None,
            dates: None,
        }
    }
}

impl EventQuery {
    /// Restrict to `levels`
    pub fn with_levels(mut self, levels: HashSet<Level>) -> Self {
        self.levels = levels;
        self
    }

    /// Restrict to events named exactly `name`
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Restrict to events whose name starts with `text`
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Restrict to one user
    pub fn with_user(mut self, user_id: Uuid) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Restrict to one session
    pub fn with_session(mut self, session_id: Uuid) -> Self {
        self.session_id = Some(session_id);
        self
    }

    /// Restrict to `[start, end)`
    pub fn with_dates(mut self, dates: Range<DateTime<Utc>>) -> Self {
        self.dates = Some(dates);
        self
    }

    /// Whether every level is accepted
    pub fn accepts_all_levels(&self) -> bool {
        self.levels.len() == Level::ALL.len()
    }

    /// Whether `event` satisfies every constraint
    pub fn matches(&self, event: &Event) -> bool {
        self.levels.contains(&event.level)
            && (self.text.is_empty() || event.name.starts_with(&self.text))
            && (self.name.is_empty() || event.name == self.name)
            && self.user_id.map_or(true, |id| event.user_id == Some(id))
            && self.session_id.map_or(true, |id| event.session_id == Some(id))
            && self
                .dates
                .as_ref()
                .map_or(true, |dates| dates.contains(&event.timestamp))
    }
}

impl fmt::Display for EventQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut components = Vec::new();

        if !self.accepts_all_levels() {
            let mut levels: Vec<_> = self.levels.iter().collect();
            levels.sort();
            let names: Vec<_> = levels.iter().map(|l| l.as_str()).collect();
            components.push(format!("levels: {}", names.join(", ")));
        }
        if !self.text.is_empty() {
            components.push(format!("text: {}", self.text));
        }
        if !self.name.is_empty() {
            components.push(format!("name: {}", self.name));
        }
        if let Some(user_id) = self.user_id {
            components.push(format!("user: {user_id}"));
        }
        if let Some(session_id) = self.session_id {
            components.push(format!("session: {session_id}"));
        }
        if let Some(dates) = &self.dates {
            components.push(format!(
                "dates: {} - {}",
                dates.start.to_rfc3339(),
                dates.end.to_rfc3339()
            ));
        }

        write!(f, "{}", components.join(", "))
    }
}
