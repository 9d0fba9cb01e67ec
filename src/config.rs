// Copyright (c) 2025 - Cowboy AI, Inc.
//! Analytics configuration
//!
//! Defaults can be overridden from the environment:
//!
//! | Variable               | Field            | Example         |
//! |------------------------|------------------|-----------------|
//! | `ANALYTICS_PERIOD`     | `default_period` | `month`         |
//! | `ANALYTICS_LEVELS`     | `levels`         | `warning,error` |
//! | `ANALYTICS_MAX_EVENTS` | `max_events`     | `10000`         |

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::errors::{AnalyticsError, AnalyticsResult};
use crate::events::Level;
use crate::filter::Categorical;
use crate::period::Period;

/// Environment variable naming the initial chart period
pub const PERIOD_VAR: &str = "ANALYTICS_PERIOD";
/// Environment variable listing accepted levels
pub const LEVELS_VAR: &str = "ANALYTICS_LEVELS";
/// Environment variable capping how many events are aggregated
pub const MAX_EVENTS_VAR: &str = "ANALYTICS_MAX_EVENTS";

/// Settings for building charts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Period a fresh chart opens with
    pub default_period: Period,
    /// Levels included in aggregation
    pub levels: HashSet<Level>,
    /// Upper bound on events fetched per aggregation, `None` for unlimited
    pub max_events: Option<usize>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            default_period: Period::default(),
            levels: Level::universe(),
            max_events: None,
        }
    }
}

impl AnalyticsConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> AnalyticsResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AnalyticsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(period) = lookup(PERIOD_VAR) {
            config.default_period = period.parse().map_err(|e| {
                AnalyticsError::Configuration(format!("{PERIOD_VAR}: {e}"))
            })?;
        }

        if let Some(levels) = lookup(LEVELS_VAR) {
            config.levels = parse_levels(&levels)?;
        }

        if let Some(max) = lookup(MAX_EVENTS_VAR) {
            let max: usize = max.trim().parse().map_err(|_| {
                AnalyticsError::Configuration(format!("{MAX_EVENTS_VAR}: not a count: {max}"))
            })?;
            config.max_events = Some(max);
        }

        Ok(config)
    }

    /// Restrict to `levels`
    pub fn with_levels(mut self, levels: HashSet<Level>) -> Self {
        self.levels = levels;
        self
    }

    /// Open charts with `period`
    pub fn with_default_period(mut self, period: Period) -> Self {
        self.default_period = period;
        self
    }

    /// Cap aggregation input at `max` events
    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = Some(max);
        self
    }
}

fn parse_levels(raw: &str) -> AnalyticsResult<HashSet<Level>> {
    let levels = raw
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            name.parse::<Level>()
                .map_err(|e| AnalyticsError::Configuration(format!("{LEVELS_VAR}: {e}")))
        })
        .collect::<AnalyticsResult<HashSet<_>>>()?;

    if levels.is_empty() {
        return Err(AnalyticsError::Configuration(format!(
            "{LEVELS_VAR}: at least one level is required"
        )));
    }
    Ok(levels)
}
