// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event analytics for time-bucketed charts
//!
//! This crate turns a batch of timestamped events into period-aligned cells,
//! tracks the visible window of a chart, and stages filter selections before
//! they are committed.
//!
//! - [`cell`] - additive accumulators keyed by time, by weekday/hour or by day
//! - [`period`] and [`calendar`] - UTC calendar granularities
//! - [`aggregation`] - binning of events into cells
//! - [`activity`] - daily, weekly and monthly active users
//! - [`extent`] - the navigable chart window
//! - [`filter`] - staged selection sessions
//! - [`event_store`] and [`service`] - fetching events for a window

pub mod activity;
pub mod aggregation;
pub mod calendar;
pub mod cell;
pub mod config;
pub mod errors;
pub mod event_store;
pub mod events;
pub mod extent;
pub mod filter;
pub mod frp;
pub mod period;
pub mod service;
pub mod state_machine;

// Re-export commonly used types
pub use activity::{active_users, ActivityMatrix, ActivityPeriod};
pub use aggregation::{parse, parse_grid, parse_with, Timestamped};
pub use cell::{Cell, GridCell, PeriodCell};
pub use config::AnalyticsConfig;
pub use errors::{AnalyticsError, AnalyticsResult};
pub use events::{Event, EventQuery, Level};
pub use extent::{ChartExtent, ExtentInput};
pub use filter::{Categorical, FilterCriteria};
pub use period::Period;
pub use service::ChartDataProvider;
