// Copyright (c) 2025 - Cowboy AI, Inc.
//! Analytics Report
//!
//! Reads newline-delimited JSON events from a file and prints the chart for
//! the most recent window. A weekday/hour summary and the active user counts
//! for the latest day follow.
//!
//! Run with: cargo run --bin analytics-report -- events.ndjson
//!
//! The window is anchored at the latest event in the file. Settings come from
//! `ANALYTICS_PERIOD`, `ANALYTICS_LEVELS` and `ANALYTICS_MAX_EVENTS`.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use event_analytics::cell::total;
use event_analytics::event_store::{EventStore, InMemoryEventStore};
use event_analytics::{
    ActivityPeriod, AnalyticsConfig, ChartDataProvider, ChartExtent, Event, EventQuery,
};

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Chart report for a file of recorded events
#[derive(Parser)]
#[command(name = "analytics-report")]
#[command(version)]
#[command(about = "Print the latest chart window and weekday activity for an event log", long_about = None)]
struct Args {
    /// Newline-delimited JSON events
    path: PathBuf,
}

fn read_events(contents: &str) -> Vec<Event> {
    let mut events = Vec::new();
    for (number, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<Event>(line) {
            Ok(event) => events.push(event),
            Err(e) => warn!(line = number + 1, error = %e, "Skipping malformed event"),
        }
    }
    events
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let config = AnalyticsConfig::from_env().context("Failed to load configuration")?;
    info!(
        period = %config.default_period,
        levels = config.levels.len(),
        max_events = ?config.max_events,
        "Configuration loaded"
    );

    let contents = tokio::fs::read_to_string(&args.path)
        .await
        .with_context(|| format!("Failed to read {}", args.path.display()))?;
    let events = read_events(&contents);
    let reference = events
        .iter()
        .map(|event| event.timestamp)
        .max()
        .unwrap_or_else(Utc::now);

    let store = Arc::new(InMemoryEventStore::new());
    let stored = store
        .append(events)
        .await
        .context("Failed to load events into store")?;
    info!(path = %args.path.display(), events = stored, "Loaded events");

    let provider = ChartDataProvider::with_config(store, config.clone());
    let extent = ChartExtent::with_reference(config.default_period, reference);
    let query = EventQuery::default();

    let series = provider
        .series(&extent, &query)
        .await
        .context("Failed to build chart series")?;
    println!("{} ({})", extent.range_label("%Y-%m-%d"), extent.period());
    for cell in &series {
        println!("  {}  {}", cell.index.format("%Y-%m-%d %H:%M"), cell.value);
    }
    println!("  total  {}", total(&series));

    let grid = provider
        .grid(&extent, &query)
        .await
        .context("Failed to build activity grid")?;
    println!();
    println!("Activity by weekday (UTC)");
    for (row, name) in (1u32..).zip(WEEKDAYS) {
        let cells: Vec<_> = grid.iter().filter(|cell| cell.row == row).collect();
        let busiest = cells.iter().max_by_key(|cell| cell.value);
        match busiest {
            Some(cell) => println!(
                "  {name}  {:>6}  busiest {:02}:00",
                total(cells.iter().copied()),
                cell.column
            ),
            None => println!("  {name}  {:>6}", 0),
        }
    }

    let activity = provider
        .active_users(reference)
        .await
        .context("Failed to count active users")?;
    println!();
    println!("Active users ({})", activity.date.format("%Y-%m"));
    for period in ActivityPeriod::ALL {
        let latest = activity
            .points(period)
            .into_iter()
            .rev()
            .find(|point| point.date <= reference)
            .map_or(0, |point| point.count);
        println!("  {:<8} {:>6}", period.title(), latest);
    }

    Ok(())
}
