// Copyright (c) 2025 - Cowboy AI, Inc.
//! Integration tests for chart extent navigation
//!
//! These tests drive an extent the way a chart toolbar would: reading the
//! enablement predicates and moving only when a button would be enabled.

use chrono::{DateTime, Datelike, TimeDelta, Utc};
use pretty_assertions::assert_eq;
use test_case::test_case;

use event_analytics::extent::{ChartExtent, ExtentInput};
use event_analytics::period::Period;
use event_analytics::state_machine::{StateMachine, StateMachineWithHistory, TransitionError};

// Test fixtures
fn reference() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2030-08-14T15:30:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn year_start() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2030-01-01T00:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// Test: Right enablement follows the latest window
#[test]
fn test_right_enablement_sequence() {
    let mut extent = ChartExtent::with_reference(Period::Week, reference());
    assert!(!extent.is_right_enabled());

    extent.move_left();
    assert!(extent.is_right_enabled());

    extent.move_right_edge();
    assert!(!extent.is_right_enabled());
}

/// Test: Left enablement flips exactly at the year boundary
#[test_case(Period::Hour ; "hour")]
#[test_case(Period::Day ; "day")]
#[test_case(Period::Week ; "week")]
#[test_case(Period::Month ; "month")]
fn test_left_boundary_is_exact(period: Period) {
    let mut extent = ChartExtent::with_reference(period, reference());
    let step = period.range_component();

    let mut moves = 0;
    while extent.is_left_enabled() {
        extent.move_left();
        moves += 1;
        assert!(extent.domain().start >= year_start());
    }

    let left = step.shift(extent.domain(), -1);
    assert!(left.start < year_start());
    assert!(moves > 0);
}

/// Test: Year period never navigates left
#[test]
fn test_year_period_is_pinned_left() {
    let extent = ChartExtent::with_reference(Period::Year, reference());
    assert_eq!(extent.domain().start, year_start());
    assert!(!extent.is_left_enabled());
}

/// Test: The week containing January 1st is not reachable when it starts in December
#[test]
fn test_week_straddling_new_year() {
    let mut extent = ChartExtent::with_reference(Period::Week, reference());
    while extent.is_left_enabled() {
        extent.move_left();
    }

    assert_eq!(extent.domain().start.weekday(), chrono::Weekday::Mon);
    assert!(extent.domain().start - year_start() < TimeDelta::weeks(1));
}

/// Test: Switching period jumps to the latest window of the new period
#[test]
fn test_switch_period() {
    let mut extent = ChartExtent::with_reference(Period::Day, reference());
    extent.move_left();
    extent.move_left();

    extent.set_period(Period::Month);

    assert_eq!(
        *extent.domain(),
        Period::Month.initial_range(reference())
    );
    assert!(extent.is_at_latest());
}

/// Test: Labels render one or two dates
#[test_case(Period::Day, "Aug 14, 2030" ; "day")]
#[test_case(Period::Week, "Aug 12, 2030 – Aug 18, 2030" ; "week")]
#[test_case(Period::Month, "Aug 01, 2030 – Aug 31, 2030" ; "month")]
#[test_case(Period::Year, "Jan 01, 2030 – Dec 31, 2030" ; "year")]
fn test_range_label(period: Period, expected: &str) {
    let extent = ChartExtent::with_reference(period, reference());
    assert_eq!(extent.range_label("%b %d, %Y"), expected);
}

/// Test: The state machine refuses disabled moves and records accepted ones
#[test]
fn test_toolbar_as_state_machine() {
    let mut toolbar = StateMachineWithHistory::new(ChartExtent::with_reference(
        Period::Month,
        reference(),
    ));

    let refused = toolbar
        .transition_with_history(ExtentInput::MoveRight, reference())
        .unwrap_err();
    assert!(matches!(refused, TransitionError::Disabled { .. }));
    assert!(toolbar.get_history().is_empty());

    while toolbar.current_state().can_transition(&ExtentInput::MoveLeft) {
        toolbar
            .transition_with_history(ExtentInput::MoveLeft, reference())
            .unwrap();
    }

    // August back to January
    assert_eq!(toolbar.get_history().len(), 7);
    assert_eq!(toolbar.current_state().domain().start, year_start());

    let undone = toolbar.rewind().unwrap();
    assert_eq!(undone.input, ExtentInput::MoveLeft);
    assert_eq!(toolbar.current_state().domain().start.month(), 2);
}
