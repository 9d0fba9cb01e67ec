// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Staged Filter Sessions

use std::collections::HashSet;

use event_analytics::events::Level;
use event_analytics::filter::{Categorical, FilterCriteria};
use event_analytics::frp::Binding;
use proptest::prelude::*;

// ============================================================================
// Property Test Strategies
// ============================================================================

fn level() -> impl Strategy<Value = Level> {
    prop::sample::select(Level::ALL.to_vec())
}

fn selection() -> impl Strategy<Value = HashSet<Level>> {
    prop::sample::subsequence(Level::ALL.to_vec(), 0..=Level::ALL.len())
        .prop_map(|levels| levels.into_iter().collect())
}

fn toggles() -> impl Strategy<Value = Vec<Level>> {
    prop::collection::vec(level(), 0..20)
}

/// Staged selection after toggling `levels` on top of `start`
fn toggled(start: &HashSet<Level>, levels: &[Level]) -> HashSet<Level> {
    let mut staged = start.clone();
    for level in levels {
        if !staged.remove(level) {
            staged.insert(*level);
        }
    }
    staged
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: The binding changes only when the session was applied
    #[test]
    fn prop_commit_requires_apply(start in selection(), edits in toggles(), applied in any::<bool>()) {
        let committed = Binding::new(start.clone());

        let mut criteria = FilterCriteria::new(committed.clone());
        for level in &edits {
            criteria.toggle(*level);
        }
        if applied {
            criteria.apply();
        }
        let resolved = criteria.finish();

        let expected = if applied { toggled(&start, &edits) } else { start };
        prop_assert_eq!(&resolved, &expected);
        prop_assert_eq!(committed.get(), expected);
    }

    /// Property: Toggling the same level twice is the identity
    #[test]
    fn prop_toggle_involution(start in selection(), item in level()) {
        let mut criteria = FilterCriteria::new(Binding::new(start.clone()));
        criteria.toggle(item);
        criteria.toggle(item);
        prop_assert_eq!(criteria.staged(), &start);
    }

    /// Property: Reset is idempotent and disables itself
    #[test]
    fn prop_reset_idempotent(start in selection(), edits in toggles()) {
        let mut criteria = FilterCriteria::new(Binding::new(start));
        for level in edits {
            criteria.toggle(level);
        }

        criteria.reset();
        let once = criteria.staged().clone();
        criteria.reset();

        prop_assert_eq!(criteria.staged(), &once);
        prop_assert_eq!(once, Level::universe());
        prop_assert!(!criteria.is_reset_enabled());
    }

    /// Property: Apply is enabled iff the staged selection is non-empty and changed
    #[test]
    fn prop_apply_enablement(start in selection(), edits in toggles()) {
        let mut criteria = FilterCriteria::new(Binding::new(start.clone()));
        for level in &edits {
            criteria.toggle(*level);
        }

        let staged = toggled(&start, &edits);
        prop_assert_eq!(
            criteria.is_apply_enabled(),
            !staged.is_empty() && staged != start
        );
    }
}
