// Copyright (c) 2025 - Cowboy AI, Inc.
//! Filter Criteria - staged selection sessions
//!
//! A filter sheet edits a copy of the committed selection. Nothing outside the
//! session observes the edits until the session ends with `apply()` having
//! been called; otherwise the edits are discarded.
//!
//! ```text
//! open ──> toggle / reset ... ──> apply? ──> finish
//!                                   │           │
//!                                   └── yes ──> committed := staged
//!                                       no  ──> committed unchanged
//! ```
//!
//! A session that goes out of scope without [`FilterCriteria::finish`]
//! follows the same rule when it is dropped.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

use crate::frp::Binding;

/// Finite, fully enumerable category type
pub trait Categorical: Clone + Eq + Hash + Debug + Send + Sync + 'static {
    /// Every category
    fn all() -> Vec<Self>;

    /// Every category as a set, the "no filter" selection
    fn universe() -> HashSet<Self> {
        Self::all().into_iter().collect()
    }
}

/// Transactional edit session over a committed selection
#[derive(Debug)]
pub struct FilterCriteria<T: Categorical> {
    committed: Binding<HashSet<T>>,
    staged: HashSet<T>,
    is_applied: bool,
    is_finished: bool,
}

impl<T: Categorical> FilterCriteria<T> {
    /// Open a session staging a copy of the committed selection
    pub fn new(committed: Binding<HashSet<T>>) -> Self {
        let staged = committed.get();
        Self {
            committed,
            staged,
            is_applied: false,
            is_finished: false,
        }
    }

    /// Whether `item` is in the staged selection
    pub fn is_selected(&self, item: &T) -> bool {
        self.staged.contains(item)
    }

    /// Add `item` if absent, remove it if present
    pub fn toggle(&mut self, item: T) {
        if !self.staged.remove(&item) {
            self.staged.insert(item);
        }
    }

    /// The staged selection
    pub fn staged(&self) -> &HashSet<T> {
        &self.staged
    }

    /// Staged selection is non-empty and differs from the committed one
    pub fn is_apply_enabled(&self) -> bool {
        !self.staged.is_empty() && self.staged != self.committed.get()
    }

    /// Mark the session for commit when it ends
    pub fn apply(&mut self) {
        self.is_applied = true;
    }

    /// Whether `apply` has been called
    pub fn is_applied(&self) -> bool {
        self.is_applied
    }

    /// Staged selection differs from the full category set
    pub fn is_reset_enabled(&self) -> bool {
        self.staged != T::universe()
    }

    /// Stage every category
    pub fn reset(&mut self) {
        self.staged = T::universe();
    }

    /// End the session and return the resolved committed selection
    pub fn finish(mut self) -> HashSet<T> {
        self.commit();
        self.committed.get()
    }

    fn commit(&mut self) {
        if self.is_finished {
            return;
        }
        self.is_finished = true;

        if self.is_applied {
            debug!(selected = self.staged.len(), "Committing staged filter selection");
            self.committed.set(self.staged.clone());
        } else {
            debug!("Discarding staged filter selection");
        }
    }
}

impl<T: Categorical> Drop for FilterCriteria<T> {
    fn drop(&mut self) {
        self.commit();
    }
}
