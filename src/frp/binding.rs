// Copyright (c) 2025 - Cowboy AI, Inc.
//! Binding - a shared value observed from outside the core
//!
//! The committed filter selection lives in a `Binding` owned by the host UI.
//! Clones share the same value and observer list. Observers run
//! synchronously on the writer's thread, after the value has been stored.

use std::fmt::{self, Debug};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use super::behavior::Behavior;

type Observer<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Handle returned by [`Binding::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Shared<T> {
    value: RwLock<T>,
    observers: RwLock<Vec<(SubscriptionId, Observer<T>)>>,
    next_id: AtomicU64,
}

/// Shared, writable, observable value
pub struct Binding<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Debug> Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding").field("value", &*self.shared.value.read()).finish()
    }
}

impl<T: Clone + Send + Sync + 'static> Binding<T> {
    /// Create a binding holding `value`
    pub fn new(value: T) -> Self {
        Self {
            shared: Arc::new(Shared {
                value: RwLock::new(value),
                observers: RwLock::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Current value
    pub fn get(&self) -> T {
        self.shared.value.read().clone()
    }

    /// Store `value` and notify every observer
    pub fn set(&self, value: T) {
        *self.shared.value.write() = value.clone();

        let observers: Vec<Observer<T>> = self
            .shared
            .observers
            .read()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();

        for observer in observers {
            observer(&value);
        }
    }

    /// Register `observer` to be called after every write
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.shared.next_id.fetch_add(1, Ordering::Relaxed));
        self.shared.observers.write().push((id, Arc::new(observer)));
        id
    }

    /// Remove a previously registered observer
    ///
    /// Returns false if `id` was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.shared.observers.write();
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        observers.len() != before
    }

    /// Read-only view following every write
    pub fn behavior(&self) -> Behavior<T>
    where
        T: Debug,
    {
        let binding = self.clone();
        Behavior::from_fn(move || binding.get())
    }
}
