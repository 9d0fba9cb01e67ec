// Copyright (c) 2025 - Cowboy AI, Inc.
//! Behavior - read-only sampled values
//!
//! A `Behavior<T>` always has a value. Sampling calls the function it wraps,
//! so a behavior derived from a [`Binding`](super::Binding) follows every
//! write to it.
//!
//! ```text
//! Behavior<T> ≅ () → T
//! ```

use super::signal::{Samplable, Signal};
use std::fmt::Debug;
use std::sync::Arc;

/// Continuous value that can be sampled at any time
#[derive(Clone)]
pub struct Behavior<T> {
    sampler: Arc<dyn Fn() -> T + Send + Sync>,
}

impl<T: Debug> Debug for Behavior<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Behavior<{}>", std::any::type_name::<T>())
    }
}

impl<T: Clone + Debug + Send + Sync + 'static> Behavior<T> {
    /// Behavior that always returns `value`
    pub fn constant(value: T) -> Self {
        Self {
            sampler: Arc::new(move || value.clone()),
        }
    }

    /// Behavior backed by a sampling function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            sampler: Arc::new(f),
        }
    }

    /// Combine two behaviors pointwise
    pub fn apply2<U, V, F>(self, other: Behavior<U>, f: F) -> Behavior<V>
    where
        U: Clone + Debug + 'static,
        V: Clone + Debug + 'static,
        F: Fn(T, U) -> V + Send + Sync + 'static,
    {
        let left = self.sampler;
        let right = other.sampler;
        Behavior {
            sampler: Arc::new(move || f(left(), right())),
        }
    }
}

impl<T: Clone + Debug + Send + Sync + 'static> Signal<T> for Behavior<T> {
    type Mapped<U: Clone + Debug + Send + Sync + 'static> = Behavior<U>;

    fn map<U, F>(self, f: F) -> Self::Mapped<U>
    where
        F: Fn(T) -> U + Clone + Send + Sync + 'static,
        U: Clone + Debug + Send + Sync + 'static,
    {
        let sampler = self.sampler;
        Behavior {
            sampler: Arc::new(move || f(sampler())),
        }
    }
}

impl<T: Clone + Debug + Send + Sync + 'static> Samplable<T> for Behavior<T> {
    fn sample(&self) -> T {
        (self.sampler)()
    }
}
