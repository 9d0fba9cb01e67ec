// Copyright (c) 2025 - Cowboy AI, Inc.
//! Observable Values
//!
//! Small reactive primitives used at the seam between the analytics core and
//! the host UI.
//!
//! ## Binding<T>
//!
//! A shared, writable value owned outside the core. Writers call
//! [`Binding::set`]; observers registered with [`Binding::subscribe`] are
//! called with every new value.
//!
//! ```text
//! FilterCriteria ──finish()──> Binding<Set<Level>> ──notify──> observers
//! ```
//!
//! ## Behavior<T>
//!
//! A read-only value that can be sampled at any moment. A binding hands out
//! a behavior view so readers can never write.
//!
//! ```rust,ignore
//! use event_analytics::frp::*;
//!
//! let levels = Binding::new(3);
//! let doubled = levels.behavior().map(|n| n * 2);
//! levels.set(5);
//! assert_eq!(doubled.sample(), 10);
//! ```

pub mod behavior;
pub mod binding;
pub mod signal;

pub use behavior::Behavior;
pub use binding::{Binding, SubscriptionId};
pub use signal::{Samplable, Signal};
