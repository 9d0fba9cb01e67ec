// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! - active-user windows
//! - cell algebra laws
//! - aggregation invariants
//! - extent navigation boundaries
//! - filter session semantics

mod activity;
mod aggregation;
mod cell_algebra;
mod extent_navigation;
mod filter_session;
