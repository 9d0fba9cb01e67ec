// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for analytics operations

use thiserror::Error;

use crate::aggregation::MatrixError;
use crate::cell::CellKeyError;
use crate::period::ParsePeriodError;

/// Errors that can occur around the analytics core
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Event store error, raised by [`EventStore`](crate::event_store::EventStore) backends
    #[error("Event store error: {0}")]
    Store(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Malformed grid cell key
    #[error(transparent)]
    CellKey(#[from] CellKeyError),

    /// Malformed matrix record
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    /// Unknown period name
    #[error(transparent)]
    Period(#[from] ParsePeriodError),
}

/// Result type for analytics operations
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl From<serde_json::Error> for AnalyticsError {
    fn from(err: serde_json::Error) -> Self {
        AnalyticsError::Serialization(err.to_string())
    }
}
