// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event severity levels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::filter::Categorical;

/// Severity of a recorded event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Very fine-grained diagnostics
    Trace,
    /// Diagnostics
    Debug,
    /// Normal operation
    Info,
    /// Normal but significant
    Notice,
    /// Something unexpected
    Warning,
    /// Operation failed
    Error,
    /// Application cannot continue
    Critical,
}

impl Level {
    /// Every level, least severe first
    pub const ALL: [Level; 7] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Notice,
        Level::Warning,
        Level::Error,
        Level::Critical,
    ];

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Notice => "notice",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }

    /// Whether the level should draw attention in a list
    pub fn is_alert(&self) -> bool {
        matches!(self, Self::Warning | Self::Error | Self::Critical)
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::Info
    }
}

impl Categorical for Level {
    fn all() -> Vec<Self> {
        Self::ALL.to_vec()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a string names no level
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown level: {0}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "notice" => Ok(Self::Notice),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "critical" => Ok(Self::Critical),
            other => Err(ParseLevelError(other.to_string())),
        }
    }
}
