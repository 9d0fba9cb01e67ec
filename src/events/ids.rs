// Copyright (c) 2025 - Cowboy AI, Inc.
//! Identifier provider
//!
//! Stable user, session and launch identifiers come from the host
//! application. The crate never reaches for process-wide state; callers pass
//! an [`IdProvider`] in when they tag events.

use uuid::Uuid;

/// Source of the identifiers attached to recorded events
pub trait IdProvider: Send + Sync {
    /// Installation-wide user identifier
    fn user_id(&self) -> Uuid;

    /// Current session identifier
    fn session_id(&self) -> Uuid;

    /// Current process launch identifier
    fn launch_id(&self) -> Uuid;
}

/// Identifiers fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedIds {
    user_id: Uuid,
    session_id: Uuid,
    launch_id: Uuid,
}

impl FixedIds {
    /// Use the given identifiers
    pub fn new(user_id: Uuid, session_id: Uuid, launch_id: Uuid) -> Self {
        Self {
            user_id,
            session_id,
            launch_id,
        }
    }

    /// Fresh random identifiers
    pub fn random() -> Self {
        Self::new(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4())
    }

    /// Same user and launch, new session
    pub fn next_session(&self) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            ..*self
        }
    }
}

impl IdProvider for FixedIds {
    fn user_id(&self) -> Uuid {
        self.user_id
    }

    fn session_id(&self) -> Uuid {
        self.session_id
    }

    fn launch_id(&self) -> Uuid {
        self.launch_id
    }
}
