// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Collaborator traits the scheduler reads from and drives

use crate::definition::EventId;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

// =============================================================================
// Inputs
// =============================================================================

/// One past run of an event, stamped with round-elapsed time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub at: Duration,
    pub event: EventId,
}

impl Occurrence {
    pub fn new(at: Duration, event: impl Into<EventId>) -> Self {
        Self {
            at,
            event: event.into(),
        }
    }
}

/// Live population count
pub trait PopulationSource: Send + Sync {
    fn player_count(&self) -> u32;
}

/// Occurrence history and running set for the current round
pub trait RoundHistory: Send + Sync {
    /// All past occurrences, newest last
    fn occurrences(&self) -> Vec<Occurrence>;

    /// Whether an instance of this event is active right now
    fn is_running(&self, event: &EventId) -> bool;
}

/// Global ambient metric some definitions gate on
pub trait AmbientSource: Send + Sync {
    fn level(&self) -> f64;
}

/// Ambient metric pinned to one value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAmbient(pub f64);

impl AmbientSource for FixedAmbient {
    fn level(&self) -> f64 {
        self.0
    }
}

// =============================================================================
// Outputs
// =============================================================================

/// Handle to a started event instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunningEvent {
    pub event: EventId,
    pub instance: String,
}

impl fmt::Display for RunningEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.event, self.instance)
    }
}

/// Errors from starting an event
#[derive(Debug, Error)]
pub enum HostError {
    #[error("event already running: {0}")]
    AlreadyRunning(EventId),
    #[error("failed to start {event}: {reason}")]
    StartFailed { event: EventId, reason: String },
}

/// Instantiates chosen events in the host round
pub trait RuleHost: Send + Sync {
    fn start(&self, event: &EventId) -> Result<RunningEvent, HostError>;
}

/// Receives announcements for started events
pub trait AlertSink: Send + Sync {
    fn announce(&self, message: &str);
}
