// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake collaborators with call recording for testing

use super::traits::*;
use crate::definition::{from_minutes, EventId};
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

/// Recorded call to a round collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundCall {
    PlayerCount,
    Occurrences,
    IsRunning { event: EventId },
    Start { event: EventId },
}

#[derive(Default)]
struct FakeRoundState {
    calls: Vec<RoundCall>,
    players: u32,
    history: Vec<Occurrence>,
    running: BTreeSet<EventId>,
    next_instance: u32,
    start_fails: bool,
}

/// Fake population, history and rule host in one
#[derive(Clone, Default)]
pub struct FakeRound {
    state: Arc<Mutex<FakeRoundState>>,
}

impl FakeRound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_players(self, players: u32) -> Self {
        self.set_players(players);
        self
    }

    pub fn set_players(&self, players: u32) {
        self.lock().players = players;
    }

    /// Append an occurrence at the given round minute
    pub fn push_occurrence(&self, minute: f64, event: impl Into<EventId>) {
        self.lock()
            .history
            .push(Occurrence::new(from_minutes(minute), event));
    }

    pub fn set_running(&self, event: impl Into<EventId>) {
        self.lock().running.insert(event.into());
    }

    /// Make every `start` call fail
    pub fn set_start_fails(&self, fails: bool) {
        self.lock().start_fails = fails;
    }

    pub fn calls(&self) -> Vec<RoundCall> {
        self.lock().calls.clone()
    }

    /// Events passed to `start`, in call order
    pub fn started(&self) -> Vec<EventId> {
        self.lock()
            .calls
            .iter()
            .filter_map(|c| match c {
                RoundCall::Start { event } => Some(event.clone()),
                _ => None,
            })
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeRoundState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl PopulationSource for FakeRound {
    fn player_count(&self) -> u32 {
        let mut state = self.lock();
        state.calls.push(RoundCall::PlayerCount);
        state.players
    }
}

impl RoundHistory for FakeRound {
    fn occurrences(&self) -> Vec<Occurrence> {
        let mut state = self.lock();
        state.calls.push(RoundCall::Occurrences);
        state.history.clone()
    }

    fn is_running(&self, event: &EventId) -> bool {
        let mut state = self.lock();
        state.calls.push(RoundCall::IsRunning {
            event: event.clone(),
        });
        state.running.contains(event)
    }
}

impl RuleHost for FakeRound {
    fn start(&self, event: &EventId) -> Result<RunningEvent, HostError> {
        let mut state = self.lock();
        state.calls.push(RoundCall::Start {
            event: event.clone(),
        });
        if state.start_fails {
            return Err(HostError::StartFailed {
                event: event.clone(),
                reason: "fake failure".to_string(),
            });
        }
        state.next_instance += 1;
        state.running.insert(event.clone());
        Ok(RunningEvent {
            event: event.clone(),
            instance: format!("fake-{}", state.next_instance),
        })
    }
}

/// Alert sink that keeps every message
#[derive(Clone, Default)]
pub struct FakeAlerts {
    messages: Arc<Mutex<Vec<String>>>,
}

impl FakeAlerts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl AlertSink for FakeAlerts {
    fn announce(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.to_string());
    }
}

/// Settable ambient metric that counts reads
#[derive(Clone, Default)]
pub struct FakeAmbient {
    state: Arc<Mutex<(f64, usize)>>,
}

impl FakeAmbient {
    pub fn new(level: f64) -> Self {
        Self {
            state: Arc::new(Mutex::new((level, 0))),
        }
    }

    pub fn set(&self, level: f64) {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).0 = level;
    }

    /// Number of times `level` has been read
    pub fn reads(&self) -> usize {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).1
    }
}

impl AmbientSource for FakeAmbient {
    fn level(&self) -> f64 {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.1 += 1;
        state.0
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
