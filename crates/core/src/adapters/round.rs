// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process round state
//!
//! `RoundState` plays every round-side collaborator at once: it reports the
//! population, keeps the occurrence history, tracks which events are
//! running, and starts new instances when the scheduler asks it to.

use super::traits::{HostError, Occurrence, PopulationSource, RoundHistory, RuleHost, RunningEvent};
use crate::clock::RoundClock;
use crate::definition::EventId;
use crate::id::InstanceIds;
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Default)]
struct RoundInner {
    players: u32,
    history: Vec<Occurrence>,
    running: BTreeSet<EventId>,
}

/// Shared, cloneable round state
#[derive(Clone)]
pub struct RoundState<C: RoundClock + Clone, I: InstanceIds> {
    inner: Arc<Mutex<RoundInner>>,
    clock: C,
    ids: I,
}

impl<C: RoundClock + Clone, I: InstanceIds> RoundState<C, I> {
    pub fn new(clock: C, ids: I) -> Self {
        Self {
            inner: Arc::new(Mutex::new(RoundInner::default())),
            clock,
            ids,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn set_players(&self, players: u32) {
        self.lock().players = players;
    }

    /// Begin a new round: history and running set are cleared
    pub fn start_round(&self) {
        let mut inner = self.lock();
        inner.history.clear();
        inner.running.clear();
    }

    /// Append an occurrence without starting an instance
    pub fn record(&self, at: Duration, event: impl Into<EventId>) {
        self.lock().history.push(Occurrence::new(at, event));
    }

    /// Mark a running event as finished. Returns false if it was not running.
    pub fn end_event(&self, event: &EventId) -> bool {
        self.lock().running.remove(event)
    }

    pub fn running(&self) -> Vec<EventId> {
        self.lock().running.iter().cloned().collect()
    }

    pub fn history(&self) -> Vec<Occurrence> {
        self.lock().history.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RoundInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<C: RoundClock + Clone, I: InstanceIds> PopulationSource for RoundState<C, I> {
    fn player_count(&self) -> u32 {
        self.lock().players
    }
}

impl<C: RoundClock + Clone, I: InstanceIds> RoundHistory for RoundState<C, I> {
    fn occurrences(&self) -> Vec<Occurrence> {
        self.history()
    }

    fn is_running(&self, event: &EventId) -> bool {
        self.lock().running.contains(event)
    }
}

impl<C: RoundClock + Clone, I: InstanceIds> RuleHost for RoundState<C, I> {
    fn start(&self, event: &EventId) -> Result<RunningEvent, HostError> {
        let at = self.clock.elapsed();
        let mut inner = self.lock();
        if !inner.running.insert(event.clone()) {
            return Err(HostError::AlreadyRunning(event.clone()));
        }
        inner.history.push(Occurrence::new(at, event.clone()));
        drop(inner);

        let instance = self.ids.next_instance(event);
        tracing::debug!(%event, %instance, ?at, "event instance started");
        Ok(RunningEvent {
            event: event.clone(),
            instance,
        })
    }
}

#[cfg(test)]
#[path = "round_tests.rs"]
mod tests;
