// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pluggable eligibility conditions
//!
//! A condition plugin answers one yes/no question about a definition. Each
//! plugin goes through three stages:
//! - **initialize**: once, when the registry is wired to its collaborators
//! - **refresh**: once at the start of every evaluation pass, before any
//!   `is_met` call, so volatile state is read a single time per pass
//! - **is_met**: per candidate, pure over the refreshed snapshot

mod builtin;
mod predicate;
mod registry;

pub use builtin::{
    AmbientLevelCondition, PlayerCountCondition, PriorEventCondition, RoundTimeCondition,
};
pub use predicate::PredicateCondition;
pub use registry::{ConditionCheck, ConditionRegistry, RegistryError};

use crate::adapters::{AmbientSource, Occurrence, PopulationSource, RoundHistory};
use crate::catalog::CatalogSource;
use crate::clock::RoundClock;
use crate::definition::{minutes, ConditionRef, EventDefinition, EventId};
use std::time::Duration;

/// Collaborators a plugin may read during initialize and refresh
#[derive(Clone, Copy)]
pub struct ConditionDeps<'a> {
    pub catalog: &'a dyn CatalogSource,
    pub history: &'a dyn RoundHistory,
    pub population: &'a dyn PopulationSource,
    pub clock: &'a dyn RoundClock,
    pub ambient: Option<&'a dyn AmbientSource>,
}

/// Per-pass inputs shared by every candidate
#[derive(Debug, Clone, Copy)]
pub struct EvaluationContext<'a> {
    pub player_count: u32,
    /// Zero means earliest-start and reoccurrence gating are off
    pub current_time: Duration,
    /// Occurrence snapshot, newest last
    pub history: &'a [Occurrence],
}

impl<'a> EvaluationContext<'a> {
    pub fn new(player_count: u32, current_time: Duration, history: &'a [Occurrence]) -> Self {
        Self {
            player_count,
            current_time,
            history,
        }
    }

    pub fn current_minutes(&self) -> f64 {
        minutes(self.current_time)
    }

    pub fn occurrences_of(&self, event: &EventId) -> usize {
        self.history.iter().filter(|o| &o.event == event).count()
    }

    /// Time of the newest occurrence, or zero if the event never ran
    pub fn last_occurrence(&self, event: &EventId) -> Duration {
        self.history
            .iter()
            .rev()
            .find(|o| &o.event == event)
            .map(|o| o.at)
            .unwrap_or(Duration::ZERO)
    }
}

/// An eligibility predicate plugin
pub trait EventCondition: Send + Sync {
    fn initialize(&mut self, _deps: &ConditionDeps<'_>) {}

    fn refresh(&mut self, _deps: &ConditionDeps<'_>) {}

    /// Raw answer, before the use-site's inversion flag is applied
    fn is_met(
        &self,
        definition: &EventDefinition,
        condition: &ConditionRef,
        context: &EvaluationContext<'_>,
    ) -> bool;
}
