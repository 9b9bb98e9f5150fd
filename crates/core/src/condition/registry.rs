// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registry of condition plugins keyed by id

use super::builtin::{
    AmbientLevelCondition, PlayerCountCondition, PriorEventCondition, RoundTimeCondition,
};
use super::{ConditionDeps, EvaluationContext, EventCondition};
use crate::definition::{ConditionId, ConditionRef, EventDefinition};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("condition already registered: {0}")]
    Duplicate(ConditionId),
}

/// Effective outcome of one condition use-site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionCheck {
    /// Holds after the inversion flag is applied
    Met,
    NotMet,
    /// No plugin registered under the referenced id
    Unknown,
}

struct Entry {
    plugin: Box<dyn EventCondition>,
    initialized: bool,
}

/// Owns every condition plugin for one scheduler
#[derive(Default)]
pub struct ConditionRegistry {
    entries: BTreeMap<ConditionId, Entry>,
}

impl ConditionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the built-in plugins
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.insert(
            ConditionId::new(PlayerCountCondition::ID),
            Box::new(PlayerCountCondition),
        );
        registry.insert(
            ConditionId::new(AmbientLevelCondition::ID),
            Box::new(AmbientLevelCondition::default()),
        );
        registry.insert(
            ConditionId::new(PriorEventCondition::ID),
            Box::new(PriorEventCondition),
        );
        registry.insert(
            ConditionId::new(RoundTimeCondition::ID),
            Box::new(RoundTimeCondition),
        );
        registry
    }

    pub fn register(
        &mut self,
        id: impl Into<String>,
        plugin: impl EventCondition + 'static,
    ) -> Result<(), RegistryError> {
        let id = ConditionId::new(id);
        if self.entries.contains_key(&id) {
            return Err(RegistryError::Duplicate(id));
        }
        self.insert(id, Box::new(plugin));
        Ok(())
    }

    fn insert(&mut self, id: ConditionId, plugin: Box<dyn EventCondition>) {
        self.entries.insert(
            id,
            Entry {
                plugin,
                initialized: false,
            },
        );
    }

    pub fn contains(&self, id: &ConditionId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &ConditionId> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Initialize plugins that have not been initialized yet.
    /// Returns how many were initialized by this call.
    pub fn initialize(&mut self, deps: &ConditionDeps<'_>) -> usize {
        let mut count = 0;
        for (id, entry) in self.entries.iter_mut().filter(|(_, e)| !e.initialized) {
            entry.plugin.initialize(deps);
            entry.initialized = true;
            tracing::debug!(condition = %id, "condition initialized");
            count += 1;
        }
        count
    }

    /// Let every plugin snapshot volatile state for the coming pass
    pub fn refresh(&mut self, deps: &ConditionDeps<'_>) {
        for entry in self.entries.values_mut() {
            entry.plugin.refresh(deps);
        }
    }

    pub fn check(
        &self,
        condition: &ConditionRef,
        definition: &EventDefinition,
        context: &EvaluationContext<'_>,
    ) -> ConditionCheck {
        let Some(entry) = self.entries.get(&condition.condition) else {
            return ConditionCheck::Unknown;
        };
        if condition.inverted ^ entry.plugin.is_met(definition, condition, context) {
            ConditionCheck::Met
        } else {
            ConditionCheck::NotMet
        }
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
