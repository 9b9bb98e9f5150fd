// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in condition plugins

use super::{ConditionDeps, EvaluationContext, EventCondition};
use crate::definition::{ConditionRef, EventDefinition, EventId};

/// Population window: args `min` (default 0) and optional `max`, inclusive
#[derive(Debug, Default)]
pub struct PlayerCountCondition;

impl PlayerCountCondition {
    pub const ID: &'static str = "player_count";
}

impl EventCondition for PlayerCountCondition {
    fn is_met(
        &self,
        _definition: &EventDefinition,
        condition: &ConditionRef,
        context: &EvaluationContext<'_>,
    ) -> bool {
        let players = context.player_count;
        let min = condition.arg_u32("min").unwrap_or(0);
        players >= min && condition.arg_u32("max").map_or(true, |max| players <= max)
    }
}

/// Ambient metric window: args `min` and `max`, inclusive.
/// Never met when no ambient source is wired.
#[derive(Debug, Default)]
pub struct AmbientLevelCondition {
    level: Option<f64>,
}

impl AmbientLevelCondition {
    pub const ID: &'static str = "ambient_level";
}

impl EventCondition for AmbientLevelCondition {
    fn refresh(&mut self, deps: &ConditionDeps<'_>) {
        self.level = deps.ambient.map(|a| a.level());
    }

    fn is_met(
        &self,
        _definition: &EventDefinition,
        condition: &ConditionRef,
        _context: &EvaluationContext<'_>,
    ) -> bool {
        let Some(level) = self.level else {
            return false;
        };
        let min = condition.arg_f64("min").unwrap_or(f64::NEG_INFINITY);
        let max = condition.arg_f64("max").unwrap_or(f64::INFINITY);
        level >= min && level <= max
    }
}

/// Requires another event to have run: args `event` and `min` (default 1)
#[derive(Debug, Default)]
pub struct PriorEventCondition;

impl PriorEventCondition {
    pub const ID: &'static str = "prior_event";
}

impl EventCondition for PriorEventCondition {
    fn initialize(&mut self, deps: &ConditionDeps<'_>) {
        let definitions = deps.catalog.all_definitions();
        for definition in &definitions {
            let uses = definition
                .conditions
                .iter()
                .filter(|c| c.condition.as_str() == Self::ID);
            for condition in uses {
                let Some(target) = condition.arg("event") else {
                    tracing::warn!(event = %definition.id, "prior_event without `event` argument");
                    continue;
                };
                if !definitions.iter().any(|d| d.id.as_str() == target) {
                    tracing::warn!(event = %definition.id, target, "prior_event target not in catalog");
                }
            }
        }
    }

    fn is_met(
        &self,
        _definition: &EventDefinition,
        condition: &ConditionRef,
        context: &EvaluationContext<'_>,
    ) -> bool {
        let Some(target) = condition.arg("event") else {
            return false;
        };
        let min = condition.arg_u32("min").unwrap_or(1) as usize;
        context.occurrences_of(&EventId::new(target)) >= min
    }
}

/// Round-time window in minutes: args `after` (inclusive) and `before` (exclusive)
#[derive(Debug, Default)]
pub struct RoundTimeCondition;

impl RoundTimeCondition {
    pub const ID: &'static str = "round_time";
}

impl EventCondition for RoundTimeCondition {
    fn is_met(
        &self,
        _definition: &EventDefinition,
        condition: &ConditionRef,
        context: &EvaluationContext<'_>,
    ) -> bool {
        let now = context.current_minutes();
        condition.arg_f64("after").map_or(true, |after| now >= after)
            && condition.arg_f64("before").map_or(true, |before| now < before)
    }
}

#[cfg(test)]
#[path = "builtin_tests.rs"]
mod tests;
