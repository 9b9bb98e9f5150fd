// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Eligibility filtering
//!
//! One evaluation pass resolves the player count and current time, refreshes
//! every condition plugin, snapshots the occurrence history, and then runs
//! each catalog definition through the gating rules in order. The first rule
//! that fails rejects the definition.

use crate::adapters::RoundHistory;
use crate::condition::{ConditionCheck, ConditionDeps, ConditionRegistry, EvaluationContext};
use crate::definition::{minutes, AmbientBound, ConditionId, EventDefinition, EventId};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Overrides for one evaluation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluationOptions {
    /// Force current time to zero when no explicit time is given
    pub ignore_earliest_start: bool,
    pub player_count: Option<u32>,
    pub current_time: Option<Duration>,
}

impl EvaluationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignoring_earliest_start(mut self) -> Self {
        self.ignore_earliest_start = true;
        self
    }

    pub fn with_player_count(mut self, players: u32) -> Self {
        self.player_count = Some(players);
        self
    }

    pub fn with_current_time(mut self, time: Duration) -> Self {
        self.current_time = Some(time);
        self
    }
}

/// Why a definition was left out of the eligible set
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    NonPositiveWeight { weight: f64 },
    AlreadyRunning,
    MaxOccurrences { occurred: usize, max: u32 },
    TooFewPlayers { players: u32, required: u32 },
    TooEarly { minutes: f64, earliest: f64 },
    Reoccurring { minutes: f64, available_at: f64 },
    AmbientOutOfBounds { level: f64, bound: AmbientBound },
    ConditionNotMet { condition: ConditionId, inverted: bool },
    UnknownCondition { condition: ConditionId },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NonPositiveWeight { weight } => {
                write!(f, "weight {} is not positive", weight)
            }
            Rejection::AlreadyRunning => write!(f, "already running"),
            Rejection::MaxOccurrences { occurred, max } => {
                write!(f, "occurred {} of {} allowed times", occurred, max)
            }
            Rejection::TooFewPlayers { players, required } => {
                write!(f, "{} players, needs {}", players, required)
            }
            Rejection::TooEarly { minutes, earliest } => {
                write!(f, "minute {:.1}, earliest start {:.1}", minutes, earliest)
            }
            Rejection::Reoccurring {
                minutes,
                available_at,
            } => write!(f, "minute {:.1}, can recur at {:.1}", minutes, available_at),
            Rejection::AmbientOutOfBounds { level, bound } => {
                write!(f, "ambient level {} outside {}", level, bound)
            }
            Rejection::ConditionNotMet {
                condition,
                inverted: false,
            } => write!(f, "condition {} not met", condition),
            Rejection::ConditionNotMet {
                condition,
                inverted: true,
            } => write!(f, "inverted condition {} not met", condition),
            Rejection::UnknownCondition { condition } => {
                write!(f, "unknown condition {}", condition)
            }
        }
    }
}

/// Definitions that passed every rule in one pass, ordered by id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EligibleSet {
    events: BTreeMap<EventId, EventDefinition>,
}

impl EligibleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, definition: EventDefinition) {
        self.events.insert(definition.id.clone(), definition);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn contains(&self, id: &EventId) -> bool {
        self.events.contains_key(id)
    }

    pub fn get(&self, id: &EventId) -> Option<&EventDefinition> {
        self.events.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &EventId> {
        self.events.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EventDefinition> {
        self.events.values()
    }
}

impl FromIterator<EventDefinition> for EligibleSet {
    fn from_iter<T: IntoIterator<Item = EventDefinition>>(iter: T) -> Self {
        let mut set = Self::new();
        for definition in iter {
            set.insert(definition);
        }
        set
    }
}

/// Outcome for one definition, as reported by [`EligibilityFilter::explain`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub definition: EventDefinition,
    pub rejection: Option<Rejection>,
}

impl Verdict {
    pub fn is_eligible(&self) -> bool {
        self.rejection.is_none()
    }
}

/// Applies the gating rules to every catalog definition
pub struct EligibilityFilter<'a> {
    deps: ConditionDeps<'a>,
    ambient_gating: bool,
}

impl<'a> EligibilityFilter<'a> {
    pub fn new(deps: ConditionDeps<'a>) -> Self {
        Self {
            deps,
            ambient_gating: false,
        }
    }

    /// Turn on the ambient bound check for definitions that declare one
    pub fn with_ambient_gating(mut self, enabled: bool) -> Self {
        self.ambient_gating = enabled;
        self
    }

    pub fn evaluate(
        &self,
        registry: &mut ConditionRegistry,
        options: EvaluationOptions,
    ) -> EligibleSet {
        let mut eligible = EligibleSet::new();
        self.pass(registry, options, |definition, rejection| match rejection {
            None => eligible.insert(definition),
            Some(reason) => {
                tracing::debug!(event = %definition.id, %reason, "event rejected");
            }
        });
        eligible
    }

    /// Like `evaluate`, but keeps every definition with its verdict
    pub fn explain(
        &self,
        registry: &mut ConditionRegistry,
        options: EvaluationOptions,
    ) -> Vec<Verdict> {
        let mut verdicts = Vec::new();
        self.pass(registry, options, |definition, rejection| {
            verdicts.push(Verdict {
                definition,
                rejection,
            })
        });
        verdicts
    }

    fn pass(
        &self,
        registry: &mut ConditionRegistry,
        options: EvaluationOptions,
        mut visit: impl FnMut(EventDefinition, Option<Rejection>),
    ) {
        let player_count = options
            .player_count
            .unwrap_or_else(|| self.deps.population.player_count());
        let current_time = options.current_time.unwrap_or_else(|| {
            if options.ignore_earliest_start {
                Duration::ZERO
            } else {
                self.deps.clock.elapsed()
            }
        });

        registry.refresh(&self.deps);

        let history = self.deps.history.occurrences();
        let ambient_level = match (self.ambient_gating, self.deps.ambient) {
            (true, Some(ambient)) => Some(ambient.level()),
            _ => None,
        };
        let gate = Gate {
            registry,
            history: self.deps.history,
            context: EvaluationContext::new(player_count, current_time, &history),
            ambient_level,
        };

        for definition in self.deps.catalog.all_definitions() {
            let rejection = gate.check(&definition).err();
            visit(definition, rejection);
        }
    }
}

/// The rule chain for one pass
struct Gate<'a> {
    registry: &'a ConditionRegistry,
    history: &'a dyn RoundHistory,
    context: EvaluationContext<'a>,
    ambient_level: Option<f64>,
}

impl Gate<'_> {
    fn check(&self, definition: &EventDefinition) -> Result<(), Rejection> {
        let ctx = &self.context;

        if !(definition.weight > 0.0 && definition.weight.is_finite()) {
            return Err(Rejection::NonPositiveWeight {
                weight: definition.weight,
            });
        }

        if self.history.is_running(&definition.id) {
            return Err(Rejection::AlreadyRunning);
        }

        if let Some(max) = definition.max_occurrences {
            let occurred = ctx.occurrences_of(&definition.id);
            if occurred >= max as usize {
                return Err(Rejection::MaxOccurrences { occurred, max });
            }
        }

        if ctx.player_count < definition.min_players {
            return Err(Rejection::TooFewPlayers {
                players: ctx.player_count,
                required: definition.min_players,
            });
        }

        // Zero current time switches off both time rules
        let now = ctx.current_minutes();
        if !ctx.current_time.is_zero() && now < definition.earliest_start {
            return Err(Rejection::TooEarly {
                minutes: now,
                earliest: definition.earliest_start,
            });
        }

        // A last occurrence at exactly zero reads as "never ran"
        let last = ctx.last_occurrence(&definition.id);
        if !ctx.current_time.is_zero() && !last.is_zero() {
            let available_at = definition.reoccurrence_delay + minutes(last);
            if now < available_at {
                return Err(Rejection::Reoccurring {
                    minutes: now,
                    available_at,
                });
            }
        }

        if let (Some(level), Some(bound)) = (self.ambient_level, definition.ambient) {
            if !bound.contains(level) {
                return Err(Rejection::AmbientOutOfBounds { level, bound });
            }
        }

        for condition in &definition.conditions {
            match self.registry.check(condition, definition, ctx) {
                ConditionCheck::Met => {}
                ConditionCheck::NotMet => {
                    return Err(Rejection::ConditionNotMet {
                        condition: condition.condition.clone(),
                        inverted: condition.inverted,
                    });
                }
                ConditionCheck::Unknown => {
                    tracing::warn!(
                        event = %definition.id,
                        condition = %condition.condition,
                        "event references an unregistered condition"
                    );
                    return Err(Rejection::UnknownCondition {
                        condition: condition.condition.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "eligibility_tests.rs"]
mod tests;
