// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The scheduler facade
//!
//! [`EventScheduler`] ties the pieces together: it evaluates eligibility,
//! draws a winner, asks the rule host to start it and announces the result.
//! It owns the enable flag and the automatic timer, and drains host signals
//! on demand through [`EventScheduler::pump`].

use crate::adapters::{AlertSink, AmbientSource, PopulationSource, RoundHistory, RuleHost};
use crate::catalog::CatalogSource;
use crate::clock::RoundClock;
use crate::condition::{ConditionDeps, ConditionRegistry, EventCondition, RegistryError};
use crate::config::SchedulerConfig;
use crate::definition::{EventDefinition, EventId};
use crate::eligibility::{EligibilityFilter, EligibleSet, EvaluationOptions, Verdict};
use crate::selector::WeightedSelector;
use crate::signals::{signal_channel, SchedulerSignal, SignalReceiver, SignalSender};
use crate::timer::EventTimer;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::sync::Arc;

/// Message returned when nothing could be picked
pub const NO_VALID_EVENTS: &str = "No valid events available";

/// External collaborators the scheduler reads from and drives
#[derive(Clone)]
pub struct SchedulerDeps {
    pub catalog: Arc<dyn CatalogSource>,
    pub population: Arc<dyn PopulationSource>,
    pub history: Arc<dyn RoundHistory>,
    pub host: Arc<dyn RuleHost>,
    pub clock: Arc<dyn RoundClock>,
    pub alerts: Arc<dyn AlertSink>,
    pub ambient: Option<Arc<dyn AmbientSource>>,
}

impl SchedulerDeps {
    /// Wire a single round object as population, history and rule host
    pub fn new<R>(
        catalog: impl CatalogSource + 'static,
        round: R,
        clock: impl RoundClock + 'static,
        alerts: impl AlertSink + 'static,
    ) -> Self
    where
        R: PopulationSource + RoundHistory + RuleHost + 'static,
    {
        let round = Arc::new(round);
        Self {
            catalog: Arc::new(catalog),
            population: round.clone(),
            history: round.clone(),
            host: round,
            clock: Arc::new(clock),
            alerts: Arc::new(alerts),
            ambient: None,
        }
    }

    pub fn with_ambient(mut self, ambient: impl AmbientSource + 'static) -> Self {
        self.ambient = Some(Arc::new(ambient));
        self
    }

    fn conditions(&self) -> ConditionDeps<'_> {
        ConditionDeps {
            catalog: self.catalog.as_ref(),
            history: self.history.as_ref(),
            population: self.population.as_ref(),
            clock: self.clock.as_ref(),
            ambient: self.ambient.as_deref(),
        }
    }
}

/// What a call to [`EventScheduler::run_random_event`] did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RunOutcome {
    Started {
        event: EventId,
        instance: String,
        message: String,
    },
    NoValidEvents {
        message: String,
    },
    /// The rule host refused; nothing was announced
    StartFailed {
        event: EventId,
        message: String,
    },
}

impl RunOutcome {
    pub fn message(&self) -> &str {
        match self {
            RunOutcome::Started { message, .. }
            | RunOutcome::NoValidEvents { message }
            | RunOutcome::StartFailed { message, .. } => message,
        }
    }

    pub fn started(&self) -> Option<&EventId> {
        match self {
            RunOutcome::Started { event, .. } => Some(event),
            _ => None,
        }
    }
}

pub struct EventScheduler {
    deps: SchedulerDeps,
    registry: ConditionRegistry,
    selector: WeightedSelector,
    ambient_gating: bool,
    enabled: bool,
    rng: StdRng,
    timer: EventTimer,
    signals: Option<SignalReceiver>,
}

impl EventScheduler {
    /// Build a scheduler; every plugin in `registry` is initialized here
    pub fn new(
        deps: SchedulerDeps,
        mut registry: ConditionRegistry,
        config: &SchedulerConfig,
    ) -> Self {
        let initialized = registry.initialize(&deps.conditions());
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        tracing::debug!(
            conditions = initialized,
            seed = ?config.seed,
            mode = ?config.weight_mode,
            "event scheduler ready"
        );

        Self {
            deps,
            registry,
            selector: WeightedSelector::new(config.weight_mode),
            ambient_gating: config.ambient_gating,
            enabled: config.events_enabled,
            rng,
            timer: EventTimer::new(&config.timer),
            signals: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flip the master switch. Evaluation and manual runs ignore it; only
    /// the automatic timer checks it.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            tracing::info!(enabled, "random events toggled");
        }
        self.enabled = enabled;
    }

    pub fn registry(&self) -> &ConditionRegistry {
        &self.registry
    }

    /// Register and initialize a condition plugin after construction
    pub fn register_condition(
        &mut self,
        id: impl Into<String>,
        plugin: impl EventCondition + 'static,
    ) -> Result<(), RegistryError> {
        self.registry.register(id, plugin)?;
        self.registry.initialize(&self.deps.conditions());
        Ok(())
    }

    pub fn timer(&self) -> &EventTimer {
        &self.timer
    }

    pub fn reset_timer(&mut self) {
        self.timer.reset();
    }

    /// Every instantiable definition in the catalog
    pub fn all_events(&self) -> Vec<EventDefinition> {
        self.deps.catalog.all_definitions()
    }

    pub fn available_events(&mut self, options: EvaluationOptions) -> EligibleSet {
        EligibilityFilter::new(self.deps.conditions())
            .with_ambient_gating(self.ambient_gating)
            .evaluate(&mut self.registry, options)
    }

    /// Per-definition verdicts for the same pass `available_events` runs
    pub fn explain(&mut self, options: EvaluationOptions) -> Vec<Verdict> {
        EligibilityFilter::new(self.deps.conditions())
            .with_ambient_gating(self.ambient_gating)
            .explain(&mut self.registry, options)
    }

    /// Weighted draw over an already evaluated set
    pub fn find_event(&mut self, eligible: &EligibleSet) -> Option<EventId> {
        self.selector.pick(eligible, &mut self.rng)
    }

    /// Evaluate and draw without side effects on the round
    pub fn pick_random_event(&mut self) -> Option<EventId> {
        self.pick_random_event_with(EvaluationOptions::default())
    }

    pub fn pick_random_event_with(&mut self, options: EvaluationOptions) -> Option<EventId> {
        let eligible = self.available_events(options);
        tracing::info!(available = eligible.len(), "picking random event");
        self.find_event(&eligible)
    }

    /// Evaluate, draw, start the winner and announce it
    pub fn run_random_event(&mut self) -> RunOutcome {
        let eligible = self.available_events(EvaluationOptions::default());
        tracing::info!(available = eligible.len(), "running random event");

        let Some(event) = self.find_event(&eligible) else {
            tracing::info!("{}", NO_VALID_EVENTS);
            return RunOutcome::NoValidEvents {
                message: NO_VALID_EVENTS.to_string(),
            };
        };
        let name = eligible
            .get(&event)
            .map(|d| d.name.clone())
            .unwrap_or_else(|| event.to_string());

        match self.deps.host.start(&event) {
            Ok(running) => {
                let message = format!("Running event: {} ({})", name, running.instance);
                self.deps.alerts.announce(&message);
                tracing::info!(event = %event, instance = %running.instance, "event started");
                RunOutcome::Started {
                    event,
                    instance: running.instance,
                    message,
                }
            }
            Err(e) => {
                tracing::warn!(event = %event, error = %e, "rule host refused event");
                RunOutcome::StartFailed {
                    message: format!("Failed to start {}: {}", name, e),
                    event,
                }
            }
        }
    }

    /// Advance the automatic timer; runs an event when it fires while enabled
    pub fn tick(&mut self) -> Option<RunOutcome> {
        let now = self.deps.clock.elapsed();
        if !self.timer.poll(now, &mut self.rng) {
            return None;
        }
        if !self.enabled {
            tracing::debug!("event timer fired while events are disabled");
            return None;
        }
        Some(self.run_random_event())
    }

    /// Create a signal channel and attach its receiving end
    pub fn connect(&mut self) -> SignalSender {
        let (tx, rx) = signal_channel();
        self.attach(rx);
        tx
    }

    /// Attach a signal receiver, replacing any previous one
    pub fn attach(&mut self, signals: SignalReceiver) {
        self.signals = Some(signals);
    }

    /// Drain every pending signal and return the outcomes of any runs
    pub fn pump(&mut self) -> Vec<RunOutcome> {
        let mut outcomes = Vec::new();
        while let Some(signal) = self.next_signal() {
            match signal {
                SchedulerSignal::EventsEnabledChanged(enabled) => self.set_enabled(enabled),
                SchedulerSignal::RoundStarted => self.reset_timer(),
                SchedulerSignal::Tick => outcomes.extend(self.tick()),
            }
        }
        outcomes
    }

    fn next_signal(&mut self) -> Option<SchedulerSignal> {
        self.signals.as_mut()?.try_recv().ok()
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
