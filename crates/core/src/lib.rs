// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! stev-core: weighted random event scheduling for game rounds
//!
//! This crate provides:
//! - Event definitions and catalog sources (in-memory or TOML files)
//! - Pluggable eligibility conditions with a per-pass refresh lifecycle
//! - The eligibility filter and the weighted selector
//! - The [`EventScheduler`] facade with its enable flag, timer and signals

pub mod adapters;
pub mod catalog;
pub mod clock;
pub mod condition;
pub mod config;
pub mod definition;
pub mod eligibility;
pub mod id;
pub mod scheduler;
pub mod selector;
pub mod signals;
pub mod timer;

pub use adapters::{
    AlertSink, AmbientSource, FakeAlerts, FakeAmbient, FakeRound, FixedAmbient, HostError,
    LogAlerts, Occurrence, PopulationSource, RoundHistory, RoundState, RuleHost, RunningEvent,
};
pub use catalog::{CatalogError, CatalogSource, FileCatalog, StaticCatalog};
pub use clock::{ManualRoundClock, RoundClock, SystemRoundClock};
pub use condition::{
    ConditionDeps, ConditionRegistry, EvaluationContext, EventCondition, PredicateCondition,
    RegistryError,
};
pub use config::{ConfigError, SchedulerConfig, TimerConfig};
pub use definition::{AmbientBound, ConditionId, ConditionRef, EventDefinition, EventId};
pub use eligibility::{EligibilityFilter, EligibleSet, EvaluationOptions, Rejection, Verdict};
pub use id::{InstanceIds, RandomInstanceIds, SequentialInstanceIds};
pub use scheduler::{EventScheduler, RunOutcome, SchedulerDeps, NO_VALID_EVENTS};
pub use selector::{WeightMode, WeightedSelector};
pub use signals::{signal_channel, SchedulerSignal, SignalReceiver, SignalSender};
pub use timer::EventTimer;
