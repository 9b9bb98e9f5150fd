// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Adapters for the round-side collaborators

pub mod alerts;
pub mod fake;
pub mod round;
pub mod traits;

pub use traits::{
    AlertSink, AmbientSource, FixedAmbient, HostError, Occurrence, PopulationSource, RoundHistory, RuleHost,
    RunningEvent,
};

pub use alerts::LogAlerts;
pub use fake::{FakeAlerts, FakeAmbient, FakeRound, RoundCall};
pub use round::RoundState;
