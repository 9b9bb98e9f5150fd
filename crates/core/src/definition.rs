// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event definitions as read from the catalog
//!
//! An [`EventDefinition`] is immutable once loaded. It carries the static
//! gating metadata (population floor, earliest start, reoccurrence delay,
//! occurrence cap) and the ordered list of custom conditions that must hold
//! before the event can be picked.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Unique identifier for an event definition
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EventId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Identifier a condition plugin is registered under
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionId(pub String);

impl ConditionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConditionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ConditionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Inclusive bound on the ambient metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmbientBound {
    pub min: f64,
    pub max: f64,
}

impl AmbientBound {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, level: f64) -> bool {
        level >= self.min && level <= self.max
    }
}

impl fmt::Display for AmbientBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// A use-site of a condition plugin inside a definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionRef {
    pub condition: ConditionId,
    /// Negates the plugin's answer
    #[serde(default)]
    pub inverted: bool,
    /// Plugin-specific arguments
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub args: BTreeMap<String, String>,
}

impl ConditionRef {
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: ConditionId::new(condition),
            inverted: false,
            args: BTreeMap::new(),
        }
    }

    pub fn inverted(mut self) -> Self {
        self.inverted = true;
        self
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }

    pub fn arg(&self, key: &str) -> Option<&str> {
        self.args.get(key).map(String::as_str)
    }

    /// Numeric argument; absent and unparseable values both read as `None`
    pub fn arg_f64(&self, key: &str) -> Option<f64> {
        self.arg(key).and_then(|v| v.trim().parse().ok())
    }

    pub fn arg_u32(&self, key: &str) -> Option<u32> {
        self.arg(key).and_then(|v| v.trim().parse().ok())
    }
}

/// A schedulable event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventDefinition {
    pub id: EventId,
    /// Display name used in announcements
    pub name: String,
    /// Relative selection mass
    pub weight: f64,
    pub min_players: u32,
    /// Minutes of round time before the event may run
    pub earliest_start: f64,
    /// Minutes that must pass after the last occurrence
    pub reoccurrence_delay: f64,
    pub max_occurrences: Option<u32>,
    pub ambient: Option<AmbientBound>,
    pub conditions: Vec<ConditionRef>,
}

impl EventDefinition {
    pub fn new(id: impl Into<EventId>) -> Self {
        let id = id.into();
        Self {
            name: id.to_string(),
            id,
            weight: 1.0,
            min_players: 0,
            earliest_start: 0.0,
            reoccurrence_delay: 0.0,
            max_occurrences: None,
            ambient: None,
            conditions: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_min_players(mut self, min_players: u32) -> Self {
        self.min_players = min_players;
        self
    }

    pub fn with_earliest_start(mut self, minutes: f64) -> Self {
        self.earliest_start = minutes;
        self
    }

    pub fn with_reoccurrence_delay(mut self, minutes: f64) -> Self {
        self.reoccurrence_delay = minutes;
        self
    }

    pub fn with_max_occurrences(mut self, max: u32) -> Self {
        self.max_occurrences = Some(max);
        self
    }

    pub fn with_ambient(mut self, min: f64, max: f64) -> Self {
        self.ambient = Some(AmbientBound::new(min, max));
        self
    }

    pub fn with_condition(mut self, condition: ConditionRef) -> Self {
        self.conditions.push(condition);
        self
    }
}

/// Round time expressed in fractional minutes
pub fn minutes(duration: Duration) -> f64 {
    duration.as_secs_f64() / 60.0
}

/// Fractional minutes as a duration; negative or non-finite input clamps to zero
pub fn from_minutes(minutes: f64) -> Duration {
    Duration::try_from_secs_f64(minutes * 60.0).unwrap_or_default()
}

#[cfg(test)]
#[path = "definition_tests.rs"]
mod tests;
