// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Catalog TOML parsing with template inheritance

use crate::definition::{AmbientBound, ConditionRef, EventDefinition, EventId};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("duplicate event id: {0}")]
    DuplicateId(EventId),
    #[error("inheritance cycle through event: {0}")]
    InheritanceCycle(EventId),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
struct RawCatalog {
    #[serde(default, rename = "event")]
    events: Vec<RawEvent>,
}

/// A catalog entry before parent fields are folded in
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEvent {
    id: EventId,
    name: Option<String>,
    parent: Option<EventId>,
    #[serde(default, rename = "abstract")]
    is_abstract: bool,
    weight: Option<f64>,
    min_players: Option<u32>,
    earliest_start: Option<f64>,
    reoccurrence_delay: Option<f64>,
    max_occurrences: Option<u32>,
    ambient: Option<AmbientBound>,
    #[serde(default)]
    conditions: Vec<ConditionRef>,
}

impl RawEvent {
    /// Fill unset fields from `base`. Conditions accumulate, base first.
    fn inherit(&self, base: &RawEvent) -> RawEvent {
        let mut conditions = base.conditions.clone();
        conditions.extend(self.conditions.iter().cloned());
        RawEvent {
            id: self.id.clone(),
            name: self.name.clone(),
            parent: None,
            is_abstract: self.is_abstract,
            weight: self.weight.or(base.weight),
            min_players: self.min_players.or(base.min_players),
            earliest_start: self.earliest_start.or(base.earliest_start),
            reoccurrence_delay: self.reoccurrence_delay.or(base.reoccurrence_delay),
            max_occurrences: self.max_occurrences.or(base.max_occurrences),
            ambient: self.ambient.or(base.ambient),
            conditions,
        }
    }

    fn into_definition(self) -> EventDefinition {
        EventDefinition {
            name: self.name.unwrap_or_else(|| self.id.to_string()),
            id: self.id,
            weight: self.weight.unwrap_or(1.0),
            min_players: self.min_players.unwrap_or(0),
            earliest_start: self.earliest_start.unwrap_or(0.0),
            reoccurrence_delay: self.reoccurrence_delay.unwrap_or(0.0),
            max_occurrences: self.max_occurrences,
            ambient: self.ambient,
            conditions: self.conditions,
        }
    }
}

/// Parse a catalog and return its instantiable definitions in file order
pub fn parse_catalog(content: &str) -> Result<Vec<EventDefinition>, CatalogError> {
    let raw: RawCatalog = toml::from_str(content)?;

    let mut by_id: HashMap<&EventId, &RawEvent> = HashMap::new();
    for event in &raw.events {
        if by_id.insert(&event.id, event).is_some() {
            return Err(CatalogError::DuplicateId(event.id.clone()));
        }
    }

    let mut definitions = Vec::new();
    for event in raw.events.iter().filter(|e| !e.is_abstract) {
        let mut chain = Vec::new();
        if let Some(resolved) = resolve(event, &by_id, &mut chain)? {
            definitions.push(resolved.into_definition());
        }
    }

    Ok(definitions)
}

/// Fold the parent chain into `event`. `None` when an ancestor is missing.
fn resolve(
    event: &RawEvent,
    by_id: &HashMap<&EventId, &RawEvent>,
    chain: &mut Vec<EventId>,
) -> Result<Option<RawEvent>, CatalogError> {
    let Some(parent_id) = &event.parent else {
        return Ok(Some(event.clone()));
    };

    chain.push(event.id.clone());
    if chain.contains(parent_id) {
        return Err(CatalogError::InheritanceCycle(event.id.clone()));
    }

    let Some(parent) = by_id.get(parent_id) else {
        tracing::debug!(
            event = %event.id,
            parent = %parent_id,
            "parent definition not found, skipping"
        );
        return Ok(None);
    };

    Ok(resolve(parent, by_id, chain)?.map(|base| event.inherit(&base)))
}
