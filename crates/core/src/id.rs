// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Instance identifiers for started events

use crate::definition::EventId;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Names each running instance of an event
pub trait InstanceIds: Clone + Send + Sync {
    fn next_instance(&self, event: &EventId) -> String;
}

/// Random instance ids, unique across processes
#[derive(Clone, Default)]
pub struct RandomInstanceIds;

impl InstanceIds for RandomInstanceIds {
    fn next_instance(&self, _event: &EventId) -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }
}

/// Predictable instance ids: `<event>#<n>`, one counter shared by all events
#[derive(Clone, Default)]
pub struct SequentialInstanceIds {
    counter: Arc<AtomicU64>,
}

impl SequentialInstanceIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InstanceIds for SequentialInstanceIds {
    fn next_instance(&self, event: &EventId) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{}#{}", event, n)
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
