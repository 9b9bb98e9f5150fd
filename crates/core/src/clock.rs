// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Round clock abstraction for testable elapsed-time handling

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Reports how long the current round has been running
pub trait RoundClock: Send + Sync {
    fn elapsed(&self) -> Duration;
}

/// Wall-clock round timer
#[derive(Clone)]
pub struct SystemRoundClock {
    started: Arc<Mutex<Instant>>,
}

impl SystemRoundClock {
    pub fn new() -> Self {
        Self {
            started: Arc::new(Mutex::new(Instant::now())),
        }
    }

    /// Start counting a new round from zero
    pub fn restart(&self) {
        let mut started = self.started.lock().unwrap_or_else(|e| e.into_inner());
        *started = Instant::now();
    }
}

impl Default for SystemRoundClock {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundClock for SystemRoundClock {
    fn elapsed(&self) -> Duration {
        self.started
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .elapsed()
    }
}

/// Round clock driven by its owner, for simulations and tests
#[derive(Clone, Default)]
pub struct ManualRoundClock {
    current: Arc<Mutex<Duration>>,
}

impl ManualRoundClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(elapsed: Duration) -> Self {
        Self {
            current: Arc::new(Mutex::new(elapsed)),
        }
    }

    /// Advance the clock by the given duration
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current += duration;
    }

    /// Set the elapsed round time
    pub fn set(&self, elapsed: Duration) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = elapsed;
    }
}

impl RoundClock for ManualRoundClock {
    fn elapsed(&self) -> Duration {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
