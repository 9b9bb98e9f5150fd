// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Randomized periodic trigger for automatic events

use crate::config::TimerConfig;
use rand::Rng;
use std::time::Duration;

/// Fires once per random delay drawn from `[min_delay, max_delay]`
#[derive(Debug, Clone)]
pub struct EventTimer {
    min_delay: Duration,
    max_delay: Duration,
    next_at: Option<Duration>,
}

impl EventTimer {
    pub fn new(config: &TimerConfig) -> Self {
        Self {
            min_delay: config.min_delay,
            max_delay: config.max_delay.max(config.min_delay),
            next_at: None,
        }
    }

    /// Round time of the next firing, if armed
    pub fn next_at(&self) -> Option<Duration> {
        self.next_at
    }

    /// Disarm; the next poll re-arms from its own timestamp
    pub fn reset(&mut self) {
        self.next_at = None;
    }

    /// Returns true when the timer fires. An unarmed timer arms and does not fire.
    pub fn poll<R: Rng + ?Sized>(&mut self, now: Duration, rng: &mut R) -> bool {
        match self.next_at {
            None => {
                self.arm(now, rng);
                false
            }
            Some(at) if now >= at => {
                self.arm(now, rng);
                true
            }
            Some(_) => false,
        }
    }

    fn arm<R: Rng + ?Sized>(&mut self, now: Duration, rng: &mut R) {
        let delay = rng.gen_range(self.min_delay..=self.max_delay);
        let next = now + delay;
        tracing::debug!(next_at = ?next, "event timer armed");
        self.next_at = Some(next);
    }
}

#[cfg(test)]
#[path = "timer_tests.rs"]
mod tests;
