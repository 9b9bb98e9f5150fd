// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Weighted random selection over an eligible set

use crate::definition::EventId;
use crate::eligibility::EligibleSet;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How definition weights are read when drawing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightMode {
    /// Weights are used as-is
    #[default]
    Real,
    /// Weights are floored to whole numbers (capped at `u32::MAX`) before
    /// drawing, so anything below 1.0 can never win
    Truncated,
}

/// Picks one event from an eligible set with probability proportional to weight
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedSelector {
    mode: WeightMode,
}

impl WeightedSelector {
    pub fn new(mode: WeightMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> WeightMode {
        self.mode
    }

    pub fn pick<R: Rng + ?Sized>(&self, eligible: &EligibleSet, rng: &mut R) -> Option<EventId> {
        if eligible.is_empty() {
            tracing::warn!("No events were available to run");
            return None;
        }

        let picked = match self.mode {
            WeightMode::Real => pick_real(eligible, rng),
            WeightMode::Truncated => pick_truncated(eligible, rng),
        };

        if picked.is_none() {
            tracing::error!(
                candidates = eligible.len(),
                mode = ?self.mode,
                "weighted draw fell through every candidate"
            );
        }
        picked
    }
}

/// Largest floored weight a truncated draw counts
const MAX_TRUNCATED_WEIGHT: u64 = u32::MAX as u64;

fn pick_real<R: Rng + ?Sized>(eligible: &EligibleSet, rng: &mut R) -> Option<EventId> {
    // Scale by the heaviest weight so the running total stays finite
    let heaviest = eligible.iter().map(|d| d.weight).fold(0.0, f64::max);
    if !(heaviest > 0.0 && heaviest.is_finite()) {
        return None;
    }

    let total: f64 = eligible.iter().map(|d| d.weight / heaviest).sum();
    if !(total > 0.0) {
        return None;
    }
    let mut remaining = rng.gen_range(0.0..total);
    for definition in eligible.iter() {
        remaining -= definition.weight / heaviest;
        if remaining <= 0.0 {
            return Some(definition.id.clone());
        }
    }

    // Rounding can leave a sliver above zero after the last subtraction
    eligible.iter().last().map(|d| d.id.clone())
}

fn truncated_weight(weight: f64) -> u64 {
    (weight as u64).min(MAX_TRUNCATED_WEIGHT)
}

fn pick_truncated<R: Rng + ?Sized>(eligible: &EligibleSet, rng: &mut R) -> Option<EventId> {
    let total = eligible
        .iter()
        .map(|d| truncated_weight(d.weight))
        .fold(0u64, u64::saturating_add);
    let mut remaining = if total == 0 {
        0
    } else {
        rng.gen_range(0..total)
    };

    for definition in eligible.iter() {
        let weight = truncated_weight(definition.weight);
        if remaining <= weight {
            return Some(definition.id.clone());
        }
        remaining -= weight;
    }
    None
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
