// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scheduler configuration
//!
//! Loaded from TOML. Every field has a default, so an empty file is valid:
//!
//! ```toml
//! events_enabled = true
//! ambient_gating = false
//! weight_mode = "real"   # or "truncated"
//! seed = 42
//!
//! [timer]
//! min_delay = "10m"
//! max_delay = "20m"
//! ```

use crate::selector::WeightMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const DEFAULT_MIN_DELAY: Duration = Duration::from_secs(10 * 60);
const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(20 * 60);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("timer min_delay {min:?} is longer than max_delay {max:?}")]
    InvalidTimer { min: Duration, max: Duration },
}

/// Delay window for the periodic event timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimerConfig {
    #[serde(with = "humantime_serde")]
    pub min_delay: Duration,
    #[serde(with = "humantime_serde")]
    pub max_delay: Duration,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            min_delay: DEFAULT_MIN_DELAY,
            max_delay: DEFAULT_MAX_DELAY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchedulerConfig {
    /// Master switch; a disabled scheduler never runs events on its own
    pub events_enabled: bool,
    /// Check definitions' ambient bounds against the ambient source
    pub ambient_gating: bool,
    pub weight_mode: WeightMode,
    /// Fixed RNG seed for reproducible draws
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub timer: TimerConfig,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            events_enabled: true,
            ambient_gating: false,
            weight_mode: WeightMode::default(),
            seed: None,
            timer: TimerConfig::default(),
        }
    }
}

impl SchedulerConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded scheduler config");
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_ambient_gating(mut self, enabled: bool) -> Self {
        self.ambient_gating = enabled;
        self
    }

    pub fn with_weight_mode(mut self, mode: WeightMode) -> Self {
        self.weight_mode = mode;
        self
    }

    pub fn with_events_enabled(mut self, enabled: bool) -> Self {
        self.events_enabled = enabled;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.timer.min_delay > self.timer.max_delay {
            return Err(ConfigError::InvalidTimer {
                min: self.timer.min_delay,
                max: self.timer.max_delay,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
