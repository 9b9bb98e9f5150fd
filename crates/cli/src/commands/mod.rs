// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod available;
pub mod explain;
pub mod list;
pub mod pick;
pub mod simulate;

use crate::error::StevError;
use crate::output::OutputFormat;
use clap::Args;
use std::path::PathBuf;
use std::time::Duration;
use stev_core::{
    ConditionRegistry, EvaluationOptions, EventDefinition, EventScheduler, FileCatalog,
    FixedAmbient, LogAlerts, ManualRoundClock, RoundState, SchedulerConfig, SchedulerDeps,
    SequentialInstanceIds, StaticCatalog,
};

/// In-process round the CLI evaluates against
pub type Round = RoundState<ManualRoundClock, SequentialInstanceIds>;

/// Where definitions and scheduler settings come from
#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    /// Catalog file (TOML with [[event]] tables)
    pub catalog: PathBuf,

    /// Scheduler config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Ambient level to gate on; implies ambient gating
    #[arg(long)]
    pub ambient: Option<f64>,
}

/// Overrides for one evaluation pass
#[derive(Args, Debug, Clone)]
pub struct EvalArgs {
    #[command(flatten)]
    pub source: CatalogArgs,

    /// Player count to evaluate with
    #[arg(long)]
    pub players: Option<u32>,

    /// Round time to evaluate at (e.g. 25m, 1h 10m)
    #[arg(long, value_parser = humantime::parse_duration)]
    pub time: Option<Duration>,

    /// Treat round time as zero, disabling earliest-start and reoccurrence checks
    #[arg(long)]
    pub ignore_earliest_start: bool,
}

impl EvalArgs {
    pub fn options(&self) -> EvaluationOptions {
        EvaluationOptions {
            ignore_earliest_start: self.ignore_earliest_start,
            player_count: self.players,
            current_time: self.time,
        }
    }
}

/// A scheduler wired to an in-process round
pub struct Session {
    pub scheduler: EventScheduler,
    pub round: Round,
}

impl CatalogArgs {
    pub fn definitions(&self) -> Result<Vec<EventDefinition>, StevError> {
        FileCatalog::new(&self.catalog)
            .load()
            .map_err(|e| StevError::catalog(&self.catalog, e))
    }

    pub fn config(&self) -> Result<SchedulerConfig, StevError> {
        match &self.config {
            Some(path) => SchedulerConfig::load(path).map_err(|e| StevError::config(path, e)),
            None => Ok(SchedulerConfig::default()),
        }
    }

    /// Load everything and build a scheduler; `seed` overrides the config's
    pub fn open(&self, seed: Option<u64>) -> Result<Session, StevError> {
        let definitions = self.definitions()?;
        let mut config = self.config()?;
        if let Some(seed) = seed {
            config = config.with_seed(seed);
        }
        if self.ambient.is_some() {
            config = config.with_ambient_gating(true);
        }
        tracing::debug!(
            catalog = %self.catalog.display(),
            events = definitions.len(),
            "catalog loaded"
        );

        let round = RoundState::new(ManualRoundClock::new(), SequentialInstanceIds::new());
        let mut deps = SchedulerDeps::new(
            StaticCatalog::new(definitions),
            round.clone(),
            round.clock().clone(),
            LogAlerts,
        );
        if let Some(level) = self.ambient {
            deps = deps.with_ambient(FixedAmbient(level));
        }
        let scheduler = EventScheduler::new(deps, ConditionRegistry::with_builtins(), &config);
        Ok(Session { scheduler, round })
    }
}
