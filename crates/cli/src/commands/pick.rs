// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `stev pick` - Draw one event the way the scheduler would

use super::EvalArgs;
use crate::output::print;
use clap::Args;
use serde::Serialize;
use std::fmt;
use stev_core::{EventId, NO_VALID_EVENTS};

#[derive(Args)]
pub struct PickArgs {
    #[command(flatten)]
    pub eval: EvalArgs,

    /// Seed for a reproducible draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of draws from the same evaluation
    #[arg(long, short = 'n', default_value_t = 1)]
    pub count: usize,
}

#[derive(Serialize)]
struct Picks {
    picks: Vec<Option<EventId>>,
}

impl fmt::Display for Picks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pick) in self.picks.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            match pick {
                Some(id) => write!(f, "{}", id)?,
                None => write!(f, "{}", NO_VALID_EVENTS)?,
            }
        }
        Ok(())
    }
}

pub fn handle(args: PickArgs) -> anyhow::Result<()> {
    let mut session = args.eval.source.open(args.seed)?;
    let eligible = session.scheduler.available_events(args.eval.options());
    tracing::info!(available = eligible.len(), "picking random event");

    let picks = (0..args.count)
        .map(|_| session.scheduler.find_event(&eligible))
        .collect();
    print(&Picks { picks }, args.eval.source.format);
    Ok(())
}
