// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `stev available` - Show the eligible set for one evaluation

use super::list::print_rows;
use super::EvalArgs;

pub fn handle(args: EvalArgs) -> anyhow::Result<()> {
    let mut session = args.source.open(None)?;

    let eligible = session.scheduler.available_events(args.options());
    tracing::info!(available = eligible.len(), "evaluated catalog");

    print_rows(
        eligible.iter().cloned().collect(),
        args.source.format,
        "No events available",
    );
    Ok(())
}
