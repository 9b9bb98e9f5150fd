// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `stev simulate` - Play a whole round against the automatic timer
//!
//! The round clock advances in fixed steps. Every step sends a tick through
//! the scheduler's signal channel, so runs happen exactly as they would in a
//! live host. Started events end after `--event-length`.

use super::CatalogArgs;
use crate::output::print;
use clap::Args;
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use stev_core::{EventId, RoundClock, RunOutcome, SchedulerSignal};

#[derive(Args)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub source: CatalogArgs,

    /// Players present for the whole round
    #[arg(long, default_value_t = 0)]
    pub players: u32,

    /// Round length
    #[arg(long, default_value = "1h", value_parser = humantime::parse_duration)]
    pub duration: Duration,

    /// Clock step between ticks
    #[arg(long, default_value = "1m", value_parser = humantime::parse_duration)]
    pub step: Duration,

    /// How long a started event keeps running
    #[arg(long, default_value = "5m", value_parser = humantime::parse_duration)]
    pub event_length: Duration,

    /// Seed for reproducible rounds
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Serialize)]
struct TimelineEntry {
    #[serde(serialize_with = "as_humantime")]
    at: Duration,
    #[serde(flatten)]
    outcome: RunOutcome,
}

#[derive(Serialize)]
struct Timeline {
    #[serde(serialize_with = "as_humantime")]
    duration: Duration,
    players: u32,
    entries: Vec<TimelineEntry>,
}

fn as_humantime<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&humantime::format_duration(*d))
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            let at = humantime::format_duration(entry.at).to_string();
            writeln!(f, "{:>10}  {}", at, entry.outcome.message())?;
        }
        let started = self
            .entries
            .iter()
            .filter(|e| e.outcome.started().is_some())
            .count();
        write!(
            f,
            "{} events started over {} with {} players",
            started,
            humantime::format_duration(self.duration),
            self.players
        )
    }
}

pub fn handle(args: SimulateArgs) -> anyhow::Result<()> {
    if args.step.is_zero() {
        anyhow::bail!("--step must be greater than zero");
    }

    let mut session = args.source.open(args.seed)?;
    let round = session.round.clone();
    round.set_players(args.players);
    round.start_round();

    let signals = session.scheduler.connect();
    signals.send(SchedulerSignal::RoundStarted)?;

    let mut running: Vec<(EventId, Duration)> = Vec::new();
    let mut entries = Vec::new();
    let mut now = Duration::ZERO;
    while now <= args.duration {
        round.clock().set(now);
        running.retain(|(event, started)| {
            let done = *started + args.event_length <= now;
            if done {
                round.end_event(event);
            }
            !done
        });

        signals.send(SchedulerSignal::Tick)?;
        for outcome in session.scheduler.pump() {
            if let Some(event) = outcome.started() {
                running.push((event.clone(), round.clock().elapsed()));
            }
            entries.push(TimelineEntry { at: now, outcome });
        }
        now += args.step;
    }

    let timeline = Timeline {
        duration: args.duration,
        players: args.players,
        entries,
    };
    print(&timeline, args.source.format);
    Ok(())
}
