// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host-to-scheduler signals
//!
//! Hosts push signals from anywhere; the scheduler drains them on its own
//! thread through [`EventScheduler::pump`](crate::EventScheduler::pump).

use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerSignal {
    /// The master switch was flipped
    EventsEnabledChanged(bool),
    /// A new round began; the event timer restarts
    RoundStarted,
    /// Time moved; the event timer may fire
    Tick,
}

pub type SignalSender = mpsc::UnboundedSender<SchedulerSignal>;
pub type SignalReceiver = mpsc::UnboundedReceiver<SchedulerSignal>;

pub fn signal_channel() -> (SignalSender, SignalReceiver) {
    mpsc::unbounded_channel()
}
