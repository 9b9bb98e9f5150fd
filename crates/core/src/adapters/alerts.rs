// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Alert sink that writes announcements to the log

use super::traits::AlertSink;

/// Sends announcements to `tracing` under the `stev::alerts` target
#[derive(Clone, Debug, Default)]
pub struct LogAlerts;

impl AlertSink for LogAlerts {
    fn announce(&self, message: &str) {
        tracing::info!(target: "stev::alerts", "{}", message);
    }
}
