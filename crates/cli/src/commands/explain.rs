// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `stev explain` - Show why each definition is or is not eligible

use super::EvalArgs;
use crate::output::print_list;
use serde::Serialize;
use std::fmt;
use stev_core::Verdict;

#[derive(Serialize)]
struct VerdictRow {
    event: String,
    eligible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    rejection: Option<stev_core::Rejection>,
}

impl From<Verdict> for VerdictRow {
    fn from(verdict: Verdict) -> Self {
        Self {
            eligible: verdict.is_eligible(),
            event: verdict.definition.id.to_string(),
            rejection: verdict.rejection,
        }
    }
}

impl fmt::Display for VerdictRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.rejection {
            None => write!(f, "{:<24} eligible", self.event),
            Some(reason) => write!(f, "{:<24} rejected: {}", self.event, reason),
        }
    }
}

pub fn handle(args: EvalArgs) -> anyhow::Result<()> {
    let mut session = args.source.open(None)?;
    let rows: Vec<VerdictRow> = session
        .scheduler
        .explain(args.options())
        .into_iter()
        .map(VerdictRow::from)
        .collect();

    print_list(&rows, args.source.format, "No events defined");
    Ok(())
}
