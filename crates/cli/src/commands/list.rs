// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `stev list` - Show every instantiable definition

use super::CatalogArgs;
use crate::output::{print_list, OutputFormat};
use serde::Serialize;
use std::fmt;
use stev_core::EventDefinition;

/// One definition as a table row
#[derive(Serialize)]
#[serde(transparent)]
pub struct EventRow(pub EventDefinition);

impl EventRow {
    pub fn header() -> String {
        format!(
            "{:<24} {:>7} {:>8} {:>9} {:>9} {:>4}  NAME",
            "ID", "WEIGHT", "PLAYERS", "EARLIEST", "REOCCUR", "MAX"
        )
    }
}

impl fmt::Display for EventRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let def = &self.0;
        let max = def
            .max_occurrences
            .map_or_else(|| "-".to_string(), |m| m.to_string());
        write!(
            f,
            "{:<24} {:>7} {:>8} {:>8}m {:>8}m {:>4}  {}",
            def.id.as_str(),
            def.weight,
            def.min_players,
            def.earliest_start,
            def.reoccurrence_delay,
            max,
            def.name
        )
    }
}

pub fn print_rows(definitions: Vec<EventDefinition>, format: OutputFormat, empty: &str) {
    let rows: Vec<EventRow> = definitions.into_iter().map(EventRow).collect();
    if matches!(format, OutputFormat::Text) && !rows.is_empty() {
        println!("{}", EventRow::header());
    }
    print_list(&rows, format, empty);
}

pub fn handle(args: CatalogArgs) -> anyhow::Result<()> {
    let definitions = args.definitions()?;
    print_rows(definitions, args.format, "No events defined");
    Ok(())
}
