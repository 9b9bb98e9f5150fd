// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error reporting specs
//!
//! Catalog and config failures print what went wrong and how to fix it.

use crate::prelude::*;

#[test]
fn missing_catalog_reports_path() {
    let temp = Project::empty();

    temp.stev()
        .args(&["list", "nope.toml"])
        .fails()
        .stderr_has("error: Cannot load catalog 'nope.toml'")
        .stderr_has("suggestions:");
}

#[test]
fn duplicate_ids_are_rejected() {
    let temp = Project::empty();
    temp.file(
        "events.toml",
        "[[event]]\nid = \"A\"\n\n[[event]]\nid = \"A\"\n",
    );

    temp.stev()
        .args(&["list", "events.toml"])
        .fails()
        .stderr_has("duplicate event id: A");
}

#[test]
fn inheritance_cycle_is_rejected() {
    let temp = Project::empty();
    temp.file(
        "events.toml",
        "[[event]]\nid = \"A\"\nparent = \"B\"\n\n[[event]]\nid = \"B\"\nparent = \"A\"\n",
    );

    temp.stev()
        .args(&["list", "events.toml"])
        .fails()
        .stderr_has("inheritance cycle");
}

#[test]
fn unknown_event_key_is_rejected() {
    let temp = Project::empty();
    temp.file("events.toml", "[[event]]\nid = \"A\"\nweigth = 2.0\n");

    temp.stev()
        .args(&["list", "events.toml"])
        .fails()
        .stderr_has("weigth");
}

#[test]
fn inverted_timer_window_is_rejected() {
    let temp = Project::station();
    temp.file("stev.toml", "[timer]\nmin_delay = \"1h\"\nmax_delay = \"5m\"\n");

    temp.stev()
        .args(&["pick", "events.toml", "--config", "stev.toml"])
        .fails()
        .stderr_has("Cannot load config 'stev.toml'")
        .stderr_has("min_delay no longer than max_delay");
}

#[test]
fn bad_duration_is_a_usage_error() {
    let temp = Project::station();

    temp.stev()
        .args(&["available", "events.toml", "--time", "soon"])
        .fails()
        .stderr_has("--time");
}
