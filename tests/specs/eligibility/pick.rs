// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Weighted pick specs

use crate::prelude::*;

#[test]
fn seeded_picks_are_reproducible() {
    let temp = Project::station();
    let args = ["pick", "events.toml", "--players", "30", "--seed", "17", "-n", "20"];

    let first = temp.stev().args(&args).passes().stdout();
    let second = temp.stev().args(&args).passes().stdout();

    similar_asserts::assert_eq!(first, second);
    assert_eq!(first.lines().count(), 20);
}

#[test]
fn single_eligible_event_is_always_picked() {
    let temp = Project::station();

    let run = temp
        .stev()
        .args(&["pick", "events.toml", "--players", "30", "--time", "5m", "-n", "10"])
        .passes();
    assert!(run.stdout().lines().all(|l| l == "Invasion"));
}

#[test]
fn nothing_eligible_prints_canned_message() {
    let temp = Project::station();

    temp.stev()
        .args(&["pick", "events.toml", "--time", "5m"])
        .passes()
        .stdout_eq("No valid events available\n");
}

#[test]
fn pick_json_uses_null_for_no_event() {
    let temp = Project::station();

    let run = temp
        .stev()
        .args(&["pick", "events.toml", "--time", "5m", "--format", "json"])
        .passes();
    assert_eq!(run.json()["picks"][0], serde_json::Value::Null);
}

#[test]
fn seed_from_config_file_is_used() {
    let temp = Project::station();
    temp.file("stev.toml", "seed = 99\n");
    let args = ["pick", "events.toml", "--config", "stev.toml", "-n", "10"];

    let first = temp.stev().args(&args).passes().stdout();
    let second = temp.stev().args(&args).passes().stdout();
    similar_asserts::assert_eq!(first, second);
}
