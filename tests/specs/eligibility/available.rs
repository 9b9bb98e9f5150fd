// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Eligible set specs
//!
//! Without `--time` the round clock reads zero, which switches off the
//! earliest-start and reoccurrence rules.

use crate::prelude::*;

fn available_ids(temp: &Project, extra: &[&str]) -> Vec<String> {
    let mut args = vec!["available", "events.toml", "--format", "json"];
    args.extend_from_slice(extra);
    let run = temp.stev().args(&args).passes();
    run.json()
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn empty_round_at_time_zero() {
    let temp = Project::station();

    assert_eq!(
        available_ids(&temp, &[]),
        vec!["MeteorSwarm", "PowerGridCheck"]
    );
}

#[test]
fn player_override_unlocks_crowd_events() {
    let temp = Project::station();

    assert_eq!(
        available_ids(&temp, &["--players", "30"]),
        vec!["Invasion", "MeteorSwarm", "PowerGridCheck"]
    );
    assert_eq!(
        available_ids(&temp, &["--players", "29"]),
        vec!["MeteorSwarm", "PowerGridCheck"]
    );
}

#[test]
fn early_round_time_holds_back_templates() {
    let temp = Project::station();

    assert_eq!(
        available_ids(&temp, &["--players", "30", "--time", "5m"]),
        vec!["Invasion"]
    );
    assert_eq!(
        available_ids(&temp, &["--players", "30", "--time", "10m"]),
        vec!["Invasion", "MeteorSwarm", "PowerGridCheck"]
    );
}

#[test]
fn explicit_time_wins_over_ignore_flag() {
    let temp = Project::station();

    assert!(available_ids(&temp, &["--time", "5m", "--ignore-earliest-start"]).is_empty());
}

#[test]
fn nothing_available_in_text_mode() {
    let temp = Project::station();

    temp.stev()
        .args(&["available", "events.toml", "--time", "5m"])
        .passes()
        .stdout_eq("No events available\n");
}

#[test]
fn inverted_condition_gates_on_absence() {
    let temp = Project::empty();
    temp.file(
        "events.toml",
        r#"
[[event]]
id = "QuietShift"
[[event.conditions]]
condition = "player_count"
inverted = true
args = { min = "10" }
"#,
    );

    temp.stev()
        .args(&["available", "events.toml", "--players", "9"])
        .passes()
        .stdout_has("QuietShift");
    temp.stev()
        .args(&["available", "events.toml", "--players", "10"])
        .passes()
        .stdout_eq("No events available\n");
}

const AMBIENT_CATALOG: &str = r#"
[[event]]
id = "SolarFlare"
ambient = { min = 100.0, max = 500.0 }

[[event]]
id = "Blackout"
[[event.conditions]]
condition = "ambient_level"
args = { min = "600" }
"#;

#[test]
fn ambient_level_gates_bounded_events() {
    let temp = Project::empty();
    temp.file("events.toml", AMBIENT_CATALOG);

    assert_eq!(
        available_ids(&temp, &["--ambient", "250"]),
        vec!["SolarFlare"]
    );
    assert_eq!(
        available_ids(&temp, &["--ambient", "700"]),
        vec!["Blackout"]
    );
}

#[test]
fn without_ambient_level_bounds_are_skipped() {
    let temp = Project::empty();
    temp.file("events.toml", AMBIENT_CATALOG);

    assert_eq!(available_ids(&temp, &[]), vec!["SolarFlare"]);
}
