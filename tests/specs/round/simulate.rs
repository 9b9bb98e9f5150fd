// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Round simulation specs

use crate::prelude::*;

#[test]
fn simulate_runs_events_on_the_timer() {
    let temp = Project::station();
    temp.file("stev.toml", FIXED_TIMER_CONFIG);

    temp.stev()
        .args(&[
            "simulate",
            "events.toml",
            "--config",
            "stev.toml",
            "--players",
            "5",
            "--duration",
            "1h",
            "--seed",
            "7",
        ])
        .passes()
        .stdout_has("10m  Running event: ")
        .stdout_has("started over 1h with 5 players");
}

#[test]
fn simulate_json_timeline_fires_every_ten_minutes() {
    let temp = Project::station();
    temp.file("stev.toml", FIXED_TIMER_CONFIG);

    let run = temp
        .stev()
        .args(&[
            "simulate",
            "events.toml",
            "--config",
            "stev.toml",
            "--duration",
            "1h",
            "--seed",
            "7",
            "--format",
            "json",
        ])
        .passes();
    let timeline = run.json();
    let at: Vec<&str> = timeline["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["at"].as_str().unwrap())
        .collect();

    assert_eq!(at, vec!["10m", "20m", "30m", "40m", "50m", "1h"]);
    let first = &timeline["entries"][0];
    assert_eq!(first["outcome"], "started");
    let event = first["event"].as_str().unwrap();
    assert_eq!(first["instance"], format!("{event}#1"));
}

#[test]
fn simulate_is_reproducible_with_seed() {
    let temp = Project::station();
    let args = [
        "simulate",
        "events.toml",
        "--players",
        "40",
        "--duration",
        "2h",
        "--seed",
        "3",
    ];

    let first = temp.stev().args(&args).passes().stdout();
    let second = temp.stev().args(&args).passes().stdout();
    similar_asserts::assert_eq!(first, second);
}

#[test]
fn simulate_with_events_disabled_runs_nothing() {
    let temp = Project::station();
    temp.file("stev.toml", "events_enabled = false\n");

    temp.stev()
        .args(&[
            "simulate",
            "events.toml",
            "--config",
            "stev.toml",
            "--duration",
            "2h",
        ])
        .passes()
        .stdout_eq("0 events started over 2h with 0 players\n");
}

#[test]
fn zero_step_is_rejected() {
    let temp = Project::station();

    temp.stev()
        .args(&["simulate", "events.toml", "--step", "0s"])
        .fails()
        .stderr_has("--step must be greater than zero");
}
