// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rejection explanation specs

use crate::prelude::*;

#[test]
fn explain_names_first_failing_rule() {
    let temp = Project::station();

    temp.stev()
        .args(&["explain", "events.toml", "--time", "5m"])
        .passes()
        .stdout_has("rejected: minute 5.0, earliest start 10.0")
        .stdout_has("rejected: 0 players, needs 30");
}

#[test]
fn explain_marks_eligible_events() {
    let temp = Project::station();

    temp.stev()
        .args(&["explain", "events.toml", "--players", "30"])
        .passes()
        .stdout_lacks("rejected");
}

#[test]
fn explain_json_tags_reasons() {
    let temp = Project::station();

    let run = temp
        .stev()
        .args(&["explain", "events.toml", "--format", "json"])
        .passes();
    let verdicts = run.json();

    let invasion = verdicts
        .as_array()
        .unwrap()
        .iter()
        .find(|v| v["event"] == "Invasion")
        .unwrap();
    assert_eq!(invasion["eligible"], false);
    assert_eq!(invasion["rejection"]["reason"], "too_few_players");
    assert_eq!(invasion["rejection"]["required"], 30);
}

#[test]
fn unknown_condition_is_reported() {
    let temp = Project::empty();
    temp.file(
        "events.toml",
        r#"
[[event]]
id = "Typo"
[[event.conditions]]
condition = "plyer_count"
"#,
    );

    temp.stev()
        .args(&["explain", "events.toml"])
        .passes()
        .stdout_has("rejected: unknown condition plyer_count")
        .stderr_has("unregistered condition");
}
