// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Catalog listing specs

use crate::prelude::*;

#[test]
fn list_shows_instantiable_events_only() {
    let temp = Project::station();

    temp.stev()
        .args(&["list", "events.toml"])
        .passes()
        .stdout_has("ID")
        .stdout_has("MeteorSwarm")
        .stdout_has("Meteor Swarm")
        .stdout_has("PowerGridCheck")
        .stdout_has("Invasion")
        .stdout_lacks("BaseStationEvent");
}

#[test]
fn list_json_carries_inherited_fields() {
    let temp = Project::station();

    let run = temp
        .stev()
        .args(&["list", "events.toml", "--format", "json"])
        .passes();
    let events = run.json();
    let events = events.as_array().unwrap();

    assert_eq!(events.len(), 3);
    let meteor = &events[0];
    assert_eq!(meteor["id"], "MeteorSwarm");
    assert_eq!(meteor["weight"], 4.0);
    assert_eq!(meteor["earliest_start"], 10.0);
    assert_eq!(meteor["reoccurrence_delay"], 15.0);
    assert_eq!(events[1]["max_occurrences"], 1);
}

#[test]
fn empty_catalog_says_so() {
    let temp = Project::empty();
    temp.file("events.toml", "");

    temp.stev()
        .args(&["list", "events.toml"])
        .passes()
        .stdout_eq("No events defined\n");
}

#[test]
fn definition_with_missing_parent_is_skipped() {
    let temp = Project::empty();
    temp.file(
        "events.toml",
        "[[event]]\nid = \"Orphan\"\nparent = \"Ghost\"\n\n[[event]]\nid = \"Fine\"\n",
    );

    temp.stev()
        .args(&["list", "events.toml"])
        .passes()
        .stdout_has("Fine")
        .stdout_lacks("Orphan");
}
