// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::definition::{AmbientBound, ConditionId, EventId};

const CATALOG: &str = r#"
[[event]]
id = "BaseStationEvent"
abstract = true
weight = 5.0
reoccurrence_delay = 30.0

[[event.conditions]]
condition = "player_count"
args = { min = "2" }

[[event]]
id = "VentClog"
name = "Vent Clog"
parent = "BaseStationEvent"
earliest_start = 15.0

[[event.conditions]]
condition = "prior_event"
inverted = true
args = { event = "Meteors" }

[[event]]
id = "Meteors"
weight = 2.5
min_players = 10
max_occurrences = 3
ambient = { min = 100.0, max = 500.0 }
"#;

#[test]
fn abstract_templates_are_excluded() {
    let defs = parse_catalog(CATALOG).unwrap();
    let ids: Vec<_> = defs.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["VentClog", "Meteors"]);
}

#[test]
fn child_inherits_unset_fields_from_parent() {
    let defs = parse_catalog(CATALOG).unwrap();
    let vent = &defs[0];

    assert_eq!(vent.name, "Vent Clog");
    assert_eq!(vent.weight, 5.0);
    assert_eq!(vent.reoccurrence_delay, 30.0);
    assert_eq!(vent.earliest_start, 15.0);
    assert_eq!(vent.min_players, 0);
}

#[test]
fn inherited_conditions_come_before_own() {
    let defs = parse_catalog(CATALOG).unwrap();
    let conditions: Vec<_> = defs[0]
        .conditions
        .iter()
        .map(|c| (c.condition.clone(), c.inverted))
        .collect();

    assert_eq!(
        conditions,
        vec![
            (ConditionId::new("player_count"), false),
            (ConditionId::new("prior_event"), true),
        ]
    );
    assert_eq!(defs[0].conditions[1].arg("event"), Some("Meteors"));
}

#[test]
fn standalone_definition_reads_every_field() {
    let defs = parse_catalog(CATALOG).unwrap();
    let meteors = &defs[1];

    assert_eq!(meteors.name, "Meteors");
    assert_eq!(meteors.weight, 2.5);
    assert_eq!(meteors.min_players, 10);
    assert_eq!(meteors.max_occurrences, Some(3));
    assert_eq!(meteors.ambient, Some(AmbientBound::new(100.0, 500.0)));
}

#[test]
fn empty_document_is_an_empty_catalog() {
    assert!(parse_catalog("").unwrap().is_empty());
}

#[test]
fn missing_parent_skips_definition() {
    let content = r#"
[[event]]
id = "Orphan"
parent = "Nowhere"

[[event]]
id = "Fine"
"#;
    let defs = parse_catalog(content).unwrap();
    assert_eq!(defs.len(), 1);
    assert_eq!(defs[0].id, EventId::new("Fine"));
}

#[test]
fn duplicate_ids_are_rejected() {
    let content = r#"
[[event]]
id = "Twice"

[[event]]
id = "Twice"
"#;
    let err = parse_catalog(content).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId(id) if id.as_str() == "Twice"));
}

#[test]
fn inheritance_cycles_are_rejected() {
    let content = r#"
[[event]]
id = "A"
parent = "B"

[[event]]
id = "B"
parent = "A"
"#;
    let err = parse_catalog(content).unwrap_err();
    assert!(matches!(err, CatalogError::InheritanceCycle(_)));
}

#[test]
fn unknown_fields_are_rejected() {
    let content = r#"
[[event]]
id = "Typo"
wieght = 3.0
"#;
    assert!(matches!(
        parse_catalog(content),
        Err(CatalogError::Toml(_))
    ));
}
