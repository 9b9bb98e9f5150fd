// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Help and usage specs

use crate::prelude::*;

#[test]
fn help_lists_every_command() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("list")
        .stdout_has("available")
        .stdout_has("explain")
        .stdout_has("pick")
        .stdout_has("simulate");
}

#[test]
fn version_prints_crate_version() {
    cli()
        .args(&["--version"])
        .passes()
        .stdout_has(env!("CARGO_PKG_VERSION"));
}

#[test]
fn no_command_is_a_usage_error() {
    cli().fails().stderr_has("Usage");
}

#[test]
fn eval_commands_document_overrides() {
    cli()
        .args(&["available", "--help"])
        .passes()
        .stdout_has("--players")
        .stdout_has("--time")
        .stdout_has("--ignore-earliest-start");
}
