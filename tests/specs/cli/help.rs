// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI surface specs

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    Cli::new()
        .args(&["--help"])
        .passes()
        .stdout_has("export")
        .stdout_has("add-path")
        .stdout_has("summary")
        .stdout_has("--prefix");
}

#[test]
fn unknown_command_fails() {
    Cli::new()
        .args(&["frobnicate"])
        .fails()
        .stderr_has("frobnicate");
}

#[test]
fn completions_are_generated() {
    Cli::new()
        .args(&["completions", "bash"])
        .passes()
        .stdout_has("actkit");
}

#[test]
fn logs_stay_off_stdout() {
    let step = Step::new();
    step.actkit()
        .env("ACTKIT_LOG", "debug")
        .args(&["output", "k", "v"])
        .passes()
        .stdout_eq("")
        .stderr_has("file command written");
}
