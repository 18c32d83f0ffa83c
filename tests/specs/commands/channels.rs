// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File command specs
//!
//! Exports, outputs, state and PATH entries land in the runner's files.

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn export_output_and_state_write_blocks() {
    let step = Step::new();
    step.actkit()
        .args(&["export", "MODE", "fast"])
        .passes()
        .stdout_eq("");
    step.actkit().args(&["output", "count", "12"]).passes();
    step.actkit().args(&["state", "ready", "true"]).passes();

    let env = blocks(&step.read("env"));
    assert_eq!(env.len(), 1);
    assert_eq!(env[0].0, "MODE");
    assert_eq!(env[0].2, "\"fast\"");
    assert!(env[0].1.starts_with("ghadelimiter_"));

    assert_eq!(blocks(&step.read("output"))[0].2, "12");
    assert_eq!(blocks(&step.read("state"))[0].2, "true");
}

#[test]
fn repeated_outputs_get_distinct_delimiters() {
    let step = Step::new();
    step.actkit().args(&["output", "a", "x"]).passes();
    step.actkit().args(&["output", "b", "y"]).passes();

    let outputs = blocks(&step.read("output"));
    assert_eq!(outputs.len(), 2);
    assert!(outputs[0].1 != outputs[1].1);
}

#[test]
fn json_values_are_written_compact() {
    let step = Step::new();
    step.actkit()
        .args(&["output", "matrix", "--json", "[1, 2, 3]"])
        .passes();
    assert_eq!(blocks(&step.read("output"))[0].2, "[1,2,3]");
}

#[test]
fn multiline_value_stays_inside_one_block() {
    let step = Step::new();
    step.actkit()
        .args(&["output", "notes", "line one\nline two"])
        .passes();
    let outputs = blocks(&step.read("output"));
    assert_eq!(outputs.len(), 1);
    assert_eq!(outputs[0].2, "\"line one\\nline two\"");
}

#[test]
fn add_path_appends_entries() {
    let step = Step::new();
    step.actkit().args(&["add-path", "/opt/a"]).passes();
    step.actkit().args(&["add-path", "/opt/b"]).passes();
    assert_eq!(step.read("path"), "/opt/a\n/opt/b\n");
}

#[test]
fn missing_channel_file_is_an_error_and_not_created() {
    let step = Step::bare();
    step.actkit()
        .args(&["output", "k", "v"])
        .fails()
        .stderr_has("output");
    assert!(!step.exists("output"));
}

#[test]
fn unset_channel_variable_is_an_error() {
    Cli::new()
        .args(&["export", "K", "v"])
        .fails()
        .stderr_has("GITHUB_ENV");
}

#[test]
fn prefix_switches_variable_family() {
    let step = Step::new();
    Cli::new()
        .env("RUNNER_STATE", step.path().join("state"))
        .args(&["--prefix", "RUNNER", "state", "k", "v"])
        .passes();
    assert_eq!(blocks(&step.read("state"))[0].0, "k");
}

#[test]
fn saved_state_reads_back_decoded() {
    let step = Step::new();
    step.actkit()
        .args(&["state", "greeting", "hello world"])
        .passes();
    let (name, _, value) = blocks(&step.read("state")).remove(0);

    step.actkit()
        .env(&format!("STATE_{name}"), value)
        .args(&["get-state", "greeting"])
        .passes()
        .stdout_eq("hello world\n");
}
