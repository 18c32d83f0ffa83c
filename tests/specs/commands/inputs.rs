// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Input and context specs

use crate::prelude::*;

#[test]
fn input_is_trimmed_by_default() {
    let step = Step::new();
    step.actkit()
        .env("INPUT_WHO_TO_GREET", "  Mona  ")
        .args(&["input", "who to greet"])
        .passes()
        .stdout_eq("Mona\n");
    step.actkit()
        .env("INPUT_WHO_TO_GREET", "  Mona  ")
        .args(&["input", "who to greet", "--no-trim"])
        .passes()
        .stdout_eq("  Mona  \n");
}

#[test]
fn absent_input_reads_empty_unless_required() {
    let step = Step::new();
    step.actkit()
        .args(&["input", "missing"])
        .passes()
        .stdout_eq("\n");
    step.actkit()
        .args(&["input", "missing", "--required"])
        .fails()
        .stderr_has("input required and not supplied: missing");
}

#[test]
fn boolean_input_accepts_core_schema_only() {
    let step = Step::new();
    step.actkit()
        .env("INPUT_FLAG", "FALSE")
        .args(&["input", "flag", "--boolean"])
        .passes()
        .stdout_eq("false\n");
    step.actkit()
        .env("INPUT_FLAG", "yes")
        .args(&["input", "flag", "--boolean"])
        .fails()
        .stderr_has("Core Schema");
}

#[test]
fn multiline_input_drops_empty_lines() {
    Step::new()
        .actkit()
        .env("INPUT_FILES", "a.txt\n\n  b.txt  \n")
        .args(&["input", "files", "--multiline"])
        .passes()
        .stdout_eq("a.txt\nb.txt\n");
}

#[test]
fn context_reads_metadata_and_payload() {
    let step = Step::new();
    let payload = step.file(
        "event.json",
        r#"{"repository":{"owner":{"login":"octo"},"name":"hello"},"pull_request":{"number":17}}"#,
    );
    step.actkit()
        .env("GITHUB_EVENT_PATH", payload)
        .env("GITHUB_EVENT_NAME", "pull_request")
        .env("GITHUB_REF", "refs/pull/17/merge")
        .args(&["context"])
        .passes()
        .stdout_has("event:    pull_request")
        .stdout_has("ref:      refs/pull/17/merge")
        .stdout_has("repo:     octo/hello");
}

#[test]
fn context_rejects_malformed_payload() {
    let step = Step::new();
    let payload = step.file("event.json", "{not json");
    step.actkit()
        .env("GITHUB_EVENT_PATH", payload)
        .args(&["context"])
        .fails()
        .stderr_has("event payload");
}

#[test]
fn context_json_uses_default_urls() {
    Step::new()
        .actkit()
        .args(&["context", "--format", "json"])
        .passes()
        .stdout_has("\"api_url\": \"https://api.github.com\"")
        .stdout_has("\"ref\": \"\"");
}
