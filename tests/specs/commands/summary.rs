// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job summary specs

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn ops_append_html_fragments() {
    let step = Step::new();
    step.actkit()
        .args(&["summary", "heading", "Build", "--level", "3"])
        .passes()
        .stdout_eq("");
    step.actkit()
        .args(&["summary", "code", "cargo build", "--lang", "sh"])
        .passes();
    step.actkit()
        .args(&["summary", "details", "Logs", "all green"])
        .passes();
    step.actkit()
        .args(&["summary", "quote", "ship it", "--cite", "https://x.test"])
        .passes();
    step.actkit().args(&["summary", "break"]).passes();

    assert_eq!(
        step.read(SUMMARY_FILE),
        "<h3>Build</h3>\n\
         <pre><code lang=\"sh\">cargo build</code></pre>\n\
         <details><summary>Logs</summary>all green</details>\n\
         <blockquote cite=\"https://x.test\">ship it</blockquote>\n\
         <br>\n"
    );
}

#[test]
fn heading_level_is_clamped() {
    let step = Step::new();
    step.actkit()
        .args(&["summary", "heading", "Low", "--level", "0"])
        .passes();
    assert_eq!(step.read(SUMMARY_FILE), "<h1>Low</h1>\n");
}

#[test]
fn image_with_dimensions() {
    let step = Step::new();
    step.actkit()
        .args(&[
            "summary", "image", "chart.png", "--alt", "Chart", "--width", "32", "--height", "16",
        ])
        .passes();
    assert_eq!(
        step.read(SUMMARY_FILE),
        "<img src=\"chart.png\" alt=\"Chart\" width=\"32\" height=\"16\">\n"
    );
}

#[test]
fn overwrite_replaces_existing_content() {
    let step = Step::new();
    step.file(SUMMARY_FILE, "stale\n");
    step.actkit()
        .args(&["summary", "--overwrite", "raw", "fresh"])
        .passes();
    assert_eq!(step.read(SUMMARY_FILE), "fresh\n");
}

#[test]
fn clear_empties_the_file() {
    let step = Step::new();
    step.file(SUMMARY_FILE, "<h1>old</h1>\n");
    step.actkit().args(&["summary", "clear"]).passes();
    assert_eq!(step.read(SUMMARY_FILE), "");
}

#[test]
fn missing_summary_variable_is_reported() {
    Cli::new()
        .args(&["summary", "separator"])
        .fails()
        .stderr_has("GITHUB_STEP_SUMMARY");
}
