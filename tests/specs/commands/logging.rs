// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logging and control command specs
//!
//! Verify the exact command lines written to stdout.

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn debug_and_info() {
    let step = Step::new();
    step.actkit()
        .args(&["debug", "50% done\nnext"])
        .passes()
        .stdout_eq("::debug::50%25 done%0Anext\n");
    step.actkit()
        .args(&["info", "plain text"])
        .passes()
        .stdout_eq("plain text\n");
}

#[test]
fn annotation_properties_are_escaped_and_ordered() {
    Step::new()
        .actkit()
        .args(&[
            "notice",
            "look here",
            "--col",
            "3",
            "--file",
            "src/a,b.rs",
            "--title",
            "Note: one",
        ])
        .passes()
        .stdout_eq("::notice title=Note%3A one,file=src/a%2Cb.rs,col=3::look here\n");
}

#[test]
fn property_aliases_are_accepted() {
    Step::new()
        .actkit()
        .args(&[
            "error",
            "bad",
            "--property",
            "startLine=2",
            "--property",
            "STARTCOLUMN=4",
        ])
        .passes()
        .stdout_eq("::error line=2,col=4::bad\n");
}

#[test]
fn unknown_property_is_rejected() {
    Step::new()
        .actkit()
        .args(&["warning", "x", "--property", "colour=red"])
        .fails()
        .stdout_eq("")
        .stderr_has("colour")
        .stderr_has("warning");
}

#[test]
fn groups_mask_and_echo() {
    let step = Step::new();
    step.actkit()
        .args(&["group", "My Group"])
        .passes()
        .stdout_eq("::group::My Group\n");
    step.actkit()
        .args(&["endgroup"])
        .passes()
        .stdout_eq("::endgroup::\n");
    step.actkit()
        .args(&["mask", "s3cr3t"])
        .passes()
        .stdout_eq("::add-mask::s3cr3t\n");
    step.actkit()
        .args(&["echo", "off"])
        .passes()
        .stdout_eq("::echo::off\n");
}

#[test]
fn issue_writes_any_command() {
    Step::new()
        .actkit()
        .args(&["issue", "custom", "--property", "k=v"])
        .passes()
        .stdout_eq("::custom k=v::\n");
}

#[test]
fn fail_reports_error_and_exit_code() {
    let run = Step::new()
        .actkit()
        .args(&["fail", "no good"])
        .fails()
        .stdout_eq("::error::no good\n");
    assert_eq!(run.code(), Some(1));
}
