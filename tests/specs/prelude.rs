// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared harness for the behavioral specs.
//!
//! A [`Step`] owns a temp directory holding the channel files a runner
//! would create for one step, and builds `actkit` invocations wired to them.

pub use similar_asserts::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

pub const CHANNELS: [(&str, &str); 4] = [
    ("GITHUB_ENV", "env"),
    ("GITHUB_PATH", "path"),
    ("GITHUB_OUTPUT", "output"),
    ("GITHUB_STATE", "state"),
];

pub const SUMMARY_FILE: &str = "summary.md";

pub struct Step {
    dir: TempDir,
}

impl Step {
    /// A step with every channel file and the summary file present
    pub fn new() -> Self {
        let step = Self::bare();
        for (_, file) in CHANNELS {
            step.file(file, "");
        }
        step.file(SUMMARY_FILE, "");
        step
    }

    /// A step with no files at all
    pub fn bare() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.dir.path().join(name)).unwrap()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// `actkit` with a clean environment pointing at this step's files
    pub fn actkit(&self) -> Cli {
        let mut cli = Cli::new();
        for (variable, file) in CHANNELS {
            cli = cli.env(variable, self.dir.path().join(file));
        }
        cli.env("GITHUB_STEP_SUMMARY", self.dir.path().join(SUMMARY_FILE))
    }
}

pub struct Cli {
    cmd: assert_cmd::Command,
}

impl Cli {
    pub fn new() -> Self {
        let mut cmd = assert_cmd::Command::cargo_bin("actkit").unwrap();
        cmd.env_clear();
        Self { cmd }
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn passes(mut self) -> Run {
        let output = self.cmd.output().unwrap();
        let run = Run { output };
        assert!(
            run.output.status.success(),
            "expected success, got {:?}\nstderr: {}",
            run.output.status.code(),
            run.stderr()
        );
        run
    }

    pub fn fails(mut self) -> Run {
        let output = self.cmd.output().unwrap();
        let run = Run { output };
        assert!(
            !run.output.status.success(),
            "expected failure\nstdout: {}",
            run.stdout()
        );
        run
    }
}

pub struct Run {
    output: Output,
}

impl Run {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn code(&self) -> Option<i32> {
        self.output.status.code()
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        assert_eq!(self.stdout(), expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(stdout.contains(needle), "stdout missing {needle:?}:\n{stdout}");
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let stderr = self.stderr();
        assert!(stderr.contains(needle), "stderr missing {needle:?}:\n{stderr}");
        self
    }
}

/// Split a channel file into `(name, delimiter, body)` blocks
pub fn blocks(content: &str) -> Vec<(String, String, String)> {
    let mut blocks = Vec::new();
    let mut lines = content.lines();
    while let Some(header) = lines.next() {
        let Some((name, delimiter)) = header.split_once("<<") else {
            panic!("not a block header: {header:?}");
        };
        let mut body = Vec::new();
        for line in lines.by_ref() {
            if line == delimiter {
                break;
            }
            body.push(line);
        }
        blocks.push((name.to_string(), delimiter.to_string(), body.join("\n")));
    }
    blocks
}
