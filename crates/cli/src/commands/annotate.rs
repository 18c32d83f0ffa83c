// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logging and annotation commands

use super::parse_key_value;
use actkit_core::{
    AnnotationProperties, Command, CommandError, DelimiterSource, Environment, LogCommand,
    Toolkit,
};
use clap::{Args, ValueEnum};
use std::io::Write;

#[derive(Args, Debug)]
pub struct AnnotationArgs {
    /// Annotation message
    pub message: String,
    /// Custom title for the annotation
    #[arg(long)]
    pub title: Option<String>,
    /// File the annotation points at
    #[arg(long)]
    pub file: Option<String>,
    /// Start line (1-based)
    #[arg(long)]
    pub line: Option<u32>,
    #[arg(long)]
    pub end_line: Option<u32>,
    /// Start column (1-based)
    #[arg(long)]
    pub col: Option<u32>,
    #[arg(long)]
    pub end_column: Option<u32>,
    /// Extra property as key=value; aliases like startLine are accepted
    #[arg(long = "property", value_parser = parse_key_value)]
    pub properties: Vec<(String, String)>,
}

impl AnnotationArgs {
    /// Merge `--property` pairs with the dedicated flags; flags win
    pub fn to_properties(&self, caller: &str) -> Result<AnnotationProperties, CommandError> {
        let mut props = AnnotationProperties::from_pairs(&self.properties, caller)?;
        if let Some(title) = &self.title {
            props = props.title(title.clone());
        }
        if let Some(file) = &self.file {
            props = props.file(file.clone());
        }
        if let Some(line) = self.line {
            props = props.line(line);
        }
        if let Some(end_line) = self.end_line {
            props = props.end_line(end_line);
        }
        if let Some(col) = self.col {
            props = props.col(col);
        }
        if let Some(end_column) = self.end_column {
            props = props.end_column(end_column);
        }
        Ok(props)
    }
}

/// Emit an `error`, `warning` or `notice` annotation
pub fn annotate<W: Write, D: DelimiterSource, E: Environment>(
    toolkit: &mut Toolkit<W, D, E>,
    name: &str,
    args: &AnnotationArgs,
) -> anyhow::Result<()> {
    let props = args.to_properties(name)?;
    let command = LogCommand::annotation(name, props)
        .ok_or_else(|| anyhow::anyhow!("unknown annotation command: {}", name))?;
    toolkit.log(&command, &args.message)?;
    Ok(())
}

#[derive(Args, Debug)]
pub struct IssueArgs {
    /// Command name
    pub name: String,
    /// Command message
    pub message: Option<String>,
    /// Property as key=value
    #[arg(long = "property", value_parser = parse_key_value)]
    pub properties: Vec<(String, String)>,
}

/// Emit an arbitrary workflow command
pub fn issue<W: Write, D: DelimiterSource, E: Environment>(
    toolkit: &mut Toolkit<W, D, E>,
    args: IssueArgs,
) -> anyhow::Result<()> {
    let mut command = Command::new(args.name);
    if let Some(message) = args.message {
        command = command.with_message(message);
    }
    for (key, value) in args.properties {
        command = command.with_property(key, value);
    }
    toolkit.issue(&command)?;
    Ok(())
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EchoMode {
    On,
    Off,
}

impl From<EchoMode> for bool {
    fn from(mode: EchoMode) -> Self {
        matches!(mode, EchoMode::On)
    }
}

#[cfg(test)]
#[path = "annotate_tests.rs"]
mod tests;
