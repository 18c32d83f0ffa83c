// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Commands that append to the runner's channel files

use actkit_core::{CommandValue, DelimiterSource, Environment, FileChannel, Toolkit};
use clap::Args;
use std::io::Write;

#[derive(Args, Debug)]
pub struct KeyValueArgs {
    pub name: String,
    /// Value; `true`, `false` and integers are written unquoted
    pub value: String,
    /// Parse the value as JSON instead
    #[arg(long)]
    pub json: bool,
}

impl KeyValueArgs {
    fn value(&self) -> anyhow::Result<CommandValue> {
        if self.json {
            let parsed: serde_json::Value = serde_json::from_str(&self.value)?;
            Ok(CommandValue::from(parsed))
        } else {
            Ok(CommandValue::from(self.value.as_str()))
        }
    }
}

/// Write a key-value block to the ENV, OUTPUT or STATE channel
pub fn set<W: Write, D: DelimiterSource, E: Environment>(
    toolkit: &mut Toolkit<W, D, E>,
    channel: FileChannel,
    args: &KeyValueArgs,
) -> anyhow::Result<()> {
    let value = args.value()?;
    match channel {
        FileChannel::Env => toolkit.export_variable(&args.name, value)?,
        FileChannel::Output => toolkit.set_output(&args.name, value)?,
        FileChannel::State => toolkit.save_state(&args.name, value)?,
        FileChannel::Path => anyhow::bail!("PATH entries are not key-value pairs"),
    }
    Ok(())
}

pub fn add_path<W: Write, D: DelimiterSource, E: Environment>(
    toolkit: &mut Toolkit<W, D, E>,
    path: &str,
) -> anyhow::Result<()> {
    toolkit.add_path(path)?;
    Ok(())
}
