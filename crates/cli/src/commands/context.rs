// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run context inspection

use crate::output::{self, OutputFormat};
use actkit_core::{DelimiterSource, Environment, Toolkit};
use clap::Args;
use std::io::Write;

#[derive(Args, Debug)]
pub struct ContextArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Print the run context in the requested format
pub fn show<W: Write, D: DelimiterSource, E: Environment>(
    toolkit: &mut Toolkit<W, D, E>,
    args: &ContextArgs,
) -> anyhow::Result<()> {
    let context = toolkit.context()?;
    output::print(toolkit.out(), &context, args.format)?;
    Ok(())
}
