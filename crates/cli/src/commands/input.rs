// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Input and state lookup

use actkit_core::{Environment, InputOptions, Inputs};
use clap::Args;

#[derive(Args, Debug)]
pub struct InputArgs {
    /// Input name as declared by the action
    pub name: String,
    /// Fail when the input is missing or empty
    #[arg(long)]
    pub required: bool,
    /// Interpret the input as a boolean
    #[arg(long, conflicts_with = "multiline")]
    pub boolean: bool,
    /// Print one line per non-empty line of the input
    #[arg(long)]
    pub multiline: bool,
    /// Keep surrounding whitespace
    #[arg(long)]
    pub no_trim: bool,
}

impl InputArgs {
    fn options(&self) -> InputOptions {
        InputOptions {
            required: self.required,
            trim_whitespace: !self.no_trim,
        }
    }
}

/// Resolve an input to the lines printed on stdout
pub fn read<E: Environment>(inputs: &Inputs<E>, args: &InputArgs) -> anyhow::Result<Vec<String>> {
    let options = args.options();
    if args.boolean {
        Ok(vec![inputs
            .get_boolean_input(&args.name, options)?
            .to_string()])
    } else if args.multiline {
        Ok(inputs.get_multiline_input(&args.name, options)?)
    } else {
        Ok(vec![inputs.get_input(&args.name, options)?])
    }
}
