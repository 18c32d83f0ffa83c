// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Display;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print a value in the specified format
pub fn print<T: Serialize + Display>(
    out: &mut impl Write,
    value: &T,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", value),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
            writeln!(out, "{}", json)
        }
    }
}

/// Print one line per item
pub fn print_lines<T: Display>(out: &mut impl Write, items: &[T]) -> io::Result<()> {
    for item in items {
        writeln!(out, "{}", item)?;
    }
    Ok(())
}
