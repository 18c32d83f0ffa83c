// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job summary commands
//!
//! Each invocation renders one fragment and flushes it to the summary file.

use actkit_core::{ImageOptions, Summary, TableCell};
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Replace the summary file instead of appending
    #[arg(long, global = true)]
    pub overwrite: bool,

    #[command(subcommand)]
    pub command: SummaryCommand,
}

#[derive(Subcommand, Debug)]
pub enum SummaryCommand {
    /// Add a heading
    Heading {
        text: String,
        /// Heading level, clamped to 1-6
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        level: i32,
    },
    /// Add raw text
    Raw {
        text: String,
        /// Do not terminate with a newline
        #[arg(long)]
        no_eol: bool,
    },
    /// Add a code block
    Code {
        code: String,
        #[arg(long)]
        lang: Option<String>,
    },
    /// Add a list
    List {
        #[arg(required = true)]
        items: Vec<String>,
        #[arg(long)]
        ordered: bool,
    },
    /// Add a table; cells are comma separated
    Table {
        /// Header row
        #[arg(long)]
        header: Option<String>,
        /// Data row, repeatable
        #[arg(long = "row")]
        rows: Vec<String>,
    },
    /// Add a collapsible details element
    Details { label: String, content: String },
    /// Add an image
    Image {
        src: String,
        #[arg(long)]
        alt: Option<String>,
        #[arg(long)]
        width: Option<String>,
        #[arg(long)]
        height: Option<String>,
    },
    /// Add a block quote
    Quote {
        text: String,
        #[arg(long)]
        cite: Option<String>,
    },
    /// Add a link
    Link { text: String, href: String },
    /// Add a horizontal rule
    Separator,
    /// Add a line break
    Break,
    /// Empty the summary file
    Clear,
}

fn split_cells(row: &str) -> Vec<&str> {
    row.split(',').map(str::trim).collect()
}

/// Render `command` into `summary` and flush it
pub fn handle(summary: &mut Summary, args: SummaryArgs) -> anyhow::Result<()> {
    match args.command {
        SummaryCommand::Heading { text, level } => {
            summary.add_heading(&text, level);
        }
        SummaryCommand::Raw { text, no_eol } => {
            summary.add_raw(&text, !no_eol);
        }
        SummaryCommand::Code { code, lang } => {
            summary.add_code_block(&code, lang.as_deref());
        }
        SummaryCommand::List { items, ordered } => {
            summary.add_list(&items, ordered);
        }
        SummaryCommand::Table { header, rows } => {
            let mut table: Vec<Vec<TableCell>> = Vec::new();
            if let Some(header) = header {
                table.push(split_cells(&header).into_iter().map(TableCell::header).collect());
            }
            for row in &rows {
                table.push(split_cells(row).into_iter().map(TableCell::from).collect());
            }
            summary.add_table(&table);
        }
        SummaryCommand::Details { label, content } => {
            summary.add_details(&label, &content);
        }
        SummaryCommand::Image {
            src,
            alt,
            width,
            height,
        } => {
            summary.add_image(&src, &ImageOptions { alt, width, height })?;
        }
        SummaryCommand::Quote { text, cite } => {
            summary.add_quote(&text, cite.as_deref());
        }
        SummaryCommand::Link { text, href } => {
            summary.add_link(&text, &href);
        }
        SummaryCommand::Separator => {
            summary.add_separator();
        }
        SummaryCommand::Break => {
            summary.add_break();
        }
        SummaryCommand::Clear => {
            summary.clear()?;
            return Ok(());
        }
    }
    summary.write(args.overwrite)?;
    Ok(())
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
