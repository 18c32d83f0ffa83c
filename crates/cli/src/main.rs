// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! actkit - workflow command toolkit CLI
//!
//! Stdout carries the runner protocol; diagnostics go to stderr.

#![cfg_attr(test, allow(clippy::unwrap_used))]

mod commands;
mod completions;
mod output;

use actkit_core::{FileChannel, Toolkit, DEFAULT_PREFIX};
use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::annotate::{self, AnnotationArgs, EchoMode, IssueArgs};
use commands::context::{self, ContextArgs};
use commands::files::{self, KeyValueArgs};
use commands::input::{self, InputArgs};
use commands::summary::{self, SummaryArgs};
use completions::CompletionsArgs;
use std::io::Write;

/// Environment variable holding the log filter
const LOG_FILTER_VARIABLE: &str = "ACTKIT_LOG";

#[derive(Parser)]
#[command(
    name = "actkit",
    version,
    about = "Emit workflow commands and file commands for CI runner steps"
)]
struct Cli {
    /// Prefix of the runner's environment variables
    #[arg(long, global = true, default_value = DEFAULT_PREFIX)]
    prefix: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a debug message
    Debug { message: String },
    /// Write a plain log line
    Info { message: String },
    /// Create a notice annotation
    Notice(AnnotationArgs),
    /// Create a warning annotation
    Warning(AnnotationArgs),
    /// Create an error annotation
    Error(AnnotationArgs),
    /// Begin a collapsible output group
    Group { name: String },
    /// End the current output group
    Endgroup,
    /// Mask a value in later log output
    Mask { secret: String },
    /// Export an environment variable to later steps
    Export(KeyValueArgs),
    /// Prepend a directory to PATH for later steps
    AddPath { path: String },
    /// Set a step output
    Output(KeyValueArgs),
    /// Save state for a later phase of this action
    State(KeyValueArgs),
    /// Print state saved by an earlier phase
    GetState { name: String },
    /// Print an action input
    Input(InputArgs),
    /// Turn command echoing on or off
    Echo {
        #[arg(value_enum)]
        mode: EchoMode,
    },
    /// Log an error and exit with a failure code
    Fail { message: String },
    /// Write an arbitrary workflow command
    Issue(IssueArgs),
    /// Print the run context
    Context(ContextArgs),
    /// Append to the job summary
    Summary(SummaryArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

fn main() -> Result<()> {
    setup_logging();
    let cli = Cli::parse();

    let mut toolkit = Toolkit::from_env(&cli.prefix);
    match cli.command {
        Commands::Debug { message } => toolkit.debug(&message)?,
        Commands::Info { message } => toolkit.info(&message)?,
        Commands::Notice(args) => annotate::annotate(&mut toolkit, "notice", &args)?,
        Commands::Warning(args) => annotate::annotate(&mut toolkit, "warning", &args)?,
        Commands::Error(args) => annotate::annotate(&mut toolkit, "error", &args)?,
        Commands::Group { name } => toolkit.start_group(&name)?,
        Commands::Endgroup => toolkit.end_group()?,
        Commands::Mask { secret } => toolkit.set_secret(&secret)?,
        Commands::Export(args) => files::set(&mut toolkit, FileChannel::Env, &args)?,
        Commands::AddPath { path } => files::add_path(&mut toolkit, &path)?,
        Commands::Output(args) => files::set(&mut toolkit, FileChannel::Output, &args)?,
        Commands::State(args) => files::set(&mut toolkit, FileChannel::State, &args)?,
        Commands::GetState { name } => {
            let value = toolkit.get_state(&name);
            writeln!(toolkit.out(), "{}", value)?;
        }
        Commands::Input(args) => {
            let lines = input::read(&toolkit.inputs(), &args)?;
            output::print_lines(toolkit.out(), &lines)?;
        }
        Commands::Echo { mode } => toolkit.set_command_echo(mode.into())?,
        Commands::Fail { message } => toolkit.set_failed(&message)?,
        Commands::Issue(args) => annotate::issue(&mut toolkit, args)?,
        Commands::Context(args) => context::show(&mut toolkit, &args)?,
        Commands::Summary(args) => summary::handle(&mut toolkit.summary(), args)?,
        Commands::Completions(args) => {
            completions::generate_completions::<Cli>(args.shell, toolkit.out())
        }
    }

    toolkit.out().flush()?;
    let code = toolkit.exit_code();
    if code != 0 {
        tracing::debug!(code, "step marked as failed");
        std::process::exit(code);
    }
    Ok(())
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_env(LOG_FILTER_VARIABLE).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
