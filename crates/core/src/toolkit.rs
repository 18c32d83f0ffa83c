// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! High-level step API
//!
//! [`Toolkit`] ties the pieces together: workflow command lines go to an
//! output sink (stdout in production), exports, outputs and state go to
//! the file channels, and inputs and context are read from an injected
//! environment.

use crate::channel::{ChannelConfig, FileChannel};
use crate::command::{issue_command, AnnotationProperties, Command, CommandError, LogCommand};
use crate::context::{Context, ContextError};
use crate::delimiter::{DelimiterSource, UuidDelimiters};
use crate::env::{Environment, SystemEnvironment};
use crate::file_command::{FileCommandError, FileCommandWriter};
use crate::input::{InputError, Inputs};
use crate::path::PATH_LIST_SEPARATOR;
use crate::summary::{Summary, SummaryError};
use crate::value::CommandValue;
use std::io::{self, Stdout, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolkitError {
    #[error(transparent)]
    FileCommand(#[from] FileCommandError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
    #[error(transparent)]
    Context(#[from] ContextError),
    #[error("failed to write workflow command: {0}")]
    Io(#[from] io::Error),
}

/// Exit code a step should report after [`Toolkit::set_failed`]
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Emits workflow commands and file commands for one step
pub struct Toolkit<W, D = UuidDelimiters, E = SystemEnvironment> {
    out: W,
    files: FileCommandWriter<D>,
    env: E,
    exit_code: i32,
}

impl Toolkit<Stdout> {
    /// Toolkit for the current process: stdout sink, channels resolved
    /// from the process environment under `prefix`.
    pub fn from_env(prefix: &str) -> Self {
        let env = SystemEnvironment;
        let config = ChannelConfig::from_env(&env, prefix);
        Self::new(io::stdout(), config, UuidDelimiters, env)
    }
}

impl<W: Write, D: DelimiterSource, E: Environment> Toolkit<W, D, E> {
    pub fn new(out: W, config: ChannelConfig, delimiters: D, env: E) -> Self {
        Self {
            out,
            files: FileCommandWriter::new(config, delimiters),
            env,
            exit_code: 0,
        }
    }

    pub fn config(&self) -> &ChannelConfig {
        self.files.config()
    }

    pub fn inputs(&self) -> Inputs<E> {
        Inputs::new(self.env.clone())
    }

    /// A fresh summary buffer targeting this step's summary file
    pub fn summary(&self) -> Summary {
        Summary::from_config(self.config())
    }

    pub fn context(&self) -> Result<Context, ContextError> {
        Context::from_env(&self.env, self.config().prefix())
    }

    /// The output sink, for plain output alongside workflow commands
    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    /// Consume the toolkit, returning the output sink
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Exit code the step should finish with
    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Write an arbitrary workflow command
    pub fn issue(&mut self, command: &Command) -> Result<(), ToolkitError> {
        self.emit(&command.to_string())
    }

    fn emit(&mut self, line: &str) -> Result<(), ToolkitError> {
        tracing::trace!(line, "workflow command");
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    fn emit_simple(&mut self, name: &str, message: &str) -> Result<(), ToolkitError> {
        self.emit(&issue_command(Some(name), Some(message), &[]))
    }

    // -------------------------------------------------------------------------
    // Logging
    // -------------------------------------------------------------------------

    pub fn log(&mut self, command: &LogCommand, message: &str) -> Result<(), ToolkitError> {
        self.emit(&command.to_line(message))
    }

    pub fn debug(&mut self, message: &str) -> Result<(), ToolkitError> {
        self.log(&LogCommand::Debug, message)
    }

    /// Plain log line, not a command
    pub fn info(&mut self, message: &str) -> Result<(), ToolkitError> {
        writeln!(self.out, "{}", message)?;
        Ok(())
    }

    pub fn error(&mut self, message: &str, props: &AnnotationProperties) -> Result<(), ToolkitError> {
        self.log(&LogCommand::Error(props.clone()), message)
    }

    pub fn warning(
        &mut self,
        message: &str,
        props: &AnnotationProperties,
    ) -> Result<(), ToolkitError> {
        self.log(&LogCommand::Warning(props.clone()), message)
    }

    pub fn notice(&mut self, message: &str, props: &AnnotationProperties) -> Result<(), ToolkitError> {
        self.log(&LogCommand::Notice(props.clone()), message)
    }

    /// Log an error and mark the step as failed
    pub fn set_failed(&mut self, message: &str) -> Result<(), ToolkitError> {
        self.exit_code = FAILURE_EXIT_CODE;
        self.error(message, &AnnotationProperties::default())
    }

    // -------------------------------------------------------------------------
    // Output grouping and command control
    // -------------------------------------------------------------------------

    pub fn start_group(&mut self, name: &str) -> Result<(), ToolkitError> {
        self.emit_simple("group", name)
    }

    pub fn end_group(&mut self) -> Result<(), ToolkitError> {
        self.emit(&issue_command(Some("endgroup"), None, &[]))
    }

    /// Run `f` inside a collapsible group. The group is closed even when
    /// `f` fails.
    pub fn group<T, Err, F>(&mut self, name: &str, f: F) -> Result<T, Err>
    where
        F: FnOnce(&mut Self) -> Result<T, Err>,
        Err: From<ToolkitError>,
    {
        self.start_group(name)?;
        let result = f(self);
        self.end_group()?;
        result
    }

    /// Ask the runner to mask `secret` in all later log output
    pub fn set_secret(&mut self, secret: &str) -> Result<(), ToolkitError> {
        self.emit_simple("add-mask", secret)
    }

    pub fn set_command_echo(&mut self, enabled: bool) -> Result<(), ToolkitError> {
        self.emit_simple("echo", if enabled { "on" } else { "off" })
    }

    /// Stop command processing under a fresh random token, returned so the
    /// caller can pass it to [`Toolkit::resume_commands`]
    pub fn stop_commands(&mut self) -> Result<String, ToolkitError> {
        let token = uuid::Uuid::new_v4().simple().to_string();
        self.stop_commands_with(&token)?;
        Ok(token)
    }

    pub fn stop_commands_with(&mut self, token: &str) -> Result<(), ToolkitError> {
        self.emit_simple("stop-commands", token)
    }

    pub fn resume_commands(&mut self, token: &str) -> Result<(), ToolkitError> {
        self.emit(&issue_command(Some(token), None, &[]))
    }

    // -------------------------------------------------------------------------
    // File channels
    // -------------------------------------------------------------------------

    /// Export a variable to later steps and to this process's environment
    pub fn export_variable(
        &mut self,
        name: &str,
        value: impl Into<CommandValue>,
    ) -> Result<(), ToolkitError> {
        let value = value.into();
        self.env.set_var(name, &value.encode());
        self.files.issue_key_value(FileChannel::Env, name, &value)?;
        Ok(())
    }

    /// Prepend `path` to PATH for later steps and for this process
    pub fn add_path(&mut self, path: &str) -> Result<(), ToolkitError> {
        self.files.issue(FileChannel::Path, path)?;
        let current = self.env.var("PATH").unwrap_or_default();
        let updated = if current.is_empty() {
            path.to_string()
        } else {
            format!("{}{}{}", path, PATH_LIST_SEPARATOR, current)
        };
        self.env.set_var("PATH", &updated);
        Ok(())
    }

    pub fn set_output(
        &mut self,
        name: &str,
        value: impl Into<CommandValue>,
    ) -> Result<(), ToolkitError> {
        self.files
            .issue_key_value(FileChannel::Output, name, &value.into())?;
        Ok(())
    }

    /// Persist state for a later phase of this action
    pub fn save_state(
        &mut self,
        name: &str,
        value: impl Into<CommandValue>,
    ) -> Result<(), ToolkitError> {
        self.files
            .issue_key_value(FileChannel::State, name, &value.into())?;
        Ok(())
    }

    pub fn get_state(&self, name: &str) -> String {
        self.inputs().get_state(name)
    }

    pub fn is_debug(&self) -> bool {
        self.inputs().is_debug()
    }
}

#[cfg(test)]
#[path = "toolkit_tests.rs"]
mod tests;
