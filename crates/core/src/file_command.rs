// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File commands: appends to the runner's side-channel files
//!
//! Environment exports, outputs and state are written as heredoc-style
//! key-value blocks:
//!
//! ```text
//! NAME<<ghadelimiter_<uuid>
//! value
//! ghadelimiter_<uuid>
//! ```
//!
//! PATH entries are written as plain lines. The channel file must already
//! exist; it is never created here.

use crate::channel::{ChannelConfig, FileChannel};
use crate::delimiter::{DelimiterSource, UuidDelimiters};
use crate::value::CommandValue;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Delimiters drawn before giving up on a value that keeps colliding
pub const MAX_DELIMITER_ATTEMPTS: usize = 8;

#[derive(Debug, Error)]
pub enum FileCommandError {
    #[error("unable to find environment variable for file command {channel}: {variable} is not set")]
    MissingChannelVariable {
        channel: FileChannel,
        variable: String,
    },
    #[error("missing file for file command {channel} at path: {}", path.display())]
    MissingChannelFile { channel: FileChannel, path: PathBuf },
    #[error("no delimiter absent from the value of '{key}' after {attempts} attempts")]
    DelimiterCollision { key: String, attempts: usize },
    #[error("invalid file command key: {0:?}")]
    InvalidKey(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build a key-value block for `key`, encoding `value` with the command
/// value codec.
///
/// A fresh delimiter is drawn per call and redrawn while it occurs in the
/// key or the encoded value.
pub fn key_value_block(
    key: &str,
    value: &CommandValue,
    delimiters: &impl DelimiterSource,
) -> Result<String, FileCommandError> {
    if key.is_empty() || key.contains('\n') || key.contains('\r') || key.contains("<<") {
        return Err(FileCommandError::InvalidKey(key.to_string()));
    }

    let encoded = value.encode();
    let delimiter = delimiters
        .draw_clear_of(&[key, encoded.as_str()], MAX_DELIMITER_ATTEMPTS)
        .ok_or_else(|| FileCommandError::DelimiterCollision {
            key: key.to_string(),
            attempts: MAX_DELIMITER_ATTEMPTS,
        })?;
    Ok(format!("{key}<<{delimiter}\n{encoded}\n{delimiter}"))
}

/// Append `message` and a newline to the file behind `channel`
pub fn issue_file_command(
    config: &ChannelConfig,
    channel: FileChannel,
    message: &str,
) -> Result<(), FileCommandError> {
    let result = resolve(config, channel).and_then(|path| append_line(path, message));
    match &result {
        Ok(()) => tracing::debug!(%channel, bytes = message.len() + 1, "file command written"),
        Err(e) => tracing::error!(%channel, error = %e, "file command failed"),
    }
    result
}

fn resolve(config: &ChannelConfig, channel: FileChannel) -> Result<&Path, FileCommandError> {
    let path = config
        .path(channel)
        .ok_or_else(|| FileCommandError::MissingChannelVariable {
            channel,
            variable: config.variable(channel),
        })?;
    if !path.is_file() {
        return Err(FileCommandError::MissingChannelFile {
            channel,
            path: path.to_path_buf(),
        });
    }
    Ok(path)
}

fn append_line(path: &Path, message: &str) -> Result<(), FileCommandError> {
    let mut file = OpenOptions::new().append(true).open(path)?;
    file.write_all(format!("{message}\n").as_bytes())?;
    Ok(())
}

/// Writes file commands against a resolved channel configuration
#[derive(Clone)]
pub struct FileCommandWriter<D = UuidDelimiters> {
    config: ChannelConfig,
    delimiters: D,
}

impl FileCommandWriter<UuidDelimiters> {
    pub fn with_uuid_delimiters(config: ChannelConfig) -> Self {
        Self::new(config, UuidDelimiters)
    }
}

impl<D: DelimiterSource> FileCommandWriter<D> {
    pub fn new(config: ChannelConfig, delimiters: D) -> Self {
        Self { config, delimiters }
    }

    pub fn config(&self) -> &ChannelConfig {
        &self.config
    }

    /// Append a raw line to a channel
    pub fn issue(&self, channel: FileChannel, message: &str) -> Result<(), FileCommandError> {
        issue_file_command(&self.config, channel, message)
    }

    /// Build a key-value block with this writer's delimiter source
    pub fn prepare_key_value(
        &self,
        key: &str,
        value: &CommandValue,
    ) -> Result<String, FileCommandError> {
        key_value_block(key, value, &self.delimiters)
    }

    /// Append a key-value block to a channel
    pub fn issue_key_value(
        &self,
        channel: FileChannel,
        key: &str,
        value: &CommandValue,
    ) -> Result<(), FileCommandError> {
        let block = self.prepare_key_value(key, value)?;
        self.issue(channel, &block)
    }
}

#[cfg(test)]
#[path = "file_command_tests.rs"]
mod tests;
