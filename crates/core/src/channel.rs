// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File channel names and their resolved paths
//!
//! The runner hands each step a set of files through environment
//! variables named `<PREFIX>_<CHANNEL>`. [`ChannelConfig`] resolves them
//! once so the writers never touch the environment themselves.

use crate::env::Environment;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Variable prefix used by the runner
pub const DEFAULT_PREFIX: &str = "GITHUB";

/// Channel suffix naming the job summary file
pub const SUMMARY_SUFFIX: &str = "STEP_SUMMARY";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown file channel: {0} (expected ENV, PATH, OUTPUT or STATE)")]
pub struct UnknownChannel(pub String);

/// A side-channel file the runner reads after the step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileChannel {
    /// Environment exports for later steps
    Env,
    /// Entries prepended to PATH
    Path,
    /// Step outputs
    Output,
    /// State persisted for the post step
    State,
}

impl FileChannel {
    pub const ALL: [FileChannel; 4] = [
        FileChannel::Env,
        FileChannel::Path,
        FileChannel::Output,
        FileChannel::State,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FileChannel::Env => "ENV",
            FileChannel::Path => "PATH",
            FileChannel::Output => "OUTPUT",
            FileChannel::State => "STATE",
        }
    }

    /// Name of the variable holding this channel's path
    pub fn variable(&self, prefix: &str) -> String {
        format!("{}_{}", prefix, self.as_str())
    }
}

impl std::fmt::Display for FileChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FileChannel {
    type Err = UnknownChannel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ENV" => Ok(FileChannel::Env),
            "PATH" => Ok(FileChannel::Path),
            "OUTPUT" => Ok(FileChannel::Output),
            "STATE" => Ok(FileChannel::State),
            _ => Err(UnknownChannel(s.to_string())),
        }
    }
}

/// Channel paths resolved from the environment, or injected directly
#[derive(Debug, Clone)]
pub struct ChannelConfig {
    prefix: String,
    channels: HashMap<FileChannel, PathBuf>,
    summary: Option<PathBuf>,
}

impl ChannelConfig {
    /// An empty configuration; every channel is unresolved
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            channels: HashMap::new(),
            summary: None,
        }
    }

    /// Resolve all channels and the summary file from `env`.
    ///
    /// Empty values count as unset.
    pub fn from_env(env: &impl Environment, prefix: &str) -> Self {
        let mut config = Self::new(prefix);
        for channel in FileChannel::ALL {
            if let Some(path) = env.non_empty_var(&channel.variable(prefix)) {
                config.channels.insert(channel, PathBuf::from(path));
            }
        }
        config.summary = env
            .non_empty_var(&format!("{}_{}", prefix, SUMMARY_SUFFIX))
            .map(PathBuf::from);
        tracing::debug!(
            prefix,
            channels = config.channels.len(),
            summary = config.summary.is_some(),
            "resolved file channels"
        );
        config
    }

    pub fn with_channel(mut self, channel: FileChannel, path: impl Into<PathBuf>) -> Self {
        self.channels.insert(channel, path.into());
        self
    }

    pub fn with_summary(mut self, path: impl Into<PathBuf>) -> Self {
        self.summary = Some(path.into());
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn path(&self, channel: FileChannel) -> Option<&Path> {
        self.channels.get(&channel).map(PathBuf::as_path)
    }

    pub fn variable(&self, channel: FileChannel) -> String {
        channel.variable(&self.prefix)
    }

    pub fn summary_path(&self) -> Option<&Path> {
        self.summary.as_deref()
    }

    pub fn summary_variable(&self) -> String {
        format!("{}_{}", self.prefix, SUMMARY_SUFFIX)
    }
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}
