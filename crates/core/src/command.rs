// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workflow command encoding
//!
//! A workflow command is a single stdout line the runner parses:
//!
//! ```text
//! ::name key=value,key=value::message
//! ```
//!
//! Property values go through [`escape_property`], the message through
//! [`escape_data`]. Property order is preserved as given.

use crate::escape::{escape_data, escape_property};
use thiserror::Error;

/// Name substituted when a command is issued without one
pub const MISSING_COMMAND: &str = "missing.command";

/// Errors from annotation property validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error(
        "invalid annotation property '{key}' passed to {caller}; \
         expected one of title, file, line, endLine, col, endColumn"
    )]
    InvalidPropertyKey { key: String, caller: String },
    #[error("annotation property '{key}' must be an unsigned integer, got '{value}'")]
    InvalidPropertyValue { key: String, value: String },
}

/// Format a workflow command line.
///
/// An absent or empty name is replaced with [`MISSING_COMMAND`] so misuse
/// stays visible in the log.
pub fn issue_command(
    command: Option<&str>,
    message: Option<&str>,
    properties: &[(&str, &str)],
) -> String {
    let name = command.filter(|c| !c.is_empty()).unwrap_or(MISSING_COMMAND);
    let mut line = format!("::{}", name);

    if !properties.is_empty() {
        line.push(' ');
        let pairs: Vec<String> = properties
            .iter()
            .map(|(k, v)| format!("{}={}", k, escape_property(v)))
            .collect();
        line.push_str(&pairs.join(","));
    }

    line.push_str("::");

    if let Some(message) = message {
        line.push_str(&escape_data(message));
    }
    line
}

/// An owned workflow command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub message: Option<String>,
    pub properties: Vec<(String, String)>,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: None,
            properties: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push((key.into(), value.into()));
        self
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let properties: Vec<(&str, &str)> = self
            .properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        f.write_str(&issue_command(
            Some(&self.name),
            self.message.as_deref(),
            &properties,
        ))
    }
}

/// Canonical annotation property keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Title,
    File,
    Line,
    EndLine,
    Col,
    EndColumn,
}

impl PropertyKey {
    /// Resolve a key case-insensitively, accepting `startLine` and
    /// `startColumn` as aliases.
    ///
    /// `caller` names the operation being validated and is carried into
    /// the error.
    pub fn parse(key: &str, caller: &str) -> Result<Self, CommandError> {
        match key.to_ascii_lowercase().as_str() {
            "title" => Ok(PropertyKey::Title),
            "file" => Ok(PropertyKey::File),
            "line" | "startline" => Ok(PropertyKey::Line),
            "endline" => Ok(PropertyKey::EndLine),
            "col" | "startcolumn" => Ok(PropertyKey::Col),
            "endcolumn" => Ok(PropertyKey::EndColumn),
            _ => Err(CommandError::InvalidPropertyKey {
                key: key.to_string(),
                caller: caller.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKey::Title => "title",
            PropertyKey::File => "file",
            PropertyKey::Line => "line",
            PropertyKey::EndLine => "endLine",
            PropertyKey::Col => "col",
            PropertyKey::EndColumn => "endColumn",
        }
    }
}

impl std::fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source location and title attached to an error, warning, or notice
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationProperties {
    pub title: Option<String>,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub end_line: Option<u32>,
    pub col: Option<u32>,
    pub end_column: Option<u32>,
}

impl AnnotationProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    pub fn end_line(mut self, end_line: u32) -> Self {
        self.end_line = Some(end_line);
        self
    }

    pub fn col(mut self, col: u32) -> Self {
        self.col = Some(col);
        self
    }

    pub fn end_column(mut self, end_column: u32) -> Self {
        self.end_column = Some(end_column);
        self
    }

    /// Build from free-form key/value pairs, as given on a command line.
    ///
    /// Later pairs overwrite earlier ones for the same canonical key.
    pub fn from_pairs<K, V>(pairs: &[(K, V)], caller: &str) -> Result<Self, CommandError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut props = Self::default();
        for (key, value) in pairs {
            let value = value.as_ref();
            match PropertyKey::parse(key.as_ref(), caller)? {
                PropertyKey::Title => props.title = Some(value.to_string()),
                PropertyKey::File => props.file = Some(value.to_string()),
                PropertyKey::Line => props.line = Some(parse_position(PropertyKey::Line, value)?),
                PropertyKey::EndLine => {
                    props.end_line = Some(parse_position(PropertyKey::EndLine, value)?)
                }
                PropertyKey::Col => props.col = Some(parse_position(PropertyKey::Col, value)?),
                PropertyKey::EndColumn => {
                    props.end_column = Some(parse_position(PropertyKey::EndColumn, value)?)
                }
            }
        }
        Ok(props)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Present properties in canonical order
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(title) = &self.title {
            pairs.push((PropertyKey::Title.as_str(), title.clone()));
        }
        if let Some(file) = &self.file {
            pairs.push((PropertyKey::File.as_str(), file.clone()));
        }
        let positions = [
            (PropertyKey::Line, self.line),
            (PropertyKey::EndLine, self.end_line),
            (PropertyKey::Col, self.col),
            (PropertyKey::EndColumn, self.end_column),
        ];
        for (key, value) in positions {
            if let Some(n) = value {
                pairs.push((key.as_str(), n.to_string()));
            }
        }
        pairs
    }
}

fn parse_position(key: PropertyKey, value: &str) -> Result<u32, CommandError> {
    value
        .trim()
        .parse()
        .map_err(|_| CommandError::InvalidPropertyValue {
            key: key.as_str().to_string(),
            value: value.to_string(),
        })
}

/// Logging commands, each carrying only what its kind accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogCommand {
    Debug,
    Error(AnnotationProperties),
    Warning(AnnotationProperties),
    Notice(AnnotationProperties),
}

impl LogCommand {
    pub fn name(&self) -> &'static str {
        match self {
            LogCommand::Debug => "debug",
            LogCommand::Error(_) => "error",
            LogCommand::Warning(_) => "warning",
            LogCommand::Notice(_) => "notice",
        }
    }

    /// Build the annotation variant for a command name
    pub fn annotation(name: &str, props: AnnotationProperties) -> Option<Self> {
        match name {
            "error" => Some(LogCommand::Error(props)),
            "warning" => Some(LogCommand::Warning(props)),
            "notice" => Some(LogCommand::Notice(props)),
            _ => None,
        }
    }

    pub fn properties(&self) -> Option<&AnnotationProperties> {
        match self {
            LogCommand::Debug => None,
            LogCommand::Error(p) | LogCommand::Warning(p) | LogCommand::Notice(p) => Some(p),
        }
    }

    /// Format this command with a message
    pub fn to_line(&self, message: &str) -> String {
        let pairs = self.properties().map(|p| p.to_pairs()).unwrap_or_default();
        let pairs: Vec<(&str, &str)> = pairs.iter().map(|(k, v)| (*k, v.as_str())).collect();
        issue_command(Some(self.name()), Some(message), &pairs)
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
