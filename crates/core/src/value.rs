// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical wire encoding for command values
//!
//! Booleans and unsigned integers pass through readably. Everything else
//! becomes a JSON string literal so a reader of the channel file always
//! sees an unambiguous token.

use serde::Serialize;

/// A value headed for a command line or a file channel
#[derive(Debug, Clone, PartialEq)]
pub enum CommandValue {
    /// Absent or empty input
    Empty,
    /// `true`, `false`, or an unsigned integer literal
    Literal(String),
    /// Free text, JSON-quoted on the wire
    Text(String),
    /// Structured value, JSON-encoded on the wire
    Json(serde_json::Value),
}

impl CommandValue {
    /// Classify textual input
    pub fn parse(input: &str) -> Self {
        if input.is_empty() {
            CommandValue::Empty
        } else if is_literal(input) {
            CommandValue::Literal(input.to_string())
        } else {
            CommandValue::Text(input.to_string())
        }
    }

    /// Wrap any serializable value
    pub fn json<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        Ok(CommandValue::Json(serde_json::to_value(value)?))
    }

    /// Render the canonical wire string
    pub fn encode(&self) -> String {
        match self {
            CommandValue::Empty => String::new(),
            CommandValue::Literal(s) => s.clone(),
            CommandValue::Text(s) => serde_json::Value::String(s.clone()).to_string(),
            CommandValue::Json(value) => match value {
                serde_json::Value::Null => String::new(),
                serde_json::Value::String(s) => CommandValue::parse(s).encode(),
                other => other.to_string(),
            },
        }
    }
}

impl From<&str> for CommandValue {
    fn from(s: &str) -> Self {
        CommandValue::parse(s)
    }
}

impl From<String> for CommandValue {
    fn from(s: String) -> Self {
        CommandValue::parse(&s)
    }
}

impl From<&String> for CommandValue {
    fn from(s: &String) -> Self {
        CommandValue::parse(s)
    }
}

impl From<bool> for CommandValue {
    fn from(b: bool) -> Self {
        CommandValue::Literal(b.to_string())
    }
}

impl From<u64> for CommandValue {
    fn from(n: u64) -> Self {
        CommandValue::Literal(n.to_string())
    }
}

impl From<u32> for CommandValue {
    fn from(n: u32) -> Self {
        CommandValue::Literal(n.to_string())
    }
}

impl From<serde_json::Value> for CommandValue {
    fn from(value: serde_json::Value) -> Self {
        CommandValue::Json(value)
    }
}

impl std::fmt::Display for CommandValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Encode textual input to its canonical wire string
pub fn to_command_value(input: &str) -> String {
    CommandValue::parse(input).encode()
}

/// Undo the quoting applied by [`to_command_value`].
///
/// A JSON string literal is unquoted; anything else is returned as-is.
pub fn decode_command_value(wire: &str) -> String {
    if wire.len() >= 2 && wire.starts_with('"') && wire.ends_with('"') {
        if let Ok(s) = serde_json::from_str::<String>(wire) {
            return s;
        }
    }
    wire.to_string()
}

fn is_literal(input: &str) -> bool {
    input == "true" || input == "false" || input.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
