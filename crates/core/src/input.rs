// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Step inputs and persisted state read from the environment
//!
//! An input named `my input` arrives as `INPUT_MY_INPUT`. State saved by
//! an earlier phase of the same action arrives as `STATE_<name>`.

use crate::env::Environment;
use crate::value::decode_command_value;
use thiserror::Error;

/// Variable the runner sets to `1` when step debug logging is on
pub const DEBUG_VARIABLE: &str = "RUNNER_DEBUG";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("input required and not supplied: {name}")]
    RequiredInputMissing { name: String },
    #[error(
        "input does not meet YAML 1.2 \"Core Schema\" specification: {name}; \
         supported boolean values: true | True | TRUE | false | False | FALSE"
    )]
    InputNotBoolean { name: String },
}

/// Options for reading an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputOptions {
    /// Fail when the input is absent or empty
    pub required: bool,
    /// Trim leading and trailing whitespace (on by default)
    pub trim_whitespace: bool,
}

impl InputOptions {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    pub fn untrimmed(mut self) -> Self {
        self.trim_whitespace = false;
        self
    }
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            required: false,
            trim_whitespace: true,
        }
    }
}

/// Environment variable carrying the input `name`
pub fn input_variable(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// Reads inputs and state through an [`Environment`]
#[derive(Clone)]
pub struct Inputs<E> {
    env: E,
}

impl<E: Environment> Inputs<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// Read an input; absent inputs read as the empty string unless
    /// `options.required` is set.
    pub fn get_input(&self, name: &str, options: InputOptions) -> Result<String, InputError> {
        let value = self.env.var(&input_variable(name)).unwrap_or_default();
        if options.required && value.is_empty() {
            return Err(InputError::RequiredInputMissing {
                name: name.to_string(),
            });
        }
        if options.trim_whitespace {
            Ok(value.trim().to_string())
        } else {
            Ok(value)
        }
    }

    /// Read an input as a YAML 1.2 core-schema boolean
    pub fn get_boolean_input(&self, name: &str, options: InputOptions) -> Result<bool, InputError> {
        match self.get_input(name, options)?.as_str() {
            "true" | "True" | "TRUE" => Ok(true),
            "false" | "False" | "FALSE" => Ok(false),
            _ => Err(InputError::InputNotBoolean {
                name: name.to_string(),
            }),
        }
    }

    /// Read an input as a list of non-empty lines
    pub fn get_multiline_input(
        &self,
        name: &str,
        options: InputOptions,
    ) -> Result<Vec<String>, InputError> {
        let raw = self.get_input(name, options)?;
        Ok(raw
            .split('\n')
            .filter(|line| !line.is_empty())
            .map(|line| {
                if options.trim_whitespace {
                    line.trim().to_string()
                } else {
                    line.to_string()
                }
            })
            .collect())
    }

    /// Read state saved by an earlier phase; empty if none
    pub fn get_state(&self, name: &str) -> String {
        self.env
            .var(&format!("STATE_{}", name))
            .map(|v| decode_command_value(&v))
            .unwrap_or_default()
    }

    pub fn is_debug(&self) -> bool {
        self.env.var(DEBUG_VARIABLE).as_deref() == Some("1")
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
