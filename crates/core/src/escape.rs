// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Escaping for workflow command lines
//!
//! Percent is replaced first so later substitutions are not re-escaped.
//! These are not idempotent: escaping an escaped string doubles every `%`.

/// Escape a command message body
pub fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a command property value.
///
/// Also escapes `:` and `,`, the line's own separators.
pub fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

#[cfg(test)]
#[path = "escape_tests.rs"]
mod tests;
