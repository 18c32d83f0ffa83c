// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Heredoc delimiter generation for file commands
//!
//! The runner reads a key-value block up to the first line equal to its
//! delimiter, so a delimiter is only usable if it appears nowhere in the
//! key or the value it encloses.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Prefix every generated delimiter carries
pub const DELIMITER_PREFIX: &str = "ghadelimiter_";

/// Produces delimiter tokens for key-value blocks
pub trait DelimiterSource: Clone + Send + Sync {
    /// Draw a candidate delimiter
    fn draw(&self) -> String;

    /// Draw until a delimiter occurs in none of `contents`, giving up
    /// after `attempts` candidates.
    fn draw_clear_of(&self, contents: &[&str], attempts: usize) -> Option<String> {
        for attempt in 1..=attempts {
            let candidate = self.draw();
            if contents.iter().all(|c| !c.contains(candidate.as_str())) {
                return Some(candidate);
            }
            tracing::warn!(attempt, "delimiter collided with block content, drawing another");
        }
        None
    }
}

/// `ghadelimiter_<uuid v4>`
#[derive(Clone, Default)]
pub struct UuidDelimiters;

impl DelimiterSource for UuidDelimiters {
    fn draw(&self) -> String {
        format!("{}{}", DELIMITER_PREFIX, uuid::Uuid::new_v4())
    }
}

/// `ghadelimiter_1`, `ghadelimiter_2`, ... shared by all clones, so files
/// written in tests are byte-for-byte predictable
#[derive(Clone)]
pub struct SequentialDelimiters {
    drawn: Arc<AtomicU64>,
}

impl SequentialDelimiters {
    pub fn new() -> Self {
        Self {
            drawn: Arc::new(AtomicU64::new(0)),
        }
    }
}

impl Default for SequentialDelimiters {
    fn default() -> Self {
        Self::new()
    }
}

impl DelimiterSource for SequentialDelimiters {
    fn draw(&self) -> String {
        let n = self.drawn.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{}{}", DELIMITER_PREFIX, n)
    }
}
