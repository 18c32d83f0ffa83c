// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Environment abstraction for testable variable lookups

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Read and write access to environment variables
pub trait Environment: Clone + Send + Sync {
    fn var(&self, name: &str) -> Option<String>;

    fn set_var(&self, name: &str, value: &str);

    /// Like [`Environment::var`], treating an empty value as unset
    fn non_empty_var(&self, name: &str) -> Option<String> {
        self.var(name).filter(|v| !v.is_empty())
    }
}

/// The real process environment
#[derive(Clone, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn set_var(&self, name: &str, value: &str) {
        std::env::set_var(name, value);
    }
}

/// In-memory environment for testing
#[derive(Clone, Default)]
pub struct FakeEnvironment {
    vars: Arc<Mutex<HashMap<String, String>>>,
}

impl FakeEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`Environment::set_var`]
    pub fn with(self, name: &str, value: impl Into<String>) -> Self {
        self.insert(name, value.into());
        self
    }

    pub fn remove(&self, name: &str) {
        let mut vars = self.vars.lock().unwrap_or_else(|e| e.into_inner());
        vars.remove(name);
    }

    fn insert(&self, name: &str, value: String) {
        let mut vars = self.vars.lock().unwrap_or_else(|e| e.into_inner());
        vars.insert(name.to_string(), value);
    }
}

impl Environment for FakeEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        let vars = self.vars.lock().unwrap_or_else(|e| e.into_inner());
        vars.get(name).cloned()
    }

    fn set_var(&self, name: &str, value: &str) {
        self.insert(name, value.to_string());
    }
}
