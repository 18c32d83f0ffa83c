// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run metadata and the triggering event payload

use crate::env::Environment;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_SERVER_URL: &str = "https://github.com";
pub const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";

#[derive(Debug, Error)]
pub enum ContextError {
    #[error("failed to read event payload {}: {source}", path.display())]
    PayloadRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse event payload {}: {source}", path.display())]
    Payload {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("repository is unknown: set {variable} or run with a payload that names one")]
    MissingRepository { variable: String },
    #[error("event payload carries no issue or pull request number")]
    MissingIssueNumber,
}

/// Owner and name of a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repo {
    pub owner: String,
    pub repo: String,
}

/// An issue or pull request within a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub owner: String,
    pub repo: String,
    pub number: u64,
}

/// Everything the runner tells a step about the current run
#[derive(Debug, Clone, Serialize)]
pub struct Context {
    pub payload: serde_json::Value,
    pub event_name: String,
    pub sha: String,
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub workflow: String,
    pub action: String,
    pub actor: String,
    pub job: String,
    pub run_attempt: u64,
    pub run_number: u64,
    pub run_id: u64,
    pub api_url: String,
    pub server_url: String,
    pub graphql_url: String,
    #[serde(skip)]
    repository: Option<String>,
    #[serde(skip)]
    repository_variable: String,
}

impl Context {
    /// Read the context from `<prefix>_*` variables and the event payload
    /// file named by `<prefix>_EVENT_PATH`.
    ///
    /// A payload path that does not exist yields an empty payload.
    pub fn from_env(env: &impl Environment, prefix: &str) -> Result<Self, ContextError> {
        let var = |suffix: &str| env.var(&format!("{}_{}", prefix, suffix)).unwrap_or_default();
        let number = |suffix: &str| var(suffix).parse::<u64>().unwrap_or(0);
        let url = |suffix: &str, default: &str| {
            env.non_empty_var(&format!("{}_{}", prefix, suffix))
                .unwrap_or_else(|| default.to_string())
        };

        let payload = match env.non_empty_var(&format!("{}_EVENT_PATH", prefix)) {
            Some(path) => load_payload(PathBuf::from(path))?,
            None => empty_payload(),
        };

        Ok(Self {
            payload,
            event_name: var("EVENT_NAME"),
            sha: var("SHA"),
            git_ref: var("REF"),
            workflow: var("WORKFLOW"),
            action: var("ACTION"),
            actor: var("ACTOR"),
            job: var("JOB"),
            run_attempt: number("RUN_ATTEMPT"),
            run_number: number("RUN_NUMBER"),
            run_id: number("RUN_ID"),
            api_url: url("API_URL", DEFAULT_API_URL),
            server_url: url("SERVER_URL", DEFAULT_SERVER_URL),
            graphql_url: url("GRAPHQL_URL", DEFAULT_GRAPHQL_URL),
            repository: env.non_empty_var(&format!("{}_REPOSITORY", prefix)),
            repository_variable: format!("{}_REPOSITORY", prefix),
        })
    }

    /// Repository from `<prefix>_REPOSITORY`, falling back to the payload
    pub fn repo(&self) -> Result<Repo, ContextError> {
        if let Some((owner, repo)) = self.repository.as_deref().and_then(|r| r.split_once('/')) {
            return Ok(Repo {
                owner: owner.to_string(),
                repo: repo.to_string(),
            });
        }

        let owner = self.payload_str(&["repository", "owner", "login"]);
        let name = self.payload_str(&["repository", "name"]);
        match (owner, name) {
            (Some(owner), Some(repo)) => Ok(Repo {
                owner: owner.to_string(),
                repo: repo.to_string(),
            }),
            _ => Err(ContextError::MissingRepository {
                variable: self.repository_variable.clone(),
            }),
        }
    }

    /// Issue or pull request the event refers to
    pub fn issue(&self) -> Result<Issue, ContextError> {
        let repo = self.repo()?;
        let number = [
            &["issue", "number"][..],
            &["pull_request", "number"][..],
            &["number"][..],
        ]
        .iter()
        .find_map(|path| self.payload_at(path).and_then(serde_json::Value::as_u64))
        .ok_or(ContextError::MissingIssueNumber)?;

        Ok(Issue {
            owner: repo.owner,
            repo: repo.repo,
            number,
        })
    }

    fn payload_at(&self, path: &[&str]) -> Option<&serde_json::Value> {
        path.iter()
            .try_fold(&self.payload, |value, key| value.get(*key))
    }

    fn payload_str(&self, path: &[&str]) -> Option<&str> {
        self.payload_at(path).and_then(serde_json::Value::as_str)
    }
}

impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "event:    {}", self.event_name)?;
        writeln!(f, "ref:      {}", self.git_ref)?;
        writeln!(f, "sha:      {}", self.sha)?;
        writeln!(f, "workflow: {}", self.workflow)?;
        writeln!(f, "job:      {}", self.job)?;
        writeln!(f, "actor:    {}", self.actor)?;
        write!(
            f,
            "run:      {} (#{}, attempt {})",
            self.run_id, self.run_number, self.run_attempt
        )?;
        if let Ok(repo) = self.repo() {
            write!(f, "\nrepo:     {}/{}", repo.owner, repo.repo)?;
        }
        Ok(())
    }
}

fn empty_payload() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

fn load_payload(path: PathBuf) -> Result<serde_json::Value, ContextError> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "event payload path does not exist");
        return Ok(empty_payload());
    }
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(source) => return Err(ContextError::PayloadRead { path, source }),
    };
    serde_json::from_str(&content).map_err(|source| ContextError::Payload { path, source })
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
