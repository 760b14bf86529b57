//! Test fixtures for driving depinstall without a real Salesforce CLI.
//!
//! [`RecordingRunner`] implements [`CommandRunner`] and records every call as a
//! short `query:<id>` / `install:<id>` string so tests can assert the exact
//! call sequence.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{RecordingRunner, dependencies_payload};
//!
//! let runner = RecordingRunner::new()
//!     .with_query("04t000000000001", dependencies_payload(&["04t000000000002"]))
//!     .with_failing_install("04t000000000002");
//! ```

#![allow(clippy::expect_used)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use serde_json::json;

use crate::error::{Result, command};
use crate::runner::{CommandOutcome, CommandRunner};

/// Build a successful query payload with one record listing `ids`
#[must_use]
pub fn dependencies_payload(ids: &[&str]) -> String {
    let ids: Vec<_> = ids
        .iter()
        .map(|id| json!({ "subscriberPackageVersionId": id }))
        .collect();
    json!({
        "status": 0,
        "result": {
            "size": 1,
            "totalSize": 1,
            "done": true,
            "records": [{
                "attributes": { "type": "SubscriberPackageVersion" },
                "Dependencies": { "ids": ids }
            }]
        }
    })
    .to_string()
}

/// Build a successful query payload for a package without dependencies
#[must_use]
pub fn no_dependencies_payload() -> String {
    json!({
        "status": 0,
        "result": {
            "size": 1,
            "totalSize": 1,
            "done": true,
            "records": [{
                "attributes": { "type": "SubscriberPackageVersion" },
                "Dependencies": null
            }]
        }
    })
    .to_string()
}

/// Build the error payload sfdx prints with `--json` when a query fails
#[must_use]
pub fn error_payload(message: &str) -> String {
    json!({
        "status": 1,
        "name": "INVALID_TYPE",
        "message": message,
        "exitCode": 1
    })
    .to_string()
}

/// Fake [`CommandRunner`] with canned query responses and install failures
#[derive(Default)]
pub struct RecordingRunner {
    queries: HashMap<String, (String, bool)>,
    failing_installs: HashSet<String>,
    spawn_failure: bool,
    calls: RefCell<Vec<String>>,
    args: RefCell<Vec<Vec<String>>>,
}

impl RecordingRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer the dependency query for `id` with `payload` and exit code 0
    #[must_use]
    pub fn with_query(mut self, id: &str, payload: String) -> Self {
        self.queries.insert(id.to_string(), (payload, true));
        self
    }

    /// Answer the dependency query for `id` with `payload` and exit code 1
    #[must_use]
    pub fn with_failing_query(mut self, id: &str, payload: String) -> Self {
        self.queries.insert(id.to_string(), (payload, false));
        self
    }

    /// Make `force:package:install` for `id` exit with code 1
    #[must_use]
    pub fn with_failing_install(mut self, id: &str) -> Self {
        self.failing_installs.insert(id.to_string());
        self
    }

    /// Make every call fail as if the CLI could not be started
    #[must_use]
    pub fn with_spawn_failure(mut self) -> Self {
        self.spawn_failure = true;
        self
    }

    /// Recorded calls in order, as `query:<id>` or `install:<id>`
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Raw argument lists in call order
    pub fn recorded_args(&self) -> Vec<Vec<String>> {
        self.args.borrow().clone()
    }

    fn queried_id(&self, args: &[String]) -> Option<String> {
        let query = args.iter().find(|a| a.starts_with("SELECT "))?;
        let start = query.find("Id = '")? + "Id = '".len();
        let end = query[start..].find('\'')? + start;
        Some(query[start..end].to_string())
    }

    fn installed_id(args: &[String]) -> Option<String> {
        args.iter()
            .position(|a| a == "--package")
            .and_then(|i| args.get(i + 1))
            .cloned()
    }
}

impl CommandRunner for RecordingRunner {
    fn capture(&self, args: &[String]) -> Result<CommandOutcome> {
        self.args.borrow_mut().push(args.to_vec());
        let id = self.queried_id(args).unwrap_or_default();
        self.calls.borrow_mut().push(format!("query:{id}"));
        if self.spawn_failure {
            return Err(command::spawn_failed("sfdx", "No such file or directory"));
        }

        let (stdout, success) = self
            .queries
            .get(&id)
            .cloned()
            .unwrap_or_else(|| (no_dependencies_payload(), true));

        Ok(CommandOutcome {
            stdout,
            stderr: String::new(),
            success,
            code: Some(i32::from(!success)),
        })
    }

    fn stream(&self, args: &[String]) -> Result<CommandOutcome> {
        self.args.borrow_mut().push(args.to_vec());
        let id = Self::installed_id(args).unwrap_or_default();
        self.calls.borrow_mut().push(format!("install:{id}"));
        if self.spawn_failure {
            return Err(command::spawn_failed("sfdx", "No such file or directory"));
        }

        let success = !self.failing_installs.contains(&id);
        Ok(CommandOutcome {
            success,
            code: Some(i32::from(!success)),
            ..CommandOutcome::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_recording_runner_matches_queries_by_id() {
        let runner =
            RecordingRunner::new().with_query("04tA", dependencies_payload(&["04tB"]));
        let outcome = runner
            .capture(&strings(&[
                "force:data:soql:query",
                "-q",
                "SELECT Dependencies FROM SubscriberPackageVersion WHERE Id = '04tA'",
            ]))
            .expect("capture");
        assert!(outcome.success);
        assert!(outcome.stdout.contains("04tB"));
        assert_eq!(runner.calls(), vec!["query:04tA"]);
    }

    #[test]
    fn test_recording_runner_fails_configured_installs() {
        let runner = RecordingRunner::new().with_failing_install("04tB");
        let ok = runner
            .stream(&strings(&["force:package:install", "--package", "04tA"]))
            .expect("stream");
        let failed = runner
            .stream(&strings(&["force:package:install", "--package", "04tB"]))
            .expect("stream");
        assert!(ok.success);
        assert!(!failed.success);
        assert_eq!(runner.calls(), vec!["install:04tA", "install:04tB"]);
    }
}
