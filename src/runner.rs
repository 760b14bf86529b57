//! Salesforce CLI invocation
//!
//! [`CommandRunner`] is the only seam between depinstall and the outside
//! world. Production code uses [`SfdxRunner`]; tests swap in a recording fake.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use crate::error::{Result, command::spawn_failed};

/// Default executable name for the Salesforce CLI
pub const DEFAULT_SFDX_BIN: &str = "sfdx";

/// Result of one external invocation
#[derive(Debug, Clone, Default)]
pub struct CommandOutcome {
    /// Captured stdout (empty when streamed)
    pub stdout: String,
    /// Captured stderr (empty when streamed)
    pub stderr: String,
    pub success: bool,
    /// Exit code, `None` when killed by a signal
    pub code: Option<i32>,
}

impl CommandOutcome {
    fn from_status(status: ExitStatus, stdout: String, stderr: String) -> Self {
        Self {
            stdout,
            stderr,
            success: status.success(),
            code: status.code(),
        }
    }

    /// Human-readable exit description, e.g. `exit status: 1`
    pub fn status_description(&self) -> String {
        match self.code {
            Some(code) => format!("exit status: {code}"),
            None => "termination by signal".to_string(),
        }
    }

    /// Stdout followed by stderr
    pub fn combined(&self) -> String {
        let mut out = self.stdout.clone();
        if !self.stderr.is_empty() {
            if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(&self.stderr);
        }
        out
    }
}

/// Runs Salesforce CLI subcommands
pub trait CommandRunner {
    /// Run and capture output. A non-zero exit is reported in the outcome,
    /// not as an error; only failing to start the process is an error.
    fn capture(&self, args: &[String]) -> Result<CommandOutcome>;

    /// Run with stdout/stderr passed straight through to the console.
    fn stream(&self, args: &[String]) -> Result<CommandOutcome>;
}

/// Real runner backed by `std::process::Command`
#[derive(Debug, Clone)]
pub struct SfdxRunner {
    program: PathBuf,
}

impl SfdxRunner {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn command(&self, args: &[String]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        cmd
    }

    fn spawn_error(&self, err: &std::io::Error) -> crate::error::DepInstallError {
        spawn_failed(self.program.display().to_string(), err.to_string())
    }
}

impl Default for SfdxRunner {
    fn default() -> Self {
        Self::new(DEFAULT_SFDX_BIN)
    }
}

impl CommandRunner for SfdxRunner {
    fn capture(&self, args: &[String]) -> Result<CommandOutcome> {
        let output = self
            .command(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.spawn_error(&e))?;

        Ok(CommandOutcome::from_status(
            output.status,
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ))
    }

    fn stream(&self, args: &[String]) -> Result<CommandOutcome> {
        let status = self
            .command(args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| self.spawn_error(&e))?;

        Ok(CommandOutcome::from_status(
            status,
            String::new(),
            String::new(),
        ))
    }
}

/// Render arguments for logging with every occurrence of `secret` masked
pub fn redacted(args: &[String], secret: Option<&str>) -> String {
    let joined = args
        .iter()
        .map(|arg| {
            if arg.contains(' ') {
                format!("\"{arg}\"")
            } else {
                arg.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    match secret {
        Some(secret) if !secret.is_empty() => joined.replace(secret, "****"),
        _ => joined,
    }
}
