//! Error types and handling for depinstall
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Missing or invalid command-line options
//! - [`command`]: Failures starting the Salesforce CLI
//! - [`query`]: Dependency lookup failures
//! - [`install`]: Package install failures

mod macros;

pub mod command;
pub mod config;
pub mod install;
pub mod query;

pub(crate) use macros::impl_error_constructors;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for depinstall operations
#[derive(Error, Diagnostic, Debug)]
pub enum DepInstallError {
    // Configuration errors
    #[error("Target org username must be specified with the -u command-line flag.")]
    #[diagnostic(
        code(depinstall::config::missing_target_org),
        help("Pass -u <username or alias> or set DEPINSTALL_TARGET_ORG")
    )]
    MissingTargetOrg,

    #[error(
        "Top-level package(s) must be specified with the -p command-line flag, separated by commas."
    )]
    #[diagnostic(
        code(depinstall::config::missing_packages),
        help("Example: -p 04t000000000001,04t000000000002")
    )]
    MissingPackages,

    #[error("Invalid package id '{value}': {reason}")]
    #[diagnostic(code(depinstall::config::invalid_package_id))]
    InvalidPackageId { value: String, reason: String },

    // Command errors
    #[error("Failed to run '{program}': {reason}")]
    #[diagnostic(
        code(depinstall::command::spawn_failed),
        help("Check that the Salesforce CLI is installed and on PATH, or pass --sfdx-bin")
    )]
    CommandSpawnFailed { program: String, reason: String },

    // Query errors
    #[error("Dependency query for {package} failed: {message}")]
    #[diagnostic(
        code(depinstall::query::failed),
        help("Check that the org is authorized and the package id is correct")
    )]
    QueryFailed { package: String, message: String },

    #[error("Malformed dependency query response for {package}: {reason}")]
    #[diagnostic(code(depinstall::query::malformed_response))]
    MalformedQueryResponse { package: String, reason: String },

    // Install errors
    #[error("Package install failed for {package} with {status}.")]
    #[diagnostic(
        code(depinstall::install::failed),
        help("Packages installed before the failure are left in place; re-run to continue")
    )]
    InstallFailed { package: String, status: String },
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DepInstallError>;
