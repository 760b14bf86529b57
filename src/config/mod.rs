//! Run configuration
//!
//! Command-line flags (and their environment fallbacks) are validated once
//! into an [`InstallConfig`], which is then passed by value to the install
//! operation. Nothing downstream reads flags or environment directly.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::domain::{InstallationKey, PackageId};
use crate::error::{DepInstallError, Result};
use crate::installer::InstallOptions;

/// Validated settings for one run
#[derive(Debug, Clone)]
pub struct InstallConfig {
    /// Target org username or alias
    pub target_org: String,
    /// Top-level packages, in the order given
    pub packages: Vec<PackageId>,
    pub installation_key: Option<InstallationKey>,
    pub install_options: InstallOptions,
    pub sfdx_bin: PathBuf,
    pub dry_run: bool,
}

impl InstallConfig {
    /// Validate parsed flags
    ///
    /// Fails before any external call when the target org or the package
    /// list is missing or empty.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let target_org = cli
            .target_org
            .as_deref()
            .map(str::trim)
            .filter(|org| !org.is_empty())
            .ok_or(DepInstallError::MissingTargetOrg)?
            .to_string();

        let packages = parse_packages(&cli.packages)?;

        Ok(Self {
            target_org,
            packages,
            installation_key: cli
                .installation_key
                .clone()
                .and_then(InstallationKey::new),
            install_options: InstallOptions {
                wait_minutes: cli.wait,
                publish_wait_minutes: cli.publish_wait,
                security_type: cli.security_type.into(),
            },
            sfdx_bin: cli.sfdx_bin.clone(),
            dry_run: cli.dry_run,
        })
    }
}

/// Parse the `-p` values; `""` alone means "not given"
fn parse_packages(raw: &[String]) -> Result<Vec<PackageId>> {
    if raw.iter().all(|p| p.trim().is_empty()) {
        return Err(DepInstallError::MissingPackages);
    }
    raw.iter().map(|p| PackageId::parse(p)).collect()
}
