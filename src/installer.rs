//! Package installation through `sfdx force:package:install`
//!
//! The CLI's own output is streamed to the console so the user sees install
//! progress live. A non-zero exit aborts the run; nothing is rolled back.

use console::Style;

use crate::domain::{InstallationKey, PackageId, SecurityType};
use crate::error::{Result, install};
use crate::runner::{CommandRunner, redacted};

/// Minutes `force:package:install` waits for the install to finish
pub const DEFAULT_WAIT_MINUTES: u32 = 15;

/// Minutes `force:package:install` waits for the version to be published
pub const DEFAULT_PUBLISH_WAIT_MINUTES: u32 = 10;

/// Per-install settings shared by every package in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallOptions {
    pub wait_minutes: u32,
    pub publish_wait_minutes: u32,
    pub security_type: SecurityType,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            wait_minutes: DEFAULT_WAIT_MINUTES,
            publish_wait_minutes: DEFAULT_PUBLISH_WAIT_MINUTES,
            security_type: SecurityType::AllUsers,
        }
    }
}

/// Arguments for installing one package
pub fn install_args(
    target_org: &str,
    package: &PackageId,
    key: Option<&InstallationKey>,
    options: &InstallOptions,
) -> Vec<String> {
    let mut args = vec![
        "force:package:install".to_string(),
        "--package".to_string(),
        package.to_string(),
        "-u".to_string(),
        target_org.to_string(),
        "-w".to_string(),
        options.wait_minutes.to_string(),
        "--publishwait".to_string(),
        options.publish_wait_minutes.to_string(),
        "--securitytype".to_string(),
        options.security_type.as_sfdx_value().to_string(),
    ];

    if let Some(key) = key {
        args.push("--installationkey".to_string());
        args.push(key.expose().to_string());
    }

    args
}

/// Install `package` into `target_org`
pub fn install_package<R: CommandRunner + ?Sized>(
    runner: &R,
    target_org: &str,
    package: &PackageId,
    key: Option<&InstallationKey>,
    options: &InstallOptions,
) -> Result<()> {
    println!(
        "Starting install for {}.",
        Style::new().bold().apply_to(package)
    );

    let args = install_args(target_org, package, key, options);
    log::debug!(
        "installing: sfdx {}",
        redacted(&args, key.map(InstallationKey::expose))
    );

    let outcome = runner.stream(&args)?;
    if !outcome.success {
        log::debug!("install of {package} failed with {}", outcome.status_description());
        return Err(install::failed(
            package.as_str(),
            outcome.status_description(),
        ));
    }

    Ok(())
}
