//! Install command implementation
//!
//! The installation process:
//! 1. Validate flags into an `InstallConfig`
//! 2. For each top-level package, query its dependencies
//! 3. Install dependencies, then the package itself
//! 4. Stop at the first failure, leaving earlier installs in place

use crate::cli::Cli;
use crate::config::InstallConfig;
use crate::error::Result;
use crate::operations::InstallOperation;
use crate::runner::SfdxRunner;

/// Run install command
pub fn run(cli: &Cli) -> Result<()> {
    let config = InstallConfig::from_cli(cli)?;
    let runner = SfdxRunner::new(config.sfdx_bin.clone());
    log::debug!(
        "installing {} top-level package(s) into {} using {}",
        config.packages.len(),
        config.target_org,
        runner.program().display()
    );

    let summary = InstallOperation::new(config, &runner).run()?;

    log::info!(
        "processed {} top-level package(s), {} install(s)",
        summary.plans.len(),
        summary.installed.len()
    );
    Ok(())
}
