//! Main orchestrator for install operation
//!
//! For every top-level package, in the order given:
//! 1. Query its direct dependencies
//! 2. Install each dependency in the returned order
//! 3. Install the package itself
//!
//! The first failure aborts the whole run. Dependencies shared by several
//! top-level packages are installed once per package that needs them.

use super::display;
use crate::config::InstallConfig;
use crate::domain::PackageId;
use crate::error::Result;
use crate::installer::install_package;
use crate::query::query_dependencies;
use crate::runner::CommandRunner;

/// Install order for one top-level package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    pub package: PackageId,
    pub dependencies: Vec<PackageId>,
}

impl InstallPlan {
    /// Dependencies first, then the package
    pub fn order(&self) -> impl Iterator<Item = &PackageId> {
        self.dependencies
            .iter()
            .chain(std::iter::once(&self.package))
    }
}

/// What a run did
#[derive(Debug, Clone, Default)]
pub struct InstallSummary {
    /// One plan per top-level package that was processed
    pub plans: Vec<InstallPlan>,
    /// Packages actually installed, in install order (empty for dry runs)
    pub installed: Vec<PackageId>,
}

/// Main orchestrator for install operation
pub struct InstallOperation<'a, R: CommandRunner + ?Sized> {
    config: InstallConfig,
    runner: &'a R,
}

impl<'a, R: CommandRunner + ?Sized> InstallOperation<'a, R> {
    pub fn new(config: InstallConfig, runner: &'a R) -> Self {
        Self { config, runner }
    }

    /// Process every top-level package in order, stopping at the first error
    pub fn run(&self) -> Result<InstallSummary> {
        let mut summary = InstallSummary::default();
        for package in &self.config.packages {
            self.process_package(package, &mut summary)?;
        }
        Ok(summary)
    }

    fn process_package(&self, package: &PackageId, summary: &mut InstallSummary) -> Result<()> {
        log::debug!("{package}: resolving dependencies");
        let dependencies = query_dependencies(
            self.runner,
            &self.config.target_org,
            package,
            self.config.installation_key.as_ref(),
        )?;
        display::print_dependencies_found(dependencies.len());

        let plan = InstallPlan {
            package: package.clone(),
            dependencies,
        };

        if self.config.dry_run {
            display::print_install_plan(&plan);
            summary.plans.push(plan);
            return Ok(());
        }

        log::debug!("{package}: installing {} dependencies", plan.dependencies.len());
        for dependency in &plan.dependencies {
            self.install(dependency)?;
            summary.installed.push(dependency.clone());
        }
        display::print_dependencies_installed();

        log::debug!("{package}: installing top-level package");
        self.install(package)?;
        summary.installed.push(package.clone());
        display::print_package_done();

        summary.plans.push(plan);
        Ok(())
    }

    fn install(&self, package: &PackageId) -> Result<()> {
        install_package(
            self.runner,
            &self.config.target_org,
            package,
            self.config.installation_key.as_ref(),
            &self.config.install_options,
        )
    }
}
