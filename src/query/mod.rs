//! Dependency lookup through the Tooling API
//!
//! Dependencies of a subscriber package version are read with
//! `sfdx force:data:soql:query -t --json`. Only the first level is returned;
//! depinstall does not recurse into dependencies of dependencies.

pub mod response;

pub use response::parse_dependency_response;

use crate::domain::{InstallationKey, PackageId};
use crate::error::Result;
use crate::progress::Spinner;
use crate::runner::{CommandRunner, redacted};

/// Escape a value for use inside a single-quoted SOQL literal
fn escape_soql(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '\'') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// SOQL selecting the `Dependencies` field of one package version
pub fn dependency_soql(package: &PackageId, key: Option<&InstallationKey>) -> String {
    let mut soql = format!(
        "SELECT Dependencies FROM SubscriberPackageVersion WHERE Id = '{}'",
        escape_soql(package.as_str())
    );
    if let Some(key) = key {
        soql.push_str(&format!(
            " AND InstallationKey = '{}'",
            escape_soql(key.expose())
        ));
    }
    soql
}

/// Arguments for the dependency query
pub fn query_args(
    target_org: &str,
    package: &PackageId,
    key: Option<&InstallationKey>,
) -> Vec<String> {
    vec![
        "force:data:soql:query".to_string(),
        "-u".to_string(),
        target_org.to_string(),
        "-t".to_string(),
        "-q".to_string(),
        dependency_soql(package, key),
        "--json".to_string(),
    ]
}

/// Query arguments rendered for logging, with the key replaced before escaping
fn query_args_for_log(
    target_org: &str,
    package: &PackageId,
    key: Option<&InstallationKey>,
) -> String {
    let masked = key.and_then(|_| InstallationKey::new("****"));
    redacted(&query_args(target_org, package, masked.as_ref()), None)
}

/// Look up the direct dependencies of `package`
///
/// Returns an empty list when the package has none. Fails when the CLI
/// reports an error or returns something that is not a query result.
pub fn query_dependencies<R: CommandRunner + ?Sized>(
    runner: &R,
    target_org: &str,
    package: &PackageId,
    key: Option<&InstallationKey>,
) -> Result<Vec<PackageId>> {
    let args = query_args(target_org, package, key);
    log::debug!(
        "querying dependencies: sfdx {}",
        query_args_for_log(target_org, package, key)
    );

    let spinner = Spinner::start(" Retrieving dependencies...");
    let outcome = runner.capture(&args)?;
    spinner.finish();

    log::debug!(
        "dependency query for {package} finished with {}",
        outcome.status_description()
    );

    let dependencies = parse_dependency_response(package, &outcome)?;
    log::debug!("{package} depends on {dependencies:?}");
    Ok(dependencies)
}
