//! Package domain types
//!
//! Contains the identifiers and secrets passed to the Salesforce CLI.

use std::fmt;

use crate::error::{Result, config::invalid_package_id};

/// A subscriber package version id (usually `04t...`)
///
/// Opaque to depinstall: it is only ever forwarded as a command argument or
/// embedded in a query literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageId(String);

impl PackageId {
    /// Parse a single id, trimming surrounding whitespace
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(invalid_package_id(raw, "package ids must not be empty"));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(invalid_package_id(
                raw,
                "package ids must not contain whitespace",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Installation key shared by every query and install in a run
///
/// `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct InstallationKey(String);

impl InstallationKey {
    /// Wrap a key; empty input means "no key"
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() { None } else { Some(Self(raw)) }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for InstallationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("InstallationKey(****)")
    }
}

/// Which users get access to an installed package
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SecurityType {
    #[default]
    AllUsers,
    AdminsOnly,
}

impl SecurityType {
    /// Value expected by `sfdx force:package:install --securitytype`
    pub fn as_sfdx_value(self) -> &'static str {
        match self {
            SecurityType::AllUsers => "AllUsers",
            SecurityType::AdminsOnly => "AdminsOnly",
        }
    }
}
