//! Configuration errors

use super::DepInstallError;

/// Creates an invalid package id error
pub fn invalid_package_id(value: impl Into<String>, reason: impl Into<String>) -> DepInstallError {
    DepInstallError::InvalidPackageId {
        value: value.into(),
        reason: reason.into(),
    }
}
