//! Package install errors

use super::impl_error_constructors;

impl_error_constructors! {
    InstallFailed as failed(package, status),
}
