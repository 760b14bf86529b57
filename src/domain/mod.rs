//! Domain models for depinstall
//!
//! This module contains pure domain objects representing the packages being installed.
//! These types are free of external dependencies and enforce their own invariants.

pub mod package;

pub use package::{InstallationKey, PackageId, SecurityType};
