//! Operations module
//!
//! Provides the high-level install operation, which coordinates:
//! - Query: dependency lookup (from query module)
//! - Installer: per-package installs (from installer module)
//! - UI: milestone messages and dry-run plans (from `install::display`)

pub mod install;

pub use install::InstallOperation;
