//! Install operation submodules

pub mod display;
pub mod orchestrator;

pub use orchestrator::{InstallOperation, InstallPlan};
