//! Command implementations for depinstall CLI

pub mod install;
