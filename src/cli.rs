//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::domain::SecurityType;
use crate::installer::{DEFAULT_PUBLISH_WAIT_MINUTES, DEFAULT_WAIT_MINUTES};
use crate::runner::DEFAULT_SFDX_BIN;

/// depinstall - install Salesforce packages with their dependencies
///
/// Looks up the dependencies of every requested package version and installs
/// them, in order, before the package itself.
#[derive(Parser, Debug)]
#[command(
    name = "depinstall",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install Salesforce packages together with their dependencies",
    long_about = "depinstall queries the Tooling API for the dependencies of each top-level \
                  package version, installs those dependencies first and then the package \
                  itself. The run stops at the first failed install.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  depinstall -u me@example.com -p 04t000000000001              \x1b[90m# Install one package\x1b[0m\n   \
                  depinstall -u myorg -p 04t000000000001,04t000000000002       \x1b[90m# Install several, in order\x1b[0m\n   \
                  depinstall -u myorg -p 04t000000000001 -k s3cret             \x1b[90m# Key-protected package\x1b[0m\n   \
                  depinstall -u myorg -p 04t000000000001 --dry-run             \x1b[90m# Show the install order only\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Target org username or alias to install packages to
    #[arg(short = 'u', long = "target-org", value_name = "ORG", env = "DEPINSTALL_TARGET_ORG")]
    pub target_org: Option<String>,

    /// Id(s) of the top-level package version(s) to install, separated by commas
    #[arg(short = 'p', long = "packages", value_name = "IDS", value_delimiter = ',')]
    pub packages: Vec<String>,

    /// Installation key for key-protected packages
    #[arg(
        short = 'k',
        long = "installation-key",
        value_name = "KEY",
        env = "DEPINSTALL_INSTALLATION_KEY",
        hide_env_values = true
    )]
    pub installation_key: Option<String>,

    /// Which users get access to the installed packages
    #[arg(long, value_enum, default_value_t = SecurityTypeArg::AllUsers)]
    pub security_type: SecurityTypeArg,

    /// Minutes to wait for each install to complete
    #[arg(long, value_name = "MINUTES", default_value_t = DEFAULT_WAIT_MINUTES)]
    pub wait: u32,

    /// Minutes to wait for each package version to be published
    #[arg(long, value_name = "MINUTES", default_value_t = DEFAULT_PUBLISH_WAIT_MINUTES)]
    pub publish_wait: u32,

    /// Salesforce CLI executable
    #[arg(long, value_name = "PATH", env = "DEPINSTALL_SFDX_BIN", default_value = DEFAULT_SFDX_BIN)]
    pub sfdx_bin: PathBuf,

    /// Show what would be installed without actually installing
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// `--security-type` values
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityTypeArg {
    /// All users in the org get access
    AllUsers,
    /// Only administrators get access
    AdminsOnly,
}

impl From<SecurityTypeArg> for SecurityType {
    fn from(arg: SecurityTypeArg) -> Self {
        match arg {
            SecurityTypeArg::AllUsers => SecurityType::AllUsers,
            SecurityTypeArg::AdminsOnly => SecurityType::AdminsOnly,
        }
    }
}
