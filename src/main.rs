//! depinstall - Salesforce package installer
//!
//! Installs one or more package versions into an org, installing each
//! package's dependencies first. Dependency information comes from the
//! Tooling API and installs go through the Salesforce CLI.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod installer;
mod operations;
mod progress;
mod query;
mod runner;
#[cfg(test)]
mod test_fixtures;

use cli::Cli;

/// Initialize logging; `RUST_LOG` overrides the level picked from `--verbose`
fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = commands::install::run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
