//! Display and output functions for install operation
//! Handles milestone messages between phases and dry-run plans

use console::Style;

use super::InstallPlan;

/// Print how many dependencies the lookup returned
pub fn print_dependencies_found(count: usize) {
    println!("Found {count} dependencies to install.");
}

/// Print the milestone between dependency and top-level installs
pub fn print_dependencies_installed() {
    println!("Dependencies installed. Preparing to install top-level package.");
}

/// Print completion of one top-level package
pub fn print_package_done() {
    println!(
        "{}",
        Style::new()
            .green()
            .bold()
            .apply_to("You're all set, have a lovely day!")
    );
}

/// Print the order a dry run would install in
pub fn print_install_plan(plan: &InstallPlan) {
    let total = plan.dependencies.len() + 1;
    println!(
        "[DRY RUN] Would install {} package(s) for {}:",
        total,
        Style::new().bold().apply_to(&plan.package)
    );
    for (i, package) in plan.order().enumerate() {
        if i + 1 == total {
            println!(
                "  {}. {} {}",
                i + 1,
                package,
                Style::new().dim().apply_to("(top-level)")
            );
        } else {
            println!("  {}. {}", i + 1, package);
        }
    }
}
