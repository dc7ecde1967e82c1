//! List rules command implementation.

use anyhow::Result;
use i18n_lint_core::{Config, Policy};
use i18n_lint_rules::default_detectors;

/// Runs the list-rules command.
pub fn run() -> Result<()> {
    let policy = Policy::from_config(&Config::default())?;

    println!("Available detectors:\n");
    println!("{:<8} {:<20} Description", "Code", "Name");
    println!("{}", "-".repeat(72));

    for detector in default_detectors(&policy) {
        println!(
            "{:<8} {:<20} {}",
            detector.code(),
            detector.name(),
            detector.description()
        );
    }

    println!("\nUse `i18n-lint check --escape-hatches` to exempt i18n-aware calls, e.g.:");
    println!("  i18n-lint check --escape-hatches '(crate::i18n).t,gettext'");

    Ok(())
}
