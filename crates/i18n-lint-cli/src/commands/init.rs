//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# i18n-lint configuration

# Also check test files (default: false).
# Test fixtures are usually full of unmarked strings in the program's
# original natural language, so they are skipped unless requested.
include_test_files = false

# Fully qualified names, in `(package::path).name` form (or bare names for
# local items), whose call expressions act as i18n escape hatches: string
# literals nested inside them are not checked.
escape_hatches = [
    # "(crate::i18n).t",
    # "gettext",
]

# Unicode script names whose characters are disallowed in string literals.
scripts = ["Han"]

# Locale-dependent symbols flagged at every use site.
watched_symbols = [
    "(chrono).Local",
    "(chrono::offset).Local",
]

[analyzer]
# Glob patterns to exclude from analysis
exclude = [
    "**/target/**",
    "**/vendor/**",
]
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("i18n-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created i18n-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit i18n-lint.toml to register your escape hatches");
    println!("  2. Run: i18n-lint check");

    Ok(())
}

#[cfg(test)]
mod tests {
    use i18n_lint_core::Config;

    #[test]
    fn default_template_parses() {
        let config = Config::parse(super::DEFAULT_CONFIG).expect("template parses");
        assert!(!config.include_test_files);
        assert!(config.escape_hatches.is_empty());
        assert_eq!(config.scripts, vec!["Han".to_string()]);
    }
}
