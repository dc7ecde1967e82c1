//! Check command implementation.

use anyhow::{Context, Result};
use i18n_lint_core::{Analyzer, Config, Policy};
use i18n_lint_rules::default_detectors;
use std::path::Path;

use crate::OutputFormat;

/// Config file names to search for, in priority order.
const CONFIG_CANDIDATES: &[&str] = &["i18n-lint.toml", ".i18n-lint.toml"];

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    include_test_files: bool,
    escape_hatches: Option<String>,
    exclude: Vec<String>,
    config_path: Option<&Path>,
) -> Result<()> {
    let mut config = load_config(path, config_path)?;

    // CLI flags override / extend the config file
    if include_test_files {
        config.include_test_files = true;
    }
    if let Some(list) = escape_hatches {
        config
            .escape_hatches
            .extend(list.split(',').map(|s| s.trim().to_string()));
    }

    let policy = Policy::from_config(&config).context("Invalid configuration")?;

    // An explicit path argument wins over the config file's analyzer root
    let root = if path == Path::new(".") {
        config.analyzer.root.clone()
    } else {
        path.to_path_buf()
    };

    let mut builder = Analyzer::builder().root(&root);
    for pattern in config.analyzer.exclude.iter().cloned().chain(exclude) {
        builder = builder.exclude(pattern);
    }
    for detector in default_detectors(&policy) {
        builder = builder.detector_box(detector);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!(
        "Analyzing {:?} with {} detectors",
        root,
        analyzer.detector_count()
    );

    let result = analyzer.analyze().context("Analysis failed")?;

    super::output::print(&result, format, &root)?;

    // Any finding fails the run
    if !result.is_clean() {
        std::process::exit(1);
    }

    Ok(())
}

/// Loads the configuration: an explicit `--config` path, or the first
/// candidate found under the analyzed path, or the defaults.
fn load_config(path: &Path, explicit: Option<&Path>) -> Result<Config> {
    if let Some(config_path) = explicit {
        return Config::from_file(config_path)
            .with_context(|| format!("Failed to load config: {}", config_path.display()));
    }

    for candidate in CONFIG_CANDIDATES {
        let candidate_path = path.join(candidate);
        if candidate_path.exists() {
            tracing::debug!("Using config: {}", candidate_path.display());
            return Config::from_file(&candidate_path)
                .with_context(|| format!("Failed to load config: {}", candidate_path.display()));
        }
    }

    Ok(Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = load_config(dir.path(), None).expect("load");
        assert!(!config.include_test_files);
        assert_eq!(config.scripts, vec!["Han".to_string()]);
    }

    #[test]
    fn load_config_discovers_candidate_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join("i18n-lint.toml"),
            "include_test_files = true\n",
        )
        .expect("write config");

        let config = load_config(dir.path(), None).expect("load");
        assert!(config.include_test_files);
    }
}
