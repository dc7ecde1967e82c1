//! Configuration surface and the compiled per-run policy.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

use crate::name::{NameError, QualifiedName};
use crate::script::{Script, ScriptError};

/// Top-level configuration for i18n-lint, as read from `i18n-lint.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Also check test files (default: false).
    ///
    /// By default test files are skipped: i18n-aware apps usually have many
    /// unmarked strings in test fixtures, and the names and descriptions of
    /// test cases tend to be in the program's original natural language.
    #[serde(default)]
    pub include_test_files: bool,

    /// Fully qualified names, in `(package::path).name` form (or bare names
    /// for local items), whose call expressions act as i18n escape hatches:
    /// string literals nested inside them are not checked.
    #[serde(default)]
    pub escape_hatches: Vec<String>,

    /// Unicode script names whose characters are disallowed in string
    /// literals (default: `["Han"]`).
    #[serde(default = "default_scripts")]
    pub scripts: Vec<String>,

    /// Locale-dependent symbols flagged at every use site
    /// (default: `chrono::Local` under both of its public paths).
    #[serde(default = "default_watched_symbols")]
    pub watched_symbols: Vec<String>,

    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include_test_files: false,
            escape_hatches: Vec::new(),
            scripts: default_scripts(),
            watched_symbols: default_watched_symbols(),
            analyzer: AnalyzerConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Root directory to analyze (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude from analysis.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: vec!["**/target/**".to_string(), "**/vendor/**".to_string()],
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_scripts() -> Vec<String> {
    vec!["Han".to_string()]
}

fn default_watched_symbols() -> Vec<String> {
    vec![
        "(chrono).Local".to_string(),
        "(chrono::offset).Local".to_string(),
    ]
}

/// Immutable per-run policy, compiled from a [`Config`].
///
/// Built once before traversal starts and shared read-only by every
/// detector; a second policy can coexist in the same process without
/// interference.
#[derive(Debug, Clone)]
pub struct Policy {
    /// Also check test files.
    pub include_test_files: bool,
    /// Registered escape hatches.
    pub escape_hatches: HashSet<QualifiedName>,
    /// Compiled script matchers.
    pub scripts: Vec<Script>,
    /// Symbols flagged at every use site.
    pub watched_symbols: Vec<QualifiedName>,
}

impl Policy {
    /// Compiles a configuration into the per-run policy.
    ///
    /// Fails fast: a malformed qualified name or an unknown script name
    /// aborts the run before any traversal starts, since a silently dropped
    /// exemption would mis-suppress findings. Blank list entries (such as
    /// those produced by trailing commas on the command line) are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed qualified names or unknown scripts.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let escape_hatches = parse_names(&config.escape_hatches)?
            .into_iter()
            .collect::<HashSet<_>>();
        let watched_symbols = parse_names(&config.watched_symbols)?;
        let scripts = config
            .scripts
            .iter()
            .map(|name| Script::new(name))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            include_test_files: config.include_test_files,
            escape_hatches,
            scripts,
            watched_symbols,
        })
    }

    /// Returns true iff `name` is a registered escape hatch.
    #[must_use]
    pub fn is_escape_hatch(&self, name: &QualifiedName) -> bool {
        self.escape_hatches.contains(name)
    }

    /// Returns true iff `name` is a watched symbol.
    #[must_use]
    pub fn is_watched(&self, name: &QualifiedName) -> bool {
        self.watched_symbols.contains(name)
    }
}

fn parse_names(entries: &[String]) -> Result<Vec<QualifiedName>, ConfigError> {
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let name = entry.parse().map_err(|source| ConfigError::Name {
            entry: entry.to_string(),
            source,
        })?;
        names.push(name);
    }
    Ok(names)
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// A qualified-name entry could not be parsed.
    #[error("invalid qualified name {entry:?}: {source}")]
    Name {
        /// The rejected entry.
        entry: String,
        /// Underlying parse error.
        source: NameError,
    },

    /// A script matcher could not be built.
    #[error(transparent)]
    Script(#[from] ScriptError),
}
