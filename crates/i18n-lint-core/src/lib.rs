//! # i18n-lint-core
//!
//! Core framework for internationalization linting based on `syn` AST
//! analysis.
//!
//! This crate provides the foundational traits and types for flagging i18n
//! hazards in Rust source trees. It includes:
//!
//! - [`Detector`] trait for per-file AST-based checks
//! - [`Policy`] holding the immutable per-run configuration (escape hatches,
//!   script matchers, watched symbols)
//! - [`SymbolResolver`] for mapping paths to qualified names
//! - [`Analyzer`] for orchestrating detector execution over a source tree
//! - [`Finding`] for representing reported hazards
//!
//! ## Example
//!
//! ```ignore
//! use i18n_lint_core::{Analyzer, Config, Policy};
//!
//! let policy = Policy::from_config(&Config::default())?;
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .detector(MyDetector::new(policy))
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod attrs;
mod config;
mod context;
mod detector;
mod name;
mod resolve;
mod script;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use attrs::{has_cfg_test, has_test_attr};
pub use config::{AnalyzerConfig, Config, ConfigError, Policy};
pub use context::FileContext;
pub use detector::{Detector, DetectorBox};
pub use name::{NameError, QualifiedName};
pub use resolve::{ImportResolver, SymbolResolver};
pub use script::{Script, ScriptError};
pub use types::{Finding, FindingDiagnostic, LintResult, Location, Severity};
