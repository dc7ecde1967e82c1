//! # i18n-lint-rules
//!
//! Built-in detectors for i18n-lint.
//!
//! ## Available Detectors
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | IL001 | `script-literals` | Flags string literals containing disallowed-script characters |
//! | IL002 | `watched-symbols` | Flags every use of a locale-dependent symbol |
//!
//! `script-literals` honors the configured escape hatches: literals nested
//! anywhere inside a call to a registered hatch are exempt.
//! `watched-symbols` deliberately does not — a hatch blesses human-readable
//! text, not locale-dependent API usage.
//!
//! ## Usage
//!
//! ```ignore
//! use i18n_lint_core::{Analyzer, Config, Policy};
//! use i18n_lint_rules::default_detectors;
//!
//! let policy = Policy::from_config(&Config::default())?;
//! let mut builder = Analyzer::builder().root("./src");
//! for detector in default_detectors(&policy) {
//!     builder = builder.detector_box(detector);
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod script_literals;
mod watched_symbols;

pub use script_literals::ScriptLiterals;
pub use watched_symbols::WatchedSymbols;

/// Re-export core types for convenience.
pub use i18n_lint_core::{Detector, DetectorBox, Finding, Policy, Severity};

/// Returns both built-in detectors configured with `policy`.
#[must_use]
pub fn default_detectors(policy: &Policy) -> Vec<DetectorBox> {
    vec![
        Box::new(ScriptLiterals::new(policy.clone())),
        Box::new(WatchedSymbols::new(policy.clone())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use i18n_lint_core::Config;

    #[test]
    fn default_detectors_are_registered() {
        let policy = Policy::from_config(&Config::default()).expect("default policy");
        let detectors = default_detectors(&policy);
        let codes: Vec<&str> = detectors.iter().map(|d| d.code()).collect();
        assert_eq!(codes, vec!["IL001", "IL002"]);
    }
}
