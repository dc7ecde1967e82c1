//! Core types for findings and scan results.

use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail the run.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Source code location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path relative to the analyzed root.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset in file (for miette integration).
    pub offset: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Location {
    /// Creates a new location from span information.
    #[must_use]
    pub fn from_span(file: PathBuf, span: proc_macro2::Span) -> Self {
        let start = span.start();
        Self {
            file,
            line: start.line,
            column: start.column + 1,
            offset: 0,
            length: 0,
        }
    }

    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self {
            file,
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Sets the byte offset and length for this location.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

/// A reported i18n hazard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Detector code (e.g., "IL001").
    pub code: String,
    /// Detector name (e.g., "script-literals").
    pub detector: String,
    /// Severity of this finding.
    pub severity: Severity,
    /// Location of the finding.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
}

impl Finding {
    /// Creates a new finding.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        detector: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            detector: detector.into(),
            severity,
            location,
            message: message.into(),
        }
    }

    /// Formats the finding for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!(
            "{} {} at {}:{}:{}\n",
            self.code,
            self.detector,
            self.location.file.display(),
            self.location.line,
            self.location.column,
        );
        let _ = writeln!(output, "  {}: {}", self.severity, self.message);
        output
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {}",
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.message
        )
    }
}

/// Converts a [`Finding`] to a miette Diagnostic for rich error display.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct FindingDiagnostic {
    message: String,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl From<&Finding> for FindingDiagnostic {
    fn from(finding: &Finding) -> Self {
        Self {
            message: format!("[{}] {}", finding.code, finding.message),
            span: SourceSpan::from((finding.location.offset, finding.location.length)),
            label_message: finding.detector.clone(),
        }
    }
}

/// Result of running an analysis pass.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All findings, ordered by (file, line, column).
    pub findings: Vec<Finding>,
    /// Number of files checked.
    pub files_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no findings were produced.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Adds findings from another result.
    pub fn extend(&mut self, other: Self) {
        self.findings.extend(other.findings);
        self.files_checked += other.files_checked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_finding() -> Finding {
        Finding::new(
            "IL001",
            "script-literals",
            Severity::Error,
            Location::new(PathBuf::from("src/lib.rs"), 42, 10),
            "string literal contains Han script char(s): \"你好\"",
        )
    }

    #[test]
    fn display_is_one_reportable_line() {
        let finding = make_finding();
        assert_eq!(
            format!("{finding}"),
            "src/lib.rs:42:10: string literal contains Han script char(s): \"你好\""
        );
    }

    #[test]
    fn format_includes_code_and_severity() {
        let formatted = make_finding().format();
        assert!(formatted.contains("IL001 script-literals at src/lib.rs:42:10"));
        assert!(formatted.contains("error: string literal contains"));
    }

    #[test]
    fn location_with_span_sets_bytes() {
        let location = Location::new(PathBuf::from("a.rs"), 1, 1).with_span(7, 12);
        assert_eq!(location.offset, 7);
        assert_eq!(location.length, 12);
    }

    #[test]
    fn diagnostic_carries_detector_label() {
        let finding = make_finding();
        let diag = FindingDiagnostic::from(&finding);
        assert!(format!("{diag}").contains("IL001"));
    }

    #[test]
    fn lint_result_extend_merges_counts() {
        let mut a = LintResult::new();
        a.files_checked = 2;
        a.findings.push(make_finding());
        let mut b = LintResult::new();
        b.files_checked = 3;
        b.findings.push(make_finding());
        a.extend(b);
        assert_eq!(a.files_checked, 5);
        assert_eq!(a.findings.len(), 2);
        assert!(!a.is_clean());
    }
}
