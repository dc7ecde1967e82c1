//! Shared output formatting for lint results.

use anyhow::Result;
use i18n_lint_core::{FindingDiagnostic, LintResult, Severity};
use std::path::Path;

use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat, root: &Path) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
        OutputFormat::Pretty => print_pretty(result, root),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    for finding in &result.findings {
        let severity_indicator = match finding.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
            Severity::Info => "\x1b[34minfo\x1b[0m",
        };

        println!(
            "{} {} at {}:{}:{}",
            finding.code,
            finding.detector,
            finding.location.file.display(),
            finding.location.line,
            finding.location.column,
        );
        println!("  {}: {}", severity_indicator, finding.message);
        println!();
    }

    let summary_color = if result.is_clean() {
        "\x1b[32m"
    } else {
        "\x1b[31m"
    };

    println!(
        "{}Found {} finding(s) in {} file(s)\x1b[0m",
        summary_color,
        result.findings.len(),
        result.files_checked
    );
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for finding in &result.findings {
        println!("{finding}");
    }
}

fn print_pretty(result: &LintResult, root: &Path) {
    for finding in &result.findings {
        let source_path = root.join(&finding.location.file);
        match std::fs::read_to_string(&source_path) {
            Ok(content) => {
                let diag = FindingDiagnostic::from(finding);
                let report = miette::Report::new(diag).with_source_code(miette::NamedSource::new(
                    finding.location.file.display().to_string(),
                    content,
                ));
                eprintln!("{report:?}");
            }
            // source no longer readable, fall back to the compact line
            Err(_) => println!("{finding}"),
        }
    }
}
