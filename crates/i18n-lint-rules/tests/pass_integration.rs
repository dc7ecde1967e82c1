//! End-to-end runs of the analyzer with both built-in detectors.

use i18n_lint_core::{Analyzer, Config, LintResult, Policy};
use i18n_lint_rules::default_detectors;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_source(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create source dir");
    }
    fs::write(path, content).expect("write source file");
}

fn run_with(config: &Config, root: &Path) -> LintResult {
    let policy = Policy::from_config(config).expect("policy builds");
    let mut builder = Analyzer::builder().root(root);
    for detector in default_detectors(&policy) {
        builder = builder.detector_box(detector);
    }
    let analyzer = builder.build().expect("analyzer builds");
    analyzer.analyze().expect("analysis succeeds")
}

const MAIN_RS: &str = r#"
use chrono::Local;

fn current_time_label() -> String {
    format!("当前系统时间: {}", Local::now())
}

fn marked(text: &str) -> &str {
    text
}

fn main() {
    println!("{}", current_time_label());
    let _ = marked("XXX 不应该报告这个");
}
"#;

#[test]
fn scenario_findings_with_hatch_configured() {
    let dir = TempDir::new().expect("tempdir");
    write_source(dir.path(), "src/main.rs", MAIN_RS);

    let config = Config {
        escape_hatches: vec!["marked".to_string()],
        ..Config::default()
    };
    let result = run_with(&config, dir.path());

    assert_eq!(result.files_checked, 1);
    // one Han literal outside the hatch, one chrono::Local usage
    assert_eq!(result.findings.len(), 2);

    let codes: Vec<&str> = result.findings.iter().map(|f| f.code.as_str()).collect();
    assert!(codes.contains(&"IL001"));
    assert!(codes.contains(&"IL002"));

    let script = result
        .findings
        .iter()
        .find(|f| f.code == "IL001")
        .expect("script finding");
    assert!(script.message.contains("当前系统时间:"));
    assert!(!script.message.contains("不应该报告这个"));
}

#[test]
fn without_hatch_the_marked_literal_is_reported_too() {
    let dir = TempDir::new().expect("tempdir");
    write_source(dir.path(), "src/main.rs", MAIN_RS);

    let result = run_with(&Config::default(), dir.path());
    let script_findings = result.findings.iter().filter(|f| f.code == "IL001").count();
    assert_eq!(script_findings, 2);
}

#[test]
fn test_files_are_excluded_unless_requested() {
    let dir = TempDir::new().expect("tempdir");
    write_source(dir.path(), "src/lib.rs", "pub fn f() {}\n");
    write_source(
        dir.path(),
        "src/clock_test.rs",
        "pub fn fixture() -> &'static str {\n    \"测试夹具\"\n}\n",
    );

    let result = run_with(&Config::default(), dir.path());
    assert_eq!(result.files_checked, 2);
    assert!(result.is_clean());

    let config = Config {
        include_test_files: true,
        ..Config::default()
    };
    let result = run_with(&config, dir.path());
    assert_eq!(result.findings.len(), 1);
}

#[test]
fn findings_are_ordered_by_file_then_position() {
    let dir = TempDir::new().expect("tempdir");
    write_source(
        dir.path(),
        "src/alpha.rs",
        "pub fn a() -> &'static str {\n    \"甲\"\n}\npub fn b() -> &'static str {\n    \"乙\"\n}\n",
    );
    write_source(
        dir.path(),
        "src/beta.rs",
        "pub fn c() -> &'static str {\n    \"丙\"\n}\n",
    );

    let result = run_with(&Config::default(), dir.path());
    assert_eq!(result.findings.len(), 3);

    let positions: Vec<(String, usize)> = result
        .findings
        .iter()
        .map(|f| (f.location.file.display().to_string(), f.location.line))
        .collect();
    assert_eq!(
        positions,
        vec![
            ("src/alpha.rs".to_string(), 2),
            ("src/alpha.rs".to_string(), 5),
            ("src/beta.rs".to_string(), 2),
        ]
    );
}

#[test]
fn repeated_runs_are_identical() {
    let dir = TempDir::new().expect("tempdir");
    write_source(dir.path(), "src/main.rs", MAIN_RS);

    let config = Config {
        escape_hatches: vec!["marked".to_string()],
        ..Config::default()
    };
    let first = run_with(&config, dir.path());
    let second = run_with(&config, dir.path());

    let first_json = serde_json::to_string(&first.findings).expect("serialize");
    let second_json = serde_json::to_string(&second.findings).expect("serialize");
    assert_eq!(first_json, second_json);
}

#[test]
fn watched_symbol_is_reported_inside_hatch() {
    let dir = TempDir::new().expect("tempdir");
    write_source(
        dir.path(),
        "src/main.rs",
        r#"
use chrono::Local;

fn marked(text: String) -> String {
    text
}

fn main() {
    let _ = marked(format!("时间 {}", Local::now()));
}
"#,
    );

    let config = Config {
        escape_hatches: vec!["marked".to_string()],
        ..Config::default()
    };
    let result = run_with(&config, dir.path());

    // the literal is blessed by the hatch; the symbol usage is not
    assert_eq!(result.findings.len(), 1);
    assert_eq!(result.findings[0].code, "IL002");
    assert_eq!(result.findings[0].message, "usage of chrono::Local");
}
