//! Detector for uses of locale-dependent symbols.
//!
//! # Rationale
//!
//! Symbols like `chrono::Local` silently pick up the host machine's locale
//! or timezone, which makes program output depend on where it runs. Every
//! use site is flagged, deliberately ignoring escape hatches: a hatch
//! exempts human-readable text, not locale-dependent API usage.
//!
//! # Configuration
//!
//! - `watched_symbols`: qualified names to flag (default: `chrono::Local`
//!   under both of its public paths)
//! - `include_test_files`: also check test files (default: false)

use i18n_lint_core::{
    has_cfg_test, has_test_attr, Detector, FileContext, Finding, Location, Policy, Severity,
    SymbolResolver,
};
use syn::punctuated::Punctuated;
use syn::visit::Visit;
use syn::{Expr, ItemFn, ItemMod, Macro, Token};

/// Detector code for watched-symbols.
pub const CODE: &str = "IL002";

/// Detector name for watched-symbols.
pub const NAME: &str = "watched-symbols";

/// Flags every use of a configured locale-dependent symbol.
#[derive(Debug, Clone)]
pub struct WatchedSymbols {
    policy: Policy,
}

impl WatchedSymbols {
    /// Creates the detector with the given policy.
    #[must_use]
    pub fn new(policy: Policy) -> Self {
        Self { policy }
    }
}

impl Detector for WatchedSymbols {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Flags every use of a locale-dependent symbol"
    }

    fn check(
        &self,
        ctx: &FileContext,
        ast: &syn::File,
        resolver: &dyn SymbolResolver,
    ) -> Vec<Finding> {
        if !self.policy.include_test_files && ctx.is_test {
            return Vec::new();
        }

        let mut visitor = WatchedVisitor {
            ctx,
            policy: &self.policy,
            resolver,
            findings: Vec::new(),
        };

        visitor.visit_file(ast);
        visitor.findings
    }
}

struct WatchedVisitor<'a> {
    ctx: &'a FileContext<'a>,
    policy: &'a Policy,
    resolver: &'a dyn SymbolResolver,
    findings: Vec<Finding>,
}

impl WatchedVisitor<'_> {
    fn skip_tests(&self) -> bool {
        !self.policy.include_test_files
    }
}

impl<'ast> Visit<'ast> for WatchedVisitor<'_> {
    fn visit_item_mod(&mut self, node: &'ast ItemMod) {
        if self.skip_tests() && has_cfg_test(&node.attrs) {
            return;
        }
        syn::visit::visit_item_mod(self, node);
    }

    fn visit_item_fn(&mut self, node: &'ast ItemFn) {
        if self.skip_tests() && has_test_attr(&node.attrs) {
            return;
        }
        syn::visit::visit_item_fn(self, node);
    }

    fn visit_path(&mut self, node: &'ast syn::Path) {
        // A watched symbol can sit at any segment: `Local::now()` carries
        // it first, `chrono::Local` carries it last.
        for len in 1..=node.segments.len() {
            if let Some(name) = self.resolver.resolve_prefix(node, len) {
                if self.policy.is_watched(&name) {
                    let ident = &node.segments[len - 1].ident;
                    let span = ident.span();
                    let (offset, length) = self.ctx.span_bytes(span);
                    let location = Location::from_span(self.ctx.relative_path.clone(), span)
                        .with_span(offset, length);
                    self.findings.push(Finding::new(
                        CODE,
                        NAME,
                        Severity::Error,
                        location,
                        format!("usage of {}", name.path_display()),
                    ));
                }
            }
        }
        syn::visit::visit_path(self, node);
    }

    fn visit_macro(&mut self, node: &'ast Macro) {
        if let Ok(args) = node.parse_body_with(Punctuated::<Expr, Token![,]>::parse_terminated) {
            let mut inner = WatchedVisitor {
                ctx: self.ctx,
                policy: self.policy,
                resolver: self.resolver,
                findings: Vec::new(),
            };
            for expr in &args {
                inner.visit_expr(expr);
            }
            self.findings.append(&mut inner.findings);
        }
        syn::visit::visit_macro(self, node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use i18n_lint_core::{Config, ImportResolver};
    use std::path::Path;

    fn default_policy() -> Policy {
        Policy::from_config(&Config::default()).expect("test policy")
    }

    fn check_with(policy: Policy, code: &str) -> Vec<Finding> {
        let ast = syn::parse_file(code).expect("test code parses");
        let resolver = ImportResolver::from_file(&ast);
        let ctx = FileContext::new(Path::new("src/lib.rs"), code, Path::new("."));
        WatchedSymbols::new(policy).check(&ctx, &ast, &resolver)
    }

    fn check_code(code: &str) -> Vec<Finding> {
        check_with(default_policy(), code)
    }

    #[test]
    fn detects_imported_symbol() {
        let findings = check_code(
            r#"
use chrono::Local;

fn now_string() -> String {
    Local::now().to_rfc3339()
}
"#,
        );
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].code, CODE);
        assert_eq!(findings[0].message, "usage of chrono::Local");
        assert_eq!(findings[0].location.line, 5);
        assert_eq!(findings[0].location.column, 5);
    }

    #[test]
    fn detects_fully_qualified_path() {
        let findings = check_code(
            r#"
fn now_string() -> String {
    chrono::Local::now().to_rfc3339()
}
"#,
        );
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn detects_symbol_in_type_position() {
        let findings = check_code(
            r#"
use chrono::{DateTime, Local};

fn start_of_day(at: DateTime<Local>) -> DateTime<Local> {
    at
}
"#,
        );
        assert_eq!(findings.len(), 2);
    }

    #[test]
    fn reports_every_use_site() {
        let findings = check_code(
            r#"
use chrono::Local;

fn both() -> (String, String) {
    (Local::now().to_rfc3339(), Local::now().to_rfc3339())
}
"#,
        );
        assert_eq!(findings.len(), 2);
    }

    #[test]
    fn unimported_bare_name_is_not_watched() {
        let findings = check_code(
            r#"
fn other() {
    let _ = Local::now();
}
"#,
        );
        assert!(findings.is_empty());
    }

    #[test]
    fn escape_hatches_do_not_suppress() {
        let config = Config {
            escape_hatches: vec!["marker".to_string()],
            ..Config::default()
        };
        let policy = Policy::from_config(&config).expect("test policy");
        let findings = check_with(
            policy,
            r#"
use chrono::Local;

fn label() {
    marker(Local::now());
}
"#,
        );
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn detects_symbol_inside_macro() {
        let findings = check_code(
            r#"
use chrono::Local;

fn log_time() {
    println!("{}", Local::now());
}
"#,
        );
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_fn_is_pruned_by_default() {
        let code = r#"
use chrono::Local;

#[test]
fn clock_works() {
    let _ = Local::now();
}
"#;
        assert!(check_code(code).is_empty());

        let config = Config {
            include_test_files: true,
            ..Config::default()
        };
        let policy = Policy::from_config(&config).expect("test policy");
        assert_eq!(check_with(policy, code).len(), 1);
    }

    #[test]
    fn test_file_is_skipped_entirely() {
        let code = r#"
use chrono::Local;

fn fixture() {
    let _ = Local::now();
}
"#;
        let ast = syn::parse_file(code).expect("test code parses");
        let resolver = ImportResolver::from_file(&ast);
        let ctx = FileContext::new(Path::new("src/clock_test.rs"), code, Path::new("."));
        let findings = WatchedSymbols::new(default_policy()).check(&ctx, &ast, &resolver);
        assert!(findings.is_empty());
    }
}
