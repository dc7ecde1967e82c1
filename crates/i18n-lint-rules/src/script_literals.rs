//! Detector for string literals containing disallowed-script characters.
//!
//! # Rationale
//!
//! Hardcoded strings in a non-target writing system are hurdles to
//! i18n/l10n: they bypass the translation pipeline and ship to every
//! locale as-is. Literals that are intentionally untranslated can be
//! wrapped in a configured escape hatch, which exempts the whole call
//! subtree.
//!
//! # Configuration
//!
//! - `scripts`: Unicode script names to disallow (default: `["Han"]`)
//! - `escape_hatches`: qualified names whose calls exempt nested literals
//! - `include_test_files`: also check test files (default: false)

use i18n_lint_core::{
    has_cfg_test, has_test_attr, Detector, FileContext, Finding, Location, Policy, Severity,
    SymbolResolver,
};
use proc_macro2::{TokenStream, TokenTree};
use syn::punctuated::Punctuated;
use syn::visit::Visit;
use syn::{
    Attribute, Expr, ExprCall, ItemExternCrate, ItemFn, ItemMod, ItemUse, LitStr, Macro, Token,
};

/// Detector code for script-literals.
pub const CODE: &str = "IL001";

/// Detector name for script-literals.
pub const NAME: &str = "script-literals";

/// Flags string literals containing characters of a disallowed script.
#[derive(Debug, Clone)]
pub struct ScriptLiterals {
    policy: Policy,
}

impl ScriptLiterals {
    /// Creates the detector with the given policy.
    #[must_use]
    pub fn new(policy: Policy) -> Self {
        Self { policy }
    }
}

impl Detector for ScriptLiterals {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Flags string literals containing disallowed-script characters"
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

        let mut visitor = ScriptVisitor {
            ctx,
            policy: &self.policy,
            resolver,
            findings: Vec::new(),
        };

        visitor.visit_file(ast);
        visitor.findings
    }
}

struct ScriptVisitor<'a> {
    ctx: &'a FileContext<'a>,
    policy: &'a Policy,
    resolver: &'a dyn SymbolResolver,
    findings: Vec<Finding>,
}

impl ScriptVisitor<'_> {
    fn skip_tests(&self) -> bool {
        !self.policy.include_test_files
    }

    fn is_hatch(&self, path: &syn::Path) -> bool {
        self.resolver
            .resolve(path)
            .is_some_and(|name| self.policy.is_escape_hatch(&name))
    }

    fn check_literal(&mut self, raw: &str, span: proc_macro2::Span) {
        let policy = self.policy;
        for script in &policy.scripts {
            if script.matches(raw) {
                let (offset, length) = self.ctx.span_bytes(span);
                let location = Location::from_span(self.ctx.relative_path.clone(), span)
                    .with_span(offset, length);
                self.findings.push(Finding::new(
                    CODE,
                    NAME,
                    Severity::Error,
                    location,
                    format!(
                        "string literal contains {} script char(s): {raw}",
                        script.name()
                    ),
                ));
            }
        }
    }

    /// Fallback for macro bodies that are not expression lists: scan the
    /// raw token stream for string-literal tokens.
    fn scan_tokens(&mut self, tokens: TokenStream) {
        for tree in tokens {
            match tree {
                TokenTree::Group(group) => self.scan_tokens(group.stream()),
                TokenTree::Literal(lit) => {
                    let raw = lit.to_string();
                    if raw.contains('"') {
                        self.check_literal(&raw, lit.span());
                    }
                }
                TokenTree::Ident(_) | TokenTree::Punct(_) => {}
            }
        }
    }
}

impl<'ast> Visit<'ast> for ScriptVisitor<'_> {
    fn visit_attribute(&mut self, _node: &'ast Attribute) {
        // attribute literals (including desugared doc comments) are not
        // user-facing text
    }

    fn visit_item_use(&mut self, _node: &'ast ItemUse) {
        // import paths are not checked
    }

    fn visit_item_extern_crate(&mut self, _node: &'ast ItemExternCrate) {}

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

    fn visit_expr_call(&mut self, node: &'ast ExprCall) {
        if let Expr::Path(callee) = &*node.func {
            if self.is_hatch(&callee.path) {
                // the hatch blesses the whole call subtree
                return;
            }
        }
        syn::visit::visit_expr_call(self, node);
    }

    fn visit_macro(&mut self, node: &'ast Macro) {
        if self.is_hatch(&node.path) {
            return;
        }
        if let Ok(args) = node.parse_body_with(Punctuated::<Expr, Token![,]>::parse_terminated) {
            let mut inner = ScriptVisitor {
                ctx: self.ctx,
                policy: self.policy,
                resolver: self.resolver,
                findings: Vec::new(),
            };
            for expr in &args {
                inner.visit_expr(expr);
            }
            self.findings.append(&mut inner.findings);
        } else {
            self.scan_tokens(node.tokens.clone());
        }
    }

    fn visit_lit_str(&mut self, node: &'ast LitStr) {
        let raw = node.token().to_string();
        self.check_literal(&raw, node.span());
    }
}
