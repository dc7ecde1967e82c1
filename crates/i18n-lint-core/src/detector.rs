//! Detector trait for per-file i18n checks.

use crate::context::FileContext;
use crate::resolve::SymbolResolver;
use crate::types::Finding;

/// A per-file detector based on `syn` AST analysis.
///
/// Implementations receive the parsed AST plus a resolution oracle and walk
/// the tree with the visitor pattern. The oracle is supplied by the caller,
/// never constructed by the detector, so a host with better resolution than
/// the built-in import table can plug its own in.
///
/// # Example
///
/// ```ignore
/// use i18n_lint_core::{Detector, FileContext, Finding, SymbolResolver};
/// use syn::visit::Visit;
///
/// pub struct NoLongLiterals;
///
/// impl Detector for NoLongLiterals {
///     fn name(&self) -> &'static str { "no-long-literals" }
///     fn code(&self) -> &'static str { "IL900" }
///
///     fn check(
///         &self,
///         ctx: &FileContext,
///         ast: &syn::File,
///         resolver: &dyn SymbolResolver,
///     ) -> Vec<Finding> {
///         let mut visitor = LiteralVisitor::new(ctx);
///         visitor.visit_file(ast);
///         visitor.findings
///     }
/// }
/// ```
pub trait Detector: Send + Sync {
    /// Returns the kebab-case name of this detector (e.g., "script-literals").
    fn name(&self) -> &'static str;

    /// Returns the detector code (e.g., "IL001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this detector checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Checks a single file and returns any findings.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Context about the file being checked
    /// * `ast` - The parsed syntax tree of the file
    /// * `resolver` - Oracle mapping paths to qualified names
    fn check(
        &self,
        ctx: &FileContext,
        ast: &syn::File,
        resolver: &dyn SymbolResolver,
    ) -> Vec<Finding>;
}

/// Type alias for boxed Detector trait objects.
pub type DetectorBox = Box<dyn Detector>;
