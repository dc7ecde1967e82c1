//! Symbol resolution: mapping syntactic paths to qualified names.

use std::collections::HashMap;

use syn::visit::Visit;
use syn::{ItemUse, UseTree};

use crate::name::QualifiedName;

/// Resolution oracle consumed by detectors.
///
/// Resolution is best-effort and `Option`-returning: anything that cannot be
/// decided from the information available (method calls, glob imports,
/// macro-generated names) is `None`, which detectors treat as "condition not
/// met" rather than an error.
pub trait SymbolResolver {
    /// Resolves the first `len` segments of `path` to a qualified name.
    ///
    /// Returns `None` when `len` is out of range for the path.
    fn resolve_prefix(&self, path: &syn::Path, len: usize) -> Option<QualifiedName>;

    /// Resolves the whole path to a qualified name.
    fn resolve(&self, path: &syn::Path) -> Option<QualifiedName> {
        self.resolve_prefix(path, path.segments.len())
    }
}

/// Syntactic resolver built from a file's `use` declarations.
///
/// Expands the leading segment of a path through the file's import table, so
/// that after `use chrono::Local;` the paths `Local`, `Local::now` and
/// `chrono::Local::now` all see `Local` as `(chrono).Local`. A
/// single-segment path with no matching import resolves to a package-less
/// bare name, which is how locally-defined markers are addressed in
/// configuration.
#[derive(Debug, Default)]
pub struct ImportResolver {
    imports: HashMap<String, Vec<String>>,
}

impl ImportResolver {
    /// Builds the import table from every `use` declaration in the file,
    /// including those inside nested modules.
    #[must_use]
    pub fn from_file(file: &syn::File) -> Self {
        let mut collector = UseCollector {
            imports: HashMap::new(),
        };
        collector.visit_file(file);
        Self {
            imports: collector.imports,
        }
    }
}

impl SymbolResolver for ImportResolver {
    fn resolve_prefix(&self, path: &syn::Path, len: usize) -> Option<QualifiedName> {
        if len == 0 || len > path.segments.len() {
            return None;
        }
        let mut segments = path
            .segments
            .iter()
            .take(len)
            .map(|segment| segment.ident.to_string());
        let first = segments.next()?;
        let mut full = self
            .imports
            .get(&first)
            .cloned()
            .unwrap_or_else(|| vec![first]);
        full.extend(segments);
        let name = full.pop()?;
        if full.is_empty() {
            Some(QualifiedName::bare(name))
        } else {
            Some(QualifiedName::qualified(full.join("::"), name))
        }
    }
}

struct UseCollector {
    imports: HashMap<String, Vec<String>>,
}

impl<'ast> Visit<'ast> for UseCollector {
    fn visit_item_use(&mut self, node: &'ast ItemUse) {
        let mut prefix = Vec::new();
        collect_tree(&node.tree, &mut prefix, &mut self.imports);
    }
}

fn collect_tree(
    tree: &UseTree,
    prefix: &mut Vec<String>,
    imports: &mut HashMap<String, Vec<String>>,
) {
    match tree {
        UseTree::Path(path) => {
            prefix.push(path.ident.to_string());
            collect_tree(&path.tree, prefix, imports);
            prefix.pop();
        }
        UseTree::Name(name) => {
            let ident = name.ident.to_string();
            if ident == "self" {
                // `use chrono::{self}` binds the module name itself
                if let Some(last) = prefix.last() {
                    imports.insert(last.clone(), prefix.clone());
                }
            } else {
                let mut full = prefix.clone();
                full.push(ident.clone());
                imports.insert(ident, full);
            }
        }
        UseTree::Rename(rename) => {
            let mut full = prefix.clone();
            full.push(rename.ident.to_string());
            imports.insert(rename.rename.to_string(), full);
        }
        UseTree::Glob(_) => {} // no static alias to record
        UseTree::Group(group) => {
            for item in &group.items {
                collect_tree(item, prefix, imports);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver_for(code: &str) -> ImportResolver {
        let file = syn::parse_file(code).expect("test code parses");
        ImportResolver::from_file(&file)
    }

    fn path(s: &str) -> syn::Path {
        syn::parse_str(s).expect("test path parses")
    }

    #[test]
    fn resolves_imported_name() {
        let resolver = resolver_for("use chrono::Local;\n");
        assert_eq!(
            resolver.resolve(&path("Local")),
            Some(QualifiedName::qualified("chrono", "Local"))
        );
    }

    #[test]
    fn resolves_prefix_of_associated_call() {
        let resolver = resolver_for("use chrono::Local;\n");
        let p = path("Local::now");
        assert_eq!(
            resolver.resolve_prefix(&p, 1),
            Some(QualifiedName::qualified("chrono", "Local"))
        );
        assert_eq!(
            resolver.resolve_prefix(&p, 2),
            Some(QualifiedName::qualified("chrono::Local", "now"))
        );
    }

    #[test]
    fn resolves_full_path_without_import() {
        let resolver = resolver_for("fn main() {}\n");
        assert_eq!(
            resolver.resolve(&path("chrono::Local")),
            Some(QualifiedName::qualified("chrono", "Local"))
        );
    }

    #[test]
    fn bare_unimported_ident_is_package_less() {
        let resolver = resolver_for("fn main() {}\n");
        assert_eq!(
            resolver.resolve(&path("marker")),
            Some(QualifiedName::bare("marker"))
        );
    }

    #[test]
    fn handles_groups_renames_and_nested_modules() {
        let resolver = resolver_for(
            "use chrono::{Local as Loc, Utc};\nmod inner {\n    use std::time::Duration;\n}\n",
        );
        assert_eq!(
            resolver.resolve(&path("Loc")),
            Some(QualifiedName::qualified("chrono", "Local"))
        );
        assert_eq!(
            resolver.resolve(&path("Utc")),
            Some(QualifiedName::qualified("chrono", "Utc"))
        );
        assert_eq!(
            resolver.resolve(&path("Duration")),
            Some(QualifiedName::qualified("std::time", "Duration"))
        );
    }

    #[test]
    fn self_import_binds_module_name() {
        let resolver = resolver_for("use chrono::offset::{self};\n");
        assert_eq!(
            resolver.resolve(&path("offset::Local")),
            Some(QualifiedName::qualified("chrono::offset", "Local"))
        );
    }

    #[test]
    fn out_of_range_prefix_is_none() {
        let resolver = resolver_for("fn main() {}\n");
        let p = path("a::b");
        assert_eq!(resolver.resolve_prefix(&p, 0), None);
        assert_eq!(resolver.resolve_prefix(&p, 3), None);
    }
}
