//! Qualified names for escape hatches and watched symbols.

use std::fmt;
use std::str::FromStr;

/// A fully qualified name: a defining package path plus a declared name.
///
/// Serves both as the result of symbol resolution and as the lookup key for
/// the escape-hatch registry and the watched-symbol list. Names without a
/// package (`package == None`) address locally-defined or built-in items.
///
/// The textual form is `(package::path).name`, or a bare `name` for
/// package-less items:
///
/// ```
/// use i18n_lint_core::QualifiedName;
///
/// let name: QualifiedName = "(chrono).Local".parse().unwrap();
/// assert_eq!(name.to_string(), "(chrono).Local");
/// assert_eq!(name.path_display(), "chrono::Local");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    /// Defining package path (`None` for local or built-in items).
    pub package: Option<String>,
    /// Declared name.
    pub name: String,
}

impl QualifiedName {
    /// Creates a package-qualified name.
    #[must_use]
    pub fn qualified(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: Some(package.into()),
            name: name.into(),
        }
    }

    /// Creates a package-less bare name.
    #[must_use]
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            package: None,
            name: name.into(),
        }
    }

    /// Renders the name as a Rust path (`chrono::Local`), for messages.
    #[must_use]
    pub fn path_display(&self) -> String {
        match &self.package {
            Some(package) => format!("{}::{}", package, self.name),
            None => self.name.clone(),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.package {
            Some(package) => write!(f, "({}).{}", package, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Errors from parsing a qualified-name string.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NameError {
    /// The input was empty.
    #[error("empty qualified name")]
    Empty,
    /// A `(` was not followed by `).`.
    #[error("expected `(package::path).name` form, missing `).`")]
    Unclosed,
    /// The package between the parentheses was empty.
    #[error("empty package path between parentheses")]
    EmptyPackage,
    /// Nothing followed the `).` separator.
    #[error("missing name after `).`")]
    MissingName,
    /// A bare name contained `(`, `)` or `.`.
    #[error("bare name may not contain `(`, `)` or `.`")]
    StrayDelimiter,
}

impl FromStr for QualifiedName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, NameError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NameError::Empty);
        }
        if let Some(rest) = s.strip_prefix('(') {
            let (package, name) = rest.split_once(").").ok_or(NameError::Unclosed)?;
            if package.is_empty() {
                return Err(NameError::EmptyPackage);
            }
            if name.is_empty() {
                return Err(NameError::MissingName);
            }
            Ok(Self::qualified(package, name))
        } else if s.contains(['(', ')', '.']) {
            Err(NameError::StrayDelimiter)
        } else {
            Ok(Self::bare(s))
        }
    }
}
