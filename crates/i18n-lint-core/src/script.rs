//! Writing-system matchers for string literal checks.

use regex::Regex;

/// A compiled matcher for one Unicode script (writing system).
///
/// Matching operates on a literal's raw source text, code point by code
/// point; escape sequences are not decoded, so `"\u{5f53}"` does not match
/// the Han script while `"当"` does.
#[derive(Debug, Clone)]
pub struct Script {
    name: String,
    pattern: Regex,
}

impl Script {
    /// Compiles a matcher for the named Unicode script (e.g., "Han").
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not a valid Unicode script class.
    pub fn new(name: &str) -> Result<Self, ScriptError> {
        let well_formed = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !well_formed {
            return Err(ScriptError::UnknownScript {
                name: name.to_string(),
            });
        }
        let pattern = Regex::new(&format!(r"\p{{{name}}}")).map_err(|_| {
            ScriptError::UnknownScript {
                name: name.to_string(),
            }
        })?;
        Ok(Self {
            name: name.to_string(),
            pattern,
        })
    }

    /// Returns the script name this matcher was built from.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true iff `text` contains at least one code point of this
    /// script.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Errors from building a script matcher.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// The name is not a recognized Unicode script class.
    #[error("unknown script name: {name:?}")]
    UnknownScript {
        /// The rejected name.
        name: String,
    },
}
