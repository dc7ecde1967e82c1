//! Per-file context for detector execution.

use std::path::{Path, PathBuf};

/// Context provided to per-file detectors.
///
/// Carries metadata about the file being checked that detectors use for
/// context-aware decisions (most importantly the test-file gate).
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Whether this file is detected as a test file.
    pub is_test: bool,
    /// Path relative to the analyzed root.
    pub relative_path: PathBuf,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let is_test = Self::detect_test_file(path);
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);

        Self {
            path,
            content,
            is_test,
            relative_path,
        }
    }

    /// Detects if a file is a test file based on path conventions.
    fn detect_test_file(path: &Path) -> bool {
        // Check path components for test directories
        for component in path.components() {
            if let std::path::Component::Normal(s) = component {
                let s = s.to_string_lossy();
                if s == "tests" || s == "test" || s == "benches" {
                    return true;
                }
            }
        }

        // Check file name patterns
        if let Some(file_name) = path.file_name().and_then(|n| n.to_str()) {
            if file_name.ends_with("_test.rs")
                || file_name.ends_with("_tests.rs")
                || file_name.starts_with("test_")
                || file_name == "tests.rs"
            {
                return true;
            }
        }

        false
    }

    /// Calculates the byte offset for a span position.
    ///
    /// # Arguments
    ///
    /// * `line` - 1-indexed line number
    /// * `column` - 0-indexed column, counted in characters (the convention
    ///   of `proc-macro2` span locations)
    ///
    /// Columns are converted from characters to bytes against the actual
    /// line content, so offsets stay correct on non-ASCII lines.
    #[must_use]
    pub fn offset_of(&self, line: usize, column: usize) -> usize {
        let mut offset = 0;
        for (i, line_content) in self.content.lines().enumerate() {
            if i + 1 == line {
                let byte_col = line_content
                    .char_indices()
                    .nth(column)
                    .map_or(line_content.len(), |(byte, _)| byte);
                return offset + byte_col;
            }
            offset += line_content.len() + 1; // +1 for newline
        }

        offset
    }

    /// Returns the byte offset and length covered by a span.
    #[must_use]
    pub fn span_bytes(&self, span: proc_macro2::Span) -> (usize, usize) {
        let start = span.start();
        let end = span.end();
        let start_offset = self.offset_of(start.line, start.column);
        let end_offset = self.offset_of(end.line, end.column);
        (start_offset, end_offset.saturating_sub(start_offset))
    }
}
