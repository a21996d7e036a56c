//! Snippet data structures in the wire format the destination app imports.

use serde::{Deserialize, Serialize};

/// A single keyword-expansion snippet.
///
/// One snippet is produced per (emoji, shortcode) pair. The keyword is the
/// shortcode verbatim; the pack-wide prefix/suffix live in the manifest and
/// are applied by the destination application at lookup time, never here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// The expansion text: the decoded emoji glyph sequence
    pub snippet: String,
    /// Deterministic unique identifier, stable across rebuilds
    pub uid: String,
    /// Display name: glyph + title-cased emoji name, comma-joined with derived keywords
    pub name: String,
    /// The expansion trigger keyword (a shortcode, no prefix/suffix)
    pub keyword: String,
    /// Whether automatic expansion is disabled for this snippet (fixed policy: false)
    pub dontautoexpand: bool,
}

/// Wire wrapper for a snippet JSON file.
///
/// The destination application expects each file to hold the snippet under
/// a single `alfredsnippet` top-level field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetFile {
    /// The wrapped snippet
    pub alfredsnippet: Snippet,
}

impl SnippetFile {
    /// Wraps a snippet in its wire envelope.
    #[must_use]
    pub const fn new(snippet: Snippet) -> Self {
        Self {
            alfredsnippet: snippet,
        }
    }
}
