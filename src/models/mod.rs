//! Data models for emoji records, snippets, and pack manifests.
//!
//! This module contains the core data structures used throughout the application.
//! Models are designed to be independent of CLI and I/O concerns.

pub mod emoji;
pub mod manifest;
pub mod snippet;

// Re-export all model types
pub use emoji::EmojiRecord;
pub use manifest::PackManifest;
pub use snippet::{Snippet, SnippetFile};
