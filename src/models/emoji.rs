//! Input emoji record as found in the iamcal/emoji-data dataset.

use serde::{Deserialize, Serialize};

/// A single emoji entry from the source dataset.
///
/// Field analysis of the dataset shows all of these fields are always
/// present and non-empty; records that violate that are skipped with a
/// warning before compilation (see [`crate::parser::dataset`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiRecord {
    /// Hyphen-joined uppercase hex codepoints (e.g., "1F468-200D-1F4BB")
    pub unified: String,
    /// Human-readable name, uppercase convention (e.g., "GRINNING FACE")
    pub name: String,
    /// Top-level category (e.g., "Smileys & Emotion")
    pub category: String,
    /// Taxonomy subcategory, hyphen-delimited (e.g., "face-smiling")
    pub subcategory: String,
    /// Shortcode identifiers, ordered, non-empty (e.g., ["grinning"])
    pub short_names: Vec<String>,
}

impl EmojiRecord {
    /// Creates a new `EmojiRecord` from its parts.
    #[must_use]
    pub fn new(
        unified: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        subcategory: impl Into<String>,
        short_names: Vec<String>,
    ) -> Self {
        Self {
            unified: unified.into(),
            name: name.into(),
            category: category.into(),
            subcategory: subcategory.into(),
            short_names,
        }
    }
}
