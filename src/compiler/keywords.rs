//! Supplementary search keyword derivation from taxonomy labels.

use std::collections::HashSet;

/// Generic taxonomy words that carry no discriminating search value.
const GENERIC_WORDS: [&str; 3] = ["object", "other", "symbol"];

/// Derives an ordered, deduplicated keyword list from a subcategory label.
///
/// The subcategory is split on `-` in original order; any token that already
/// appears in the emoji's name (case-insensitive, surrounding colons
/// stripped) or is one of the generic taxonomy words is removed. An empty
/// result is valid: the name alone is assumed sufficiently descriptive.
///
/// Output order depends only on the subcategory token order, never on set
/// iteration order, so identical input always yields identical output.
#[must_use]
pub fn derive_keywords(name: &str, subcategory: &str) -> Vec<String> {
    let mut excluded: HashSet<String> = name
        .to_lowercase()
        .split_whitespace()
        .map(|word| word.trim_matches(':').to_string())
        .collect();
    excluded.extend(GENERIC_WORDS.iter().map(ToString::to_string));

    let mut keywords = Vec::new();
    for token in subcategory.split('-') {
        if token.is_empty() || excluded.contains(token) {
            continue;
        }
        // Excluding emitted tokens also deduplicates repeats in order
        excluded.insert(token.to_string());
        keywords.push(token.to_string());
    }

    keywords
}
