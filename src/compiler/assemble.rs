//! Snippet assembly: one snippet per (emoji, shortcode) pair.

use regex::Regex;
use std::sync::OnceLock;

use crate::compiler::decode::decode_codepoints;
use crate::compiler::error::CompileError;
use crate::compiler::keywords::derive_keywords;
use crate::models::{EmojiRecord, Snippet, SnippetFile};

/// UID namespace prefix shared by every snippet this tool produces.
const UID_NAMESPACE: &str = "emojipack";

/// A snippet together with its archive filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackEntry {
    /// Filename inside the pack archive (e.g., "grinning-GRINNING_FACE.json")
    pub filename: String,
    /// The snippet file contents
    pub file: SnippetFile,
}

/// Builds the snippets for a single emoji record.
///
/// Fans out over the whole `short_names` list: a record with two shortcodes
/// yields two snippets that differ only in keyword, UID, and archive
/// filename. Snippets are returned in the record's shortcode order.
///
/// # Errors
///
/// Returns [`CompileError::InvalidCodepoint`] if the record's codepoint
/// string does not decode; the caller skips the record and continues.
pub fn assemble_record(record: &EmojiRecord) -> Result<Vec<PackEntry>, CompileError> {
    let glyph = decode_codepoints(&record.unified)?;
    let keywords = derive_keywords(&record.name, &record.subcategory);
    let title = title_case(&record.name);
    let safe_name = sanitize_name(&record.name);

    let mut entries = Vec::with_capacity(record.short_names.len());
    for shortcode in &record.short_names {
        let mut display_terms = vec![format!("{glyph} {title}")];
        display_terms.extend(keywords.iter().cloned());

        let snippet = Snippet {
            snippet: glyph.clone(),
            uid: format!("{UID_NAMESPACE}-{shortcode}-{safe_name}"),
            name: display_terms.join(", "),
            // Verbatim shortcode; prefix/suffix belong to the manifest
            keyword: shortcode.clone(),
            dontautoexpand: false,
        };

        entries.push(PackEntry {
            filename: format!("{shortcode}-{safe_name}.json"),
            file: SnippetFile::new(snippet),
        });
    }

    Ok(entries)
}

/// Transforms an emoji name into a filesystem-safe identifier fragment.
///
/// Whitespace runs become single underscores; anything outside
/// `[A-Za-z0-9._-]` is dropped. Case is preserved so UIDs and filenames
/// stay recognizable against the uppercase dataset names.
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    static UNSAFE: OnceLock<Regex> = OnceLock::new();

    let whitespace = WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"));
    let unsafe_chars = UNSAFE.get_or_init(|| Regex::new(r"[^A-Za-z0-9._-]").expect("valid regex"));

    let underscored = whitespace.replace_all(name.trim(), "_");
    unsafe_chars.replace_all(&underscored, "").into_owned()
}

/// Title-cases a name: each letter following a non-letter is uppercased,
/// all other letters are lowercased.
#[must_use]
pub fn title_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut at_word_start = true;

    for c in name.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(c);
            at_word_start = true;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grinning_face() -> EmojiRecord {
        EmojiRecord::new(
            "1F600",
            "GRINNING FACE",
            "Smileys & Emotion",
            "face-smiling",
            vec!["grinning".to_string(), "grinning_face".to_string()],
        )
    }

    #[test]
    fn test_fan_out_per_shortcode() {
        let entries = assemble_record(&grinning_face()).unwrap();
        assert_eq!(entries.len(), 2);

        let first = &entries[0].file.alfredsnippet;
        let second = &entries[1].file.alfredsnippet;
        assert_eq!(first.keyword, "grinning");
        assert_eq!(second.keyword, "grinning_face");

        // Same glyph and display terms, different keyword and uid
        assert_eq!(first.snippet, second.snippet);
        assert_eq!(first.name, second.name);
        assert_ne!(first.uid, second.uid);
    }

    #[test]
    fn test_display_name_composition() {
        let entries = assemble_record(&grinning_face()).unwrap();
        assert_eq!(
            entries[0].file.alfredsnippet.name,
            "\u{1F600} Grinning Face, smiling"
        );
    }

    #[test]
    fn test_uid_is_deterministic() {
        let a = assemble_record(&grinning_face()).unwrap();
        let b = assemble_record(&grinning_face()).unwrap();
        assert_eq!(a[0].file.alfredsnippet.uid, b[0].file.alfredsnippet.uid);
        assert_eq!(
            a[0].file.alfredsnippet.uid,
            "emojipack-grinning-GRINNING_FACE"
        );
    }

    #[test]
    fn test_filename_from_keyword_and_name() {
        let entries = assemble_record(&grinning_face()).unwrap();
        assert_eq!(entries[0].filename, "grinning-GRINNING_FACE.json");
        assert_eq!(entries[1].filename, "grinning_face-GRINNING_FACE.json");
    }

    #[test]
    fn test_invalid_codepoints_propagate() {
        let mut record = grinning_face();
        record.unified = "NOPE".to_string();
        assert!(assemble_record(&record).is_err());
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("GRINNING FACE"), "GRINNING_FACE");
        assert_eq!(sanitize_name("  KEYCAP: 10  "), "KEYCAP_10");
        assert_eq!(sanitize_name("A/B\\C"), "ABC");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("THUMBS UP SIGN"), "Thumbs Up Sign");
        assert_eq!(title_case("man-technologist"), "Man-Technologist");
        assert_eq!(title_case("OK HAND"), "Ok Hand");
    }
}
