//! Snippet compilation pipeline.
//!
//! Turns an ordered list of [`EmojiRecord`]s into a [`CompiledPack`]: the
//! codepoint decoder produces the glyph, the keyword deriver extracts
//! non-redundant search terms, and the assembler fans out one snippet per
//! shortcode. Each run is a pure function of its inputs; there is no
//! retained state between compilations.

pub mod assemble;
pub mod decode;
pub mod error;
pub mod keywords;

pub use assemble::PackEntry;
pub use error::CompileError;

use crate::models::{EmojiRecord, PackManifest};

/// Options controlling a single compilation run.
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    /// Cap on processed emoji records, for testing and partial builds
    pub max_records: Option<usize>,
}

/// A fully compiled snippet pack, ready for packaging.
#[derive(Debug, Clone)]
pub struct CompiledPack {
    /// Snippet entries in deterministic order: input record order, then
    /// shortcode order within a record
    pub entries: Vec<PackEntry>,
    /// Pack-wide keyword prefix/suffix settings
    pub manifest: PackManifest,
}

/// A per-record warning accumulated during compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileWarning {
    /// Name of the emoji record the warning applies to
    pub record: String,
    /// What went wrong
    pub message: String,
}

/// Counts and warnings from a compilation run.
#[derive(Debug, Clone, Default)]
pub struct CompileSummary {
    /// Records successfully compiled into snippets
    pub processed: usize,
    /// Records skipped because of per-record errors
    pub skipped: usize,
    /// Snippets produced (>= processed, one per shortcode)
    pub snippets: usize,
    /// Accumulated per-record warnings
    pub warnings: Vec<CompileWarning>,
}

/// Compiles emoji records into a snippet pack.
///
/// A record whose codepoint string fails to decode is skipped with a
/// warning; one bad record never aborts the batch. Fatal conditions
/// (duplicate archive filenames, I/O) are detected later by the packager.
#[must_use]
pub fn compile(
    records: &[EmojiRecord],
    manifest: PackManifest,
    options: &CompileOptions,
) -> (CompiledPack, CompileSummary) {
    let limit = options.max_records.unwrap_or(records.len());
    let mut entries = Vec::new();
    let mut summary = CompileSummary::default();

    for record in records.iter().take(limit) {
        match assemble::assemble_record(record) {
            Ok(record_entries) => {
                summary.processed += 1;
                summary.snippets += record_entries.len();
                entries.extend(record_entries);
            }
            Err(err) => {
                summary.skipped += 1;
                summary.warnings.push(CompileWarning {
                    record: record.name.clone(),
                    message: err.to_string(),
                });
            }
        }
    }

    (CompiledPack { entries, manifest }, summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_records() -> Vec<EmojiRecord> {
        vec![
            EmojiRecord::new(
                "1F600",
                "GRINNING FACE",
                "Smileys & Emotion",
                "face-smiling",
                vec!["grinning".to_string(), "grinning_face".to_string()],
            ),
            EmojiRecord::new(
                "1F44D",
                "THUMBS UP SIGN",
                "People & Body",
                "hand-fingers-closed",
                vec!["thumbsup".to_string(), "+1".to_string()],
            ),
        ]
    }

    #[test]
    fn test_compile_counts() {
        let (pack, summary) = compile(
            &fixture_records(),
            PackManifest::default(),
            &CompileOptions::default(),
        );
        assert_eq!(summary.processed, 2);
        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.snippets, 4);
        assert_eq!(pack.entries.len(), 4);
        assert!(summary.warnings.is_empty());
    }

    #[test]
    fn test_compile_preserves_record_then_shortcode_order() {
        let (pack, _) = compile(
            &fixture_records(),
            PackManifest::default(),
            &CompileOptions::default(),
        );
        let keywords: Vec<&str> = pack
            .entries
            .iter()
            .map(|e| e.file.alfredsnippet.keyword.as_str())
            .collect();
        assert_eq!(keywords, vec!["grinning", "grinning_face", "thumbsup", "+1"]);
    }

    #[test]
    fn test_compile_skips_bad_record_with_warning() {
        let mut records = fixture_records();
        records[0].unified = "BOGUS".to_string();

        let (pack, summary) = compile(
            &records,
            PackManifest::default(),
            &CompileOptions::default(),
        );
        assert_eq!(summary.processed, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(pack.entries.len(), 2);
        assert_eq!(summary.warnings.len(), 1);
        assert_eq!(summary.warnings[0].record, "GRINNING FACE");
        assert!(summary.warnings[0].message.contains("BOGUS"));
    }

    #[test]
    fn test_compile_max_records_caps_input() {
        let (pack, summary) = compile(
            &fixture_records(),
            PackManifest::default(),
            &CompileOptions {
                max_records: Some(1),
            },
        );
        assert_eq!(summary.processed, 1);
        assert_eq!(pack.entries.len(), 2);
    }

    #[test]
    fn test_compile_is_pure() {
        let records = fixture_records();
        let (a, _) = compile(&records, PackManifest::default(), &CompileOptions::default());
        let (b, _) = compile(&records, PackManifest::default(), &CompileOptions::default());
        assert_eq!(a.entries, b.entries);
    }
}
