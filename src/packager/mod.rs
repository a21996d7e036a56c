//! Deterministic archive packaging for compiled snippet packs.
//!
//! The archive is a zip container holding one JSON file per snippet plus
//! the `info.plist` manifest. Packaging is fully buffered in memory; the
//! destination file is only written once every entry has serialized
//! successfully, so a failed build never leaves a partial archive behind.

pub mod manifest;

pub use manifest::{parse_info_plist, render_info_plist};

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::compiler::{CompileError, CompiledPack};
use crate::constants::MANIFEST_FILENAME;

/// Renders a compiled pack into an in-memory zip archive.
///
/// Entry order follows the pack's entry order, with the manifest written
/// last. File timestamps are fixed so rebuilding from identical input
/// yields a byte-identical archive.
///
/// # Errors
///
/// Returns [`CompileError::DuplicateFilename`] if two snippets map to the
/// same archive filename, or a zip/serialization error.
pub fn render_archive(pack: &CompiledPack) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    // Fixed timestamp (the zip epoch) keeps rebuilds byte-identical
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default());

    let mut claimed: HashMap<&str, &str> = HashMap::new();
    for entry in &pack.entries {
        let uid = entry.file.alfredsnippet.uid.as_str();
        if let Some(first_uid) = claimed.insert(entry.filename.as_str(), uid) {
            return Err(CompileError::DuplicateFilename {
                filename: entry.filename.clone(),
                first_uid: first_uid.to_string(),
                second_uid: uid.to_string(),
            }
            .into());
        }

        let json = serde_json::to_string_pretty(&entry.file)
            .with_context(|| format!("Failed to serialize snippet '{uid}'"))?;
        writer
            .start_file(entry.filename.as_str(), options)
            .with_context(|| format!("Failed to add '{}' to archive", entry.filename))?;
        writer
            .write_all(json.as_bytes())
            .with_context(|| format!("Failed to write '{}' to archive", entry.filename))?;
    }

    writer
        .start_file(MANIFEST_FILENAME, options)
        .context("Failed to add manifest to archive")?;
    writer
        .write_all(render_info_plist(&pack.manifest).as_bytes())
        .context("Failed to write manifest to archive")?;

    let cursor = writer.finish().context("Failed to finish archive")?;
    Ok(cursor.into_inner())
}

/// Renders a compiled pack and writes it to `output_path`.
///
/// The archive only reaches disk after the whole pack has rendered
/// without error.
pub fn write_archive(pack: &CompiledPack, output_path: &Path) -> Result<()> {
    let bytes = render_archive(pack)?;
    fs::write(output_path, bytes)
        .with_context(|| format!("Failed to write archive: {}", output_path.display()))?;
    Ok(())
}
