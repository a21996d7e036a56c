//! Rendering and parsing of the pack manifest (`info.plist`).
//!
//! The manifest is a minimal Apple property list holding the keyword
//! prefix/suffix the destination application applies at lookup time.
//! Escaping is lossless so any prefix/suffix string survives a
//! render/parse round-trip exactly.

use anyhow::{bail, Context, Result};

use crate::models::PackManifest;

/// Plist key for the keyword prefix.
const KEY_PREFIX: &str = "snippetkeywordprefix";

/// Plist key for the keyword suffix.
const KEY_SUFFIX: &str = "snippetkeywordsuffix";

/// Renders a manifest as an `info.plist` document.
#[must_use]
pub fn render_info_plist(manifest: &PackManifest) -> String {
    let dtd_url = "http://www.apple.com/DTDs/PropertyList-1.0.dtd";
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "{dtd_url}">
<plist version="1.0">
<dict>
    <key>{KEY_PREFIX}</key>
    <string>{}</string>
    <key>{KEY_SUFFIX}</key>
    <string>{}</string>
</dict>
</plist>"#,
        escape_xml(&manifest.keyword_prefix),
        escape_xml(&manifest.keyword_suffix),
    )
}

/// Parses an `info.plist` document back into a manifest.
///
/// Used by pack inspection and by round-trip tests. Only the two keyword
/// keys are read; unknown keys are ignored.
pub fn parse_info_plist(content: &str) -> Result<PackManifest> {
    let prefix = extract_string_value(content, KEY_PREFIX)
        .with_context(|| format!("Manifest is missing key '{KEY_PREFIX}'"))?;
    let suffix = extract_string_value(content, KEY_SUFFIX)
        .with_context(|| format!("Manifest is missing key '{KEY_SUFFIX}'"))?;

    Ok(PackManifest::new(prefix, suffix))
}

/// Extracts the `<string>` value following `<key>name</key>`.
fn extract_string_value(content: &str, name: &str) -> Result<String> {
    let key_tag = format!("<key>{name}</key>");
    let after_key = match content.find(&key_tag) {
        Some(pos) => &content[pos + key_tag.len()..],
        None => bail!("key '{name}' not found"),
    };

    let start = after_key
        .find("<string>")
        .with_context(|| format!("no <string> value after key '{name}'"))?
        + "<string>".len();
    let end = after_key[start..]
        .find("</string>")
        .with_context(|| format!("unterminated <string> value for key '{name}'"))?;

    Ok(unescape_xml(&after_key[start..start + end]))
}

/// Escapes XML-significant characters in element content.
fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Reverses [`escape_xml`]. The `&amp;` entity is restored last so escaped
/// entity text itself round-trips.
fn unescape_xml(value: &str) -> String {
    value
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_keys_and_values() {
        let plist = render_info_plist(&PackManifest::new(";", ""));
        assert!(plist.starts_with("<?xml"));
        assert!(plist.contains("<key>snippetkeywordprefix</key>"));
        assert!(plist.contains("<string>;</string>"));
        assert!(plist.contains("<key>snippetkeywordsuffix</key>"));
    }

    #[test]
    fn test_roundtrip_plain_values() {
        let manifest = PackManifest::new(";", ":");
        let parsed = parse_info_plist(&render_info_plist(&manifest)).unwrap();
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn test_roundtrip_markup_significant_values() {
        let manifest = PackManifest::new("<&>", "&amp;<tag>");
        let parsed = parse_info_plist(&render_info_plist(&manifest)).unwrap();
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn test_roundtrip_empty_values() {
        let manifest = PackManifest::new("", "");
        let parsed = parse_info_plist(&render_info_plist(&manifest)).unwrap();
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn test_parse_missing_key_is_error() {
        let plist = render_info_plist(&PackManifest::default());
        let truncated = plist.replace("snippetkeywordsuffix", "somethingelse");
        assert!(parse_info_plist(&truncated).is_err());
    }
}
