//! Unified codepoint string decoding.

use crate::compiler::error::CompileError;

/// Decodes a hyphen-delimited hex codepoint string into its character sequence.
///
/// `"1F600"` yields the single grinning-face glyph; `"1F468-200D-1F4BB"`
/// yields man + zero-width joiner + laptop, which renders as one grapheme
/// cluster. Decoding is purely codepoint-by-codepoint concatenation: no
/// normalization, no grapheme-cluster validation.
///
/// # Errors
///
/// Returns [`CompileError::InvalidCodepoint`] for empty input, any non-hex
/// token, or a value outside the Unicode scalar range. Empty input is an
/// error rather than an empty string: empty glyphs would silently collide
/// downstream when archive filenames are derived.
pub fn decode_codepoints(unified: &str) -> Result<String, CompileError> {
    if unified.is_empty() {
        return Err(CompileError::InvalidCodepoint {
            token: String::new(),
            input: String::new(),
        });
    }

    let mut decoded = String::new();
    for token in unified.split('-') {
        let scalar = u32::from_str_radix(token, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| CompileError::InvalidCodepoint {
                token: token.to_string(),
                input: unified.to_string(),
            })?;
        decoded.push(scalar);
    }

    Ok(decoded)
}
