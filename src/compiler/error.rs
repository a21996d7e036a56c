//! Error taxonomy for the snippet compilation pipeline.

use std::fmt;

/// Errors raised while compiling emoji records into a snippet pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// A codepoint string was empty, or contained a token that is not a
    /// valid Unicode scalar value.
    InvalidCodepoint {
        /// The offending token, or the empty string for empty input
        token: String,
        /// The whole codepoint string it came from
        input: String,
    },
    /// Two snippets would map to the same filename inside the archive.
    ///
    /// This happens when two emoji share a shortcode, which a well-formed
    /// dataset never contains. Silently dropping one would corrupt search
    /// coverage without any signal, so this aborts the whole compilation.
    DuplicateFilename {
        /// The colliding archive filename
        filename: String,
        /// UID of the snippet that claimed the filename first
        first_uid: String,
        /// UID of the snippet that collided with it
        second_uid: String,
    },
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCodepoint { token, input } => {
                if input.is_empty() {
                    write!(f, "Empty codepoint string")
                } else {
                    write!(f, "Invalid Unicode codepoint '{token}' in '{input}'")
                }
            }
            Self::DuplicateFilename {
                filename,
                first_uid,
                second_uid,
            } => write!(
                f,
                "Duplicate archive filename '{filename}' (claimed by '{first_uid}', collided with '{second_uid}')"
            ),
        }
    }
}

impl std::error::Error for CompileError {}
