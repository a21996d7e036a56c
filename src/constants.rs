//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and fixed snippet pack conventions.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Emojipack";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "emojipack";

/// Fixed name of the manifest file inside a snippet pack archive.
pub const MANIFEST_FILENAME: &str = "info.plist";

/// Default keyword prefix applied by the destination application at lookup time.
pub const DEFAULT_KEYWORD_PREFIX: &str = ";";

/// Default keyword suffix applied by the destination application at lookup time.
pub const DEFAULT_KEYWORD_SUFFIX: &str = "";

/// Default output filename for a compiled snippet pack.
pub const DEFAULT_PACK_FILENAME: &str = "Emoji Pack.alfredsnippets";
