//! Emoji Snippet Pack Library
//!
//! This library provides the core functionality for the emojipack CLI:
//! parsing raw emoji datasets, compiling them into keyword-expansion
//! snippets, and packaging the result as a deterministic archive.

// Module declarations
pub mod cli;
pub mod compiler;
pub mod config;
pub mod constants;
pub mod models;
pub mod packager;
pub mod parser;
