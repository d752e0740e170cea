//! Error types for Promptag operations.
//!
//! This module provides the main error type [`PromptError`] which wraps
//! the error conditions that can occur while formatting prompts.

use std::io;

use thiserror::Error;

use promptag_parser::error::ParseError;

/// The main error type for Promptag operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text next to the structured parse
/// error, so that callers can render labeled source snippets.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PromptError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
