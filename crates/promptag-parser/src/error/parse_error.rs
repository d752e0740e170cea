//! The [`ParseError`] type returned by [`parse`](crate::parse).

use std::fmt;

use crate::{
    error::{Diagnostic, ErrorCode},
    span::Span,
};

/// Error type for reading prompt text.
///
/// Wraps the diagnostic for the first malformation in the prompt. No atoms
/// are produced for a prompt that fails to parse.
#[derive(Debug, Clone)]
pub struct ParseError {
    diagnostic: Diagnostic,
}

impl ParseError {
    /// Create a parse error from its diagnostic.
    pub fn new(diagnostic: Diagnostic) -> Self {
        Self { diagnostic }
    }

    /// The diagnostic describing the malformation.
    pub fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }

    /// Shortcut for the diagnostic's error code.
    pub fn code(&self) -> Option<ErrorCode> {
        self.diagnostic.code()
    }

    /// Shortcut for the span of the offending token.
    pub fn span(&self) -> Option<Span> {
        self.diagnostic.primary_span()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.diagnostic, f)
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self::new(diagnostic)
    }
}
