//! Error codes for the Promptag diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Lexer errors
//! - `E1xx` - Grammar errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Lexer Errors (E0xx)
    // =========================================================================
    /// Unterminated escape.
    ///
    /// The input ends with a backslash that has nothing left to escape.
    E001,

    // =========================================================================
    // Grammar Errors (E1xx)
    // =========================================================================
    /// Unexpected token.
    ///
    /// A token appeared where the grammar does not allow it, such as a
    /// stray `:` or two tags without a `,` between them.
    E100,

    /// Unclosed bracket.
    ///
    /// A `(` or `[` group reaches the end of input without its closing bracket.
    E101,

    /// Unmatched closing bracket.
    ///
    /// A `)` or `]` appears without an open group.
    E102,

    /// Mismatched closing bracket.
    ///
    /// A group opened with `(` is closed with `]`, or the other way round.
    E103,

    /// Invalid weight.
    ///
    /// The text after `:` is not a decimal number such as `1.2` or `-0.5`.
    E104,

    /// Missing weight.
    ///
    /// A `:` is followed by nothing but a separator, bracket or end of input.
    E105,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexer errors
            ErrorCode::E001 => "E001",
            // Grammar errors
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E104 => "E104",
            ErrorCode::E105 => "E105",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            // Lexer errors
            ErrorCode::E001 => "unterminated escape",
            // Grammar errors
            ErrorCode::E100 => "unexpected token",
            ErrorCode::E101 => "unclosed bracket",
            ErrorCode::E102 => "unmatched closing bracket",
            ErrorCode::E103 => "mismatched closing bracket",
            ErrorCode::E104 => "invalid weight",
            ErrorCode::E105 => "missing weight",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
