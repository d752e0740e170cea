//! Token definitions produced by the [`lexer`](super::lexer).

use std::fmt;

use crate::span::Span;

/// A lexical token of prompt text.
///
/// Text-bearing variants borrow from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'src> {
    /// A run of characters that are neither delimiters nor whitespace.
    Text(&'src str),
    /// The character following a backslash escape, e.g. `(` for `\(`.
    Escaped(&'src str),
    /// A run of whitespace, excluding line breaks.
    Whitespace(&'src str),
    Newline,
    Comma,
    Colon,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
}

impl Token<'_> {
    /// Returns `true` for tokens that may appear inside a tag name.
    pub fn is_name_part(&self) -> bool {
        matches!(
            self,
            Token::Text(_) | Token::Escaped(_) | Token::Whitespace(_)
        )
    }

    /// Returns `true` for tokens that separate two tags.
    pub fn is_separator(&self) -> bool {
        matches!(self, Token::Comma | Token::Newline)
    }

    /// Returns `true` for `)` and `]`.
    pub fn is_closing_bracket(&self) -> bool {
        matches!(self, Token::RightParen | Token::RightBracket)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Text(text) | Token::Whitespace(text) => write!(f, "`{text}`"),
            Token::Escaped(text) => write!(f, "`\\{text}`"),
            Token::Newline => write!(f, "line break"),
            Token::Comma => write!(f, "`,`"),
            Token::Colon => write!(f, "`:`"),
            Token::LeftParen => write!(f, "`(`"),
            Token::RightParen => write!(f, "`)`"),
            Token::LeftBracket => write!(f, "`[`"),
            Token::RightBracket => write!(f, "`]`"),
        }
    }
}

/// A token with its position in the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedToken<'src> {
    pub token: Token<'src>,
    pub span: Span,
}

impl<'src> PositionedToken<'src> {
    pub fn new(token: Token<'src>, span: Span) -> Self {
        Self { token, span }
    }
}
