//! Lexical analyzer for prompt text.
//!
//! The lexer converts source text into a stream of [`Token`]s for parsing:
//! structural delimiters, whitespace runs, line breaks, backslash escapes
//! and plain text runs. The public entry point is [`tokenize`].

use winnow::{
    Parser as _,
    combinator::{alt, cut_err, peek},
    error::ModalResult,
    stream::{LocatingSlice, Location, Stream},
    token::{any, one_of, take_while},
};

use crate::{
    error::{Diagnostic, ErrorCode, ParseError},
    span::Span,
    tokens::{PositionedToken, Token},
};

/// Characters with structural meaning in prompt text.
const DELIMITERS: [char; 6] = [',', ':', '(', ')', '[', ']'];

/// Characters that lose their structural meaning after a backslash.
pub(crate) const ESCAPABLE: [char; 7] = [',', ':', '(', ')', '[', ']', '\\'];

type Input<'a> = LocatingSlice<&'a str>;
type IResult<'a, O> = ModalResult<O>;

/// Parse a backslash escape.
///
/// `\` followed by a delimiter or another backslash yields [`Token::Escaped`].
/// Any other following character keeps the backslash as literal text. A
/// backslash at the end of input is a cut error.
fn escape<'a>(input: &mut Input<'a>) -> IResult<'a, Token<'a>> {
    '\\'.parse_next(input)?;

    cut_err(alt((
        one_of(ESCAPABLE).take().map(Token::Escaped),
        peek(any).value(Token::Text("\\")),
    )))
    .parse_next(input)
}

/// Parse a run of tag text
fn text<'a>(input: &mut Input<'a>) -> IResult<'a, Token<'a>> {
    take_while(1.., |c: char| {
        !c.is_whitespace() && c != '\\' && !DELIMITERS.contains(&c)
    })
    .map(Token::Text)
    .parse_next(input)
}

/// Parse single character delimiters
fn delimiter<'a>(input: &mut Input<'a>) -> IResult<'a, Token<'a>> {
    alt((
        ','.value(Token::Comma),
        ':'.value(Token::Colon),
        '('.value(Token::LeftParen),
        ')'.value(Token::RightParen),
        '['.value(Token::LeftBracket),
        ']'.value(Token::RightBracket),
    ))
    .parse_next(input)
}

/// Parse whitespace (spaces, tabs, etc. but not newlines)
fn whitespace<'a>(input: &mut Input<'a>) -> IResult<'a, Token<'a>> {
    take_while(1.., |c: char| c.is_whitespace() && c != '\n')
        .map(Token::Whitespace)
        .parse_next(input)
}

/// Parse newline
fn newline<'a>(input: &mut Input<'a>) -> IResult<'a, Token<'a>> {
    '\n'.value(Token::Newline).parse_next(input)
}

/// Parse a single token with position tracking
fn positioned_token<'a>(input: &mut Input<'a>) -> IResult<'a, PositionedToken<'a>> {
    let start_pos = input.current_token_start();

    let token = alt((
        escape,     // Must come before text
        newline,    // Must come before whitespace
        whitespace, // General whitespace
        delimiter,  // Structural characters
        text,       // Everything else
    ))
    .parse_next(input)?;

    let end_pos = input.current_token_start();
    let span = Span::new(start_pos..end_pos);

    Ok(PositionedToken::new(token, span))
}

fn unterminated_escape(span: Span) -> Diagnostic {
    Diagnostic::error("unterminated escape")
        .with_code(ErrorCode::E001)
        .with_label(span, "nothing left to escape")
        .with_help("write `\\\\` for a literal backslash")
}

/// Split prompt text into positioned tokens.
///
/// Every character belongs to some token, except a backslash at the very
/// end of the input, which is reported as E001.
pub fn tokenize(source: &str) -> Result<Vec<PositionedToken<'_>>, ParseError> {
    let mut input = LocatingSlice::new(source);
    let mut tokens = Vec::new();

    while !input.is_empty() {
        let start = input.current_token_start();
        match positioned_token(&mut input) {
            Ok(token) => tokens.push(token),
            // The escape at `start` reached the end of input
            Err(_) => return Err(unterminated_escape(Span::new(start..source.len())).into()),
        }
    }

    Ok(tokens)
}
