//! Parser for prompt tokens.
//!
//! This module turns the token stream from the [`lexer`](super::lexer) into a
//! flat list of [`TagAtom`]s. The public entry point is [`build_atoms`].
//!
//! Grammar:
//!
//! ```text
//! Document  := TagList EOF
//! TagList   := Segment (Separator Segment)*
//! Segment   := Ws* Tag? Ws*
//! Separator := ',' | Newline
//! Tag       := Group | Weighted
//! Group     := '(' TagList ')' | '[' TagList ']'
//! Weighted  := Name (':' Ws* Number)?
//! ```
//!
//! Groups nest to any depth. Every atom inside a group gets the group's
//! bracket delta added to its bracket weight. Groups are tracked on an
//! explicit stack of open brackets, so nesting depth is bounded by memory
//! rather than by the call stack.

use winnow::{
    Parser as _,
    ascii::{digit0, digit1},
    combinator::{alt, opt, repeat},
    error::{AddContext, ContextError, ErrMode, ModalResult},
    stream::{Stream, TokenSlice},
    token::{any, one_of},
};

use promptag_core::TagAtom;

use crate::{
    error::{Diagnostic, ErrorCode},
    span::Span,
    tokens::{PositionedToken, Token},
};

/// Context type for parser errors
#[derive(Debug, Clone)]
pub(crate) enum Context {
    /// Description of what is currently being parsed
    Label(&'static str),
    /// A fully described failure, reported as-is
    Diagnostic(Diagnostic),
}

type Input<'src> = PromptTokenSlice<'src>;
type IResult<O> = std::result::Result<O, ErrMode<ContextError<Context>>>;
/// Type alias for winnow TokenSlice with our positioned tokens
type PromptTokenSlice<'src> = TokenSlice<'src, PositionedToken<'src>>;

const WEIGHT_HELP: &str = "write the weight as a decimal number, e.g. `tag:1.2`";

/// Kind of an emphasis group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bracket {
    /// `( ... )`, raises the bracket weight
    Paren,
    /// `[ ... ]`, lowers the bracket weight
    Square,
}

impl Bracket {
    fn opening(token: &Token<'_>) -> Option<Self> {
        match token {
            Token::LeftParen => Some(Bracket::Paren),
            Token::LeftBracket => Some(Bracket::Square),
            _ => None,
        }
    }

    fn closing(token: &Token<'_>) -> Option<Self> {
        match token {
            Token::RightParen => Some(Bracket::Paren),
            Token::RightBracket => Some(Bracket::Square),
            _ => None,
        }
    }

    fn delta(self) -> i32 {
        match self {
            Bracket::Paren => 1,
            Bracket::Square => -1,
        }
    }

    fn open_str(self) -> &'static str {
        match self {
            Bracket::Paren => "(",
            Bracket::Square => "[",
        }
    }

    fn close_str(self) -> &'static str {
        match self {
            Bracket::Paren => ")",
            Bracket::Square => "]",
        }
    }
}

/// Create a Cut error carrying a complete diagnostic
fn fail(input: &Input<'_>, diagnostic: Diagnostic) -> ErrMode<ContextError<Context>> {
    ErrMode::Cut(ContextError::new().add_context(
        input,
        &input.checkpoint(),
        Context::Diagnostic(diagnostic),
    ))
}

/// Parse one whitespace token
fn whitespace<'src>(input: &mut Input<'src>) -> IResult<()> {
    any.verify(|token: &PositionedToken<'_>| matches!(token.token, Token::Whitespace(_)))
        .void()
        .parse_next(input)
}

/// Parse zero or more whitespace tokens
fn ws0<'src>(input: &mut Input<'src>) -> IResult<()> {
    repeat(0.., whitespace).parse_next(input)
}

/// Parse a tag name
///
/// Collects text, escapes and interior whitespace, then trims the result.
/// Backtracks if the tokens hold whitespace only.
fn plain_name<'src>(input: &mut Input<'src>) -> IResult<String> {
    let pieces: Vec<&PositionedToken<'src>> = repeat(
        1..,
        any.verify(|token: &PositionedToken<'_>| token.token.is_name_part()),
    )
    .context(Context::Label("tag name"))
    .parse_next(input)?;

    let mut name = String::new();
    let mut has_text = false;
    for piece in &pieces {
        match &piece.token {
            Token::Text(text) | Token::Escaped(text) => {
                has_text = true;
                name.push_str(text);
            }
            Token::Whitespace(space) => name.push_str(space),
            _ => {}
        }
    }

    if !has_text {
        return Err(ErrMode::Backtrack(ContextError::new()));
    }

    Ok(name.trim().to_string())
}

/// Recognize a decimal weight literal: `[+-]? (digits ('.' digits?)? | '.' digits)`
fn decimal<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    (
        opt(one_of(['+', '-'])),
        alt(((digit1, opt(('.', digit0))).void(), ('.', digit1).void())),
    )
        .take()
        .parse_next(input)
}

/// Read a weight literal, accepting only finite decimal numbers.
pub(crate) fn weight_literal(text: &str) -> Option<f64> {
    decimal
        .parse(text)
        .ok()
        .and_then(|literal| literal.parse::<f64>().ok())
        .filter(|weight| weight.is_finite())
}

/// Parse an optional `:weight` suffix
fn weight_suffix<'src>(input: &mut Input<'src>) -> IResult<Option<f64>> {
    let colon = opt(any.verify(|token: &PositionedToken<'_>| matches!(token.token, Token::Colon)))
        .parse_next(input)?;
    let Some(colon) = colon else {
        return Ok(None);
    };

    ws0.parse_next(input)?;

    let Some(next) = input.peek_token() else {
        return Err(fail(input, missing_weight(colon.span)));
    };

    match &next.token {
        Token::Text(text) => match weight_literal(text) {
            Some(weight) => {
                input.next_token();
                Ok(Some(weight))
            }
            None => Err(fail(input, invalid_weight(&next.token, next.span, colon.span))),
        },
        token if token.is_separator() || token.is_closing_bracket() => {
            Err(fail(input, missing_weight(colon.span)))
        }
        other => Err(fail(input, invalid_weight(other, next.span, colon.span))),
    }
}

/// Parse a named tag with an optional weight: `name` or `name:1.2`
fn weighted<'src>(input: &mut Input<'src>) -> IResult<TagAtom> {
    let name = plain_name.parse_next(input)?;
    let num_weight = weight_suffix.parse_next(input)?;

    Ok(match num_weight {
        Some(weight) => TagAtom::new(name).with_num_weight(weight),
        None => TagAtom::new(name),
    })
}

/// Brackets opened but not yet closed, innermost last.
#[derive(Debug, Default)]
struct OpenGroups {
    brackets: Vec<(Bracket, Span)>,
    /// Sum of the deltas of all open brackets
    depth: i32,
}

impl OpenGroups {
    fn open(&mut self, bracket: Bracket, span: Span) {
        self.brackets.push((bracket, span));
        self.depth = self.depth.saturating_add(bracket.delta());
    }

    /// Close the innermost group with `token`.
    fn close(&mut self, closing: Bracket, token: &PositionedToken<'_>) -> Result<(), Diagnostic> {
        match self.brackets.last().copied() {
            Some((bracket, _)) if bracket == closing => {
                self.brackets.pop();
                self.depth = self.depth.saturating_sub(bracket.delta());
                Ok(())
            }
            Some((bracket, open_span)) => {
                Err(mismatched_bracket(bracket, open_span, closing, token.span))
            }
            None => Err(unexpected_token(token)),
        }
    }

    fn depth(&self) -> i32 {
        self.depth
    }

    fn innermost(&self) -> Option<(Bracket, Span)> {
        self.brackets.last().copied()
    }
}

/// Parse complete prompt text
///
/// Reads one token at a time. After a tag or a closed group only a
/// separator, a closing bracket or the end of input may follow.
fn document<'src>(input: &mut Input<'src>) -> IResult<Vec<TagAtom>> {
    let mut atoms = Vec::new();
    let mut groups = OpenGroups::default();
    let mut after_tag = false;

    loop {
        ws0.parse_next(input)?;
        let Some(next) = input.peek_token() else {
            break;
        };

        if next.token.is_separator() {
            input.next_token();
            after_tag = false;
        } else if let Some(closing) = Bracket::closing(&next.token) {
            if let Err(diagnostic) = groups.close(closing, next) {
                return Err(fail(input, diagnostic));
            }
            input.next_token();
            after_tag = true;
        } else if after_tag {
            return Err(fail(input, unexpected_token(next)));
        } else if let Some(bracket) = Bracket::opening(&next.token) {
            groups.open(bracket, next.span);
            input.next_token();
        } else if next.token.is_name_part() {
            let atom = weighted.parse_next(input)?;
            atoms.push(atom.with_bracket_weight(groups.depth()));
            after_tag = true;
        } else {
            return Err(fail(input, unexpected_token(next)));
        }
    }

    match groups.innermost() {
        Some((bracket, open_span)) => Err(fail(input, unclosed_bracket(bracket, open_span))),
        None => Ok(atoms),
    }
}

fn unexpected_token(token: &PositionedToken<'_>) -> Diagnostic {
    match &token.token {
        Token::Colon => Diagnostic::error("unexpected `:`")
            .with_code(ErrorCode::E100)
            .with_label(token.span, "no tag name before this weight")
            .with_help("a weight follows the tag name directly, e.g. `(tag:1.2)`"),
        Token::RightParen | Token::RightBracket => {
            Diagnostic::error(format!("unmatched closing bracket {}", token.token))
                .with_code(ErrorCode::E102)
                .with_label(token.span, "no open group to close")
                .with_help("remove it, or add the matching opening bracket")
        }
        other => Diagnostic::error(format!("expected `,` before {other}"))
            .with_code(ErrorCode::E100)
            .with_label(token.span, "unexpected token")
            .with_help("separate tags with `,`"),
    }
}

fn unclosed_bracket(bracket: Bracket, open_span: Span) -> Diagnostic {
    Diagnostic::error(format!("unclosed bracket `{}`", bracket.open_str()))
        .with_code(ErrorCode::E101)
        .with_label(open_span, "this group is never closed")
        .with_help(format!("add `{}` after the last tag", bracket.close_str()))
}

fn mismatched_bracket(
    bracket: Bracket,
    open_span: Span,
    closing: Bracket,
    close_span: Span,
) -> Diagnostic {
    Diagnostic::error(format!(
        "mismatched closing bracket `{}`",
        closing.close_str()
    ))
    .with_code(ErrorCode::E103)
    .with_label(close_span, format!("expected `{}`", bracket.close_str()))
    .with_secondary_label(open_span, "group opened here")
    .with_help(format!("close the group with `{}`", bracket.close_str()))
}

fn missing_weight(colon_span: Span) -> Diagnostic {
    Diagnostic::error("missing weight after `:`")
        .with_code(ErrorCode::E105)
        .with_label(colon_span, "expected a number after this `:`")
        .with_help(WEIGHT_HELP)
}

fn invalid_weight(found: &Token<'_>, span: Span, colon_span: Span) -> Diagnostic {
    Diagnostic::error(format!("invalid weight {found}"))
        .with_code(ErrorCode::E104)
        .with_label(span, "not a number")
        .with_secondary_label(colon_span, "weight starts here")
        .with_help(WEIGHT_HELP)
}

/// Convert winnow errors to a diagnostic
///
/// Failures raised through [`fail`] carry their own diagnostic. Anything else
/// is reported as an unexpected token at the position where parsing stopped.
fn convert_error(
    error: ErrMode<ContextError<Context>>,
    tokens: &[PositionedToken],
    current_remaining: usize,
) -> Diagnostic {
    let context_error = match error {
        ErrMode::Backtrack(e) | ErrMode::Cut(e) => e,
        ErrMode::Incomplete(_) => ContextError::new(),
    };

    if let Some(diagnostic) = context_error.context().find_map(|ctx| match ctx {
        Context::Diagnostic(diagnostic) => Some(diagnostic.clone()),
        Context::Label(_) => None,
    }) {
        return diagnostic;
    }

    let contexts: Vec<String> = context_error
        .context()
        .filter_map(|ctx| match ctx {
            Context::Label(label) => Some(format!("expected {label}")),
            Context::Diagnostic(_) => None,
        })
        .collect();

    let message = if contexts.is_empty() {
        "unexpected token or end of input".to_string()
    } else {
        contexts.join(" → ")
    };

    let offset = tokens.len().saturating_sub(current_remaining);
    let span = tokens
        .get(offset)
        .or_else(|| tokens.last())
        .map(|token| token.span)
        .unwrap_or_default();

    Diagnostic::error(format!("unexpected token: {message}"))
        .with_code(ErrorCode::E100)
        .with_label(span, "unexpected token")
        .with_help("check the tag syntax around this position")
}

/// Build the atom list from tokens
///
/// Stops at the first malformation and reports it as a single diagnostic.
pub fn build_atoms<'src>(
    tokens: &'src [PositionedToken<'src>],
) -> Result<Vec<TagAtom>, Diagnostic> {
    let mut token_slice = TokenSlice::new(tokens);

    match document.parse_next(&mut token_slice) {
        Ok(atoms) => Ok(atoms),
        Err(e) => {
            let current_remaining = token_slice.eof_offset();
            Err(convert_error(e, tokens, current_remaining))
        }
    }
}
