//! # Promptag Parser
//!
//! Parser for weighted prompt tag text such as
//! `(masterpiece:1.2), ((ultra-detail)), [1girl]`. This crate turns source
//! text into a list of [`TagAtom`]s.
//!
//! ## Usage
//!
//! ```
//! # use promptag_parser::{parse, ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let atoms = parse("(masterpiece:1.2), blue sky, [lowres]")?;
//!
//!     assert_eq!(atoms.len(), 3);
//!     assert_eq!(atoms[0].name(), "masterpiece");
//!     assert_eq!(atoms[0].bracket_weight(), 1);
//!     assert_eq!(atoms[2].bracket_weight(), -1);
//!     Ok(())
//! }
//! ```

pub mod error;

mod lexer;
mod parser;
#[cfg(test)]
mod parser_tests;
mod span;
mod tokens;

pub use error::ParseError;
pub use span::Span;

use log::{debug, trace};

use promptag_core::TagAtom;

/// Parse prompt text into a list of atoms.
///
/// This is the main entry point of the crate. Each call tokenizes and parses
/// its own input from scratch; no parser state outlives the call.
///
/// 1. **Tokenize** - Convert source text to positioned tokens
/// 2. **Parse** - Read groups, names and weights into atoms
///
/// Atoms keep their order of appearance. Empty segments (`a,,b`) produce no
/// atoms, so blank input yields an empty list.
///
/// # Errors
///
/// Returns a [`ParseError`] for the first malformation found: unbalanced or
/// mismatched brackets, a missing or non-numeric weight, a stray token, or a
/// trailing backslash.
///
/// # Example
///
/// ```
/// # use promptag_parser::parse;
/// assert!(parse("(tag").is_err());
/// assert_eq!(parse("tag:1.2").unwrap()[0].num_weight(), 1.2);
/// ```
pub fn parse(source: &str) -> Result<Vec<TagAtom>, ParseError> {
    // Step 1: Tokenize
    let tokens = lexer::tokenize(source)?;
    trace!(tokens = tokens.len(); "Tokenized prompt");

    // Step 2: Parse
    let atoms = parser::build_atoms(&tokens)?;
    debug!(atoms = atoms.len(); "Parsed prompt");

    Ok(atoms)
}
