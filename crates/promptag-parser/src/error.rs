//! Error and diagnostic system for the Promptag parser.
//!
//! A malformed prompt is reported as one [`Diagnostic`]: a message with an
//! [`ErrorCode`], labeled byte spans into the source and optional help text.
//! Reading stops at the first malformation, so a [`ParseError`] carries
//! exactly one diagnostic.
//!
//! # Example
//!
//! ```
//! # use promptag_parser::error::{Diagnostic, ErrorCode};
//! # use promptag_parser::Span;
//!
//! let close = Span::new(4..5);
//! let open = Span::new(0..1);
//!
//! let diag = Diagnostic::error("mismatched closing bracket `]`")
//!     .with_code(ErrorCode::E103)
//!     .with_label(close, "expected `)`")
//!     .with_secondary_label(open, "group opened here")
//!     .with_help("close the group with `)`");
//! ```

mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::{Label, LabelRole};
pub use parse_error::ParseError;
