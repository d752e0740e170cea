//! The core diagnostic type for the Promptag error system.
//!
//! A [`Diagnostic`] describes one malformation in a prompt with an optional
//! error code, labeled source spans, and help text.

use std::fmt;

use crate::{
    error::{
        error_code::ErrorCode,
        label::{Label, LabelRole},
    },
    span::Span,
};

/// A diagnostic message with source location information.
///
/// # Example
///
/// ```text
/// error[E103]: mismatched closing bracket `]`
///   --> prompt.txt:1:5
///    |
///  1 | (tag], sky
///    | -   ^ expected `)`
///    | |
///    | group opened here
///    |
///    = help: close the group with `)`
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use promptag_parser::error::{Diagnostic, ErrorCode};
    /// # use promptag_parser::Span;
    ///
    /// let diag = Diagnostic::error("invalid weight `high`")
    ///     .with_code(ErrorCode::E104)
    ///     .with_label(Span::new(4..8), "not a number")
    ///     .with_help("write the weight as a decimal number, e.g. `tag:1.2`");
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }

    /// Get the error code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the span of the first primary label, if any.
    pub fn primary_span(&self) -> Option<Span> {
        self.labels
            .iter()
            .find(|label| label.is_primary())
            .map(Label::span)
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a primary label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::new(LabelRole::Offending, span, message));
        self
    }

    /// Add a secondary label to this diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::new(LabelRole::Context, span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E001]: message" or "error: message"
        write!(f, "error")?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}
