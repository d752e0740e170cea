//! Labeled source spans for diagnostic messages.

use crate::span::Span;

/// What a label points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelRole {
    /// The token that broke the prompt, e.g. a stray `)` or a bad weight.
    Offending,
    /// Related context, e.g. the bracket that opened the group.
    Context,
}

/// A message attached to a byte span of the prompt.
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    role: LabelRole,
}

impl Label {
    /// Create a label with the given role.
    pub fn new(role: LabelRole, span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            role,
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn role(&self) -> LabelRole {
        self.role
    }

    /// Returns `true` for the label marking the offending token.
    pub fn is_primary(&self) -> bool {
        self.role == LabelRole::Offending
    }

    /// Returns `true` for context labels.
    pub fn is_secondary(&self) -> bool {
        self.role == LabelRole::Context
    }
}
