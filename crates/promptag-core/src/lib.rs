//! Promptag Core Types
//!
//! This crate provides the foundational types shared by the Promptag parser,
//! serializer and command-line tool. It includes:
//!
//! - **Atoms**: Weighted prompt tags ([`atom::TagAtom`])
//! - **Modes**: Output layouts for serialized prompts ([`mode::SerializeMode`])

pub mod atom;
pub mod mode;

pub use atom::TagAtom;
pub use mode::SerializeMode;
