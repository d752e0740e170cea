//! Promptag - Round-trippable conversion between prompt text and weighted tags.
//!
//! Prompt text such as `(masterpiece:1.2), ((ultra-detail)), [lowres]` is
//! parsed into a list of [`TagAtom`]s and written back out in a canonical
//! layout, either one tag per line ([`SerializeMode::Split`]) or on a single
//! line ([`SerializeMode::Zip`]).
//!
//! # Example
//!
//! ```
//! use promptag::{SerializeMode, parse, serialize};
//!
//! let atoms = parse("masterpiece:1.2,((best quality)) , [lowres]")?;
//! assert_eq!(
//!     serialize(&atoms, SerializeMode::Zip),
//!     "masterpiece:1.2, ((best quality)), [lowres]"
//! );
//! # Ok::<(), promptag::ParseError>(())
//! ```

pub mod config;

mod error;
mod normalize;
mod serialize;

pub use promptag_core::{SerializeMode, TagAtom, atom, mode};
pub use promptag_parser::{ParseError, parse};

pub use error::PromptError;
pub use normalize::underline;
pub use serialize::serialize;

use log::{debug, info, trace};

use config::AppConfig;

/// Formatter for prompt text.
///
/// Bundles parsing and serialization with an [`AppConfig`] that supplies the
/// default output layout.
///
/// # Examples
///
/// ```
/// use promptag::{SerializeMode, TagFormatter, config::AppConfig};
///
/// let formatter = TagFormatter::new(AppConfig::default());
///
/// // Parse source to atoms
/// let atoms = formatter.parse("a,b , (c)")
///     .expect("Failed to parse");
///
/// // Write atoms back as text
/// assert_eq!(formatter.serialize(&atoms, SerializeMode::Zip), "a, b, (c)");
///
/// // Or do both at once with the configured layout
/// assert_eq!(formatter.format("a,b", None).expect("Failed to format"), "a,\nb");
/// ```
#[derive(Debug, Default)]
pub struct TagFormatter {
    config: AppConfig,
}

impl TagFormatter {
    /// Create a new formatter with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including format settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration of this formatter.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse prompt text into atoms.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Parse`] carrying the diagnostics and the source
    /// text when the prompt is malformed.
    pub fn parse(&self, source: &str) -> Result<Vec<TagAtom>, PromptError> {
        debug!(source_len = source.len(); "Parsing prompt");

        let atoms = parse(source).map_err(|err| PromptError::new_parse_error(err, source))?;

        trace!(atoms:?; "Parsed atoms");
        Ok(atoms)
    }

    /// Render atoms as prompt text in the given layout.
    pub fn serialize(&self, atoms: &[TagAtom], mode: SerializeMode) -> String {
        serialize(atoms, mode)
    }

    /// Parse prompt text and write it back in canonical form.
    ///
    /// Uses `mode` when given, otherwise the configured default layout. The
    /// result is passed through [`underline`] when the configuration asks
    /// for it.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Parse`] when the prompt is malformed.
    pub fn format(&self, source: &str, mode: Option<SerializeMode>) -> Result<String, PromptError> {
        let mode = mode.unwrap_or_else(|| self.config.format().mode());
        let atoms = self.parse(source)?;

        let mut text = self.serialize(&atoms, mode);
        if self.config.format().underline() {
            text = underline(&text);
        }

        info!(atoms = atoms.len(), mode:% = mode; "Prompt formatted");
        Ok(text)
    }
}
