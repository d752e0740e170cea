//! Configuration types for prompt formatting.
//!
//! All types implement [`serde::Deserialize`] for loading from external
//! sources. Missing sections and fields fall back to their defaults.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`FormatConfig`] - Controls the output layout of formatted prompts.
//!
//! # Example
//!
//! ```
//! # use promptag::{SerializeMode, config::AppConfig};
//! let config = AppConfig::default();
//! assert_eq!(config.format().mode(), SerializeMode::Split);
//! assert!(!config.format().underline());
//! ```

use serde::Deserialize;

use promptag_core::SerializeMode;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Format configuration section.
    #[serde(default)]
    format: FormatConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified format configuration.
    pub fn new(format: FormatConfig) -> Self {
        Self { format }
    }

    /// Returns the format configuration.
    pub fn format(&self) -> &FormatConfig {
        &self.format
    }
}

/// Output settings for formatted prompts.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct FormatConfig {
    /// Default [`SerializeMode`] when none is requested explicitly.
    #[serde(default)]
    mode: SerializeMode,

    /// Join words with underscores after serializing.
    #[serde(default)]
    underline: bool,
}

impl FormatConfig {
    /// Creates a new [`FormatConfig`].
    ///
    /// # Arguments
    ///
    /// * `mode` - Default layout of serialized prompts.
    /// * `underline` - Whether to apply [`underline`](crate::underline) to the output.
    pub fn new(mode: SerializeMode, underline: bool) -> Self {
        Self { mode, underline }
    }

    /// Returns the default [`SerializeMode`].
    pub fn mode(&self) -> SerializeMode {
        self.mode
    }

    /// Returns `true` if output words are joined with underscores.
    pub fn underline(&self) -> bool {
        self.underline
    }
}
