//! Command-line argument definitions for the Promptag CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the output layout,
//! configuration file selection, and logging verbosity.

use clap::Parser;

use promptag::SerializeMode;

/// Command-line arguments for the Promptag formatter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input prompt file, or `-` for standard input
    #[arg(help = "Path to the input file, or - for stdin")]
    pub input: String,

    /// Path to the output file; standard output when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output layout (split, zip); overrides the configured default
    #[arg(short, long)]
    pub mode: Option<SerializeMode>,

    /// Join words with underscores in the output
    #[arg(short, long)]
    pub underline: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
