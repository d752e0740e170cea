//! CLI logic for the Promptag formatter.
//!
//! Reads prompt text, rewrites it in canonical form and writes the result.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Read, Write},
};

use log::info;

use promptag::{
    PromptError, TagFormatter,
    config::{AppConfig, FormatConfig},
};

/// Input path that reads from standard input.
const STDIN_PATH: &str = "-";

/// Run the Promptag CLI application
///
/// Formats the input prompt with the configured layout and writes the result
/// to the output file, or to standard output when no output is given.
///
/// # Errors
///
/// Returns `PromptError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
pub fn run(args: &Args) -> Result<(), PromptError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Formatting prompt"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let app_config = AppConfig::new(FormatConfig::new(
        app_config.format().mode(),
        app_config.format().underline() || args.underline,
    ));

    let source = read_source(&args.input)?;

    let formatter = TagFormatter::new(app_config);
    let mut text = formatter.format(&source, args.mode)?;
    text.push('\n');

    match &args.output {
        Some(path) => {
            fs::write(path, text)?;
            info!(output_file = path.as_str(); "Prompt written");
        }
        None => io::stdout().lock().write_all(text.as_bytes())?,
    }

    Ok(())
}

fn read_source(input: &str) -> Result<String, PromptError> {
    if input == STDIN_PATH {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }

    Ok(fs::read_to_string(input)?)
}
