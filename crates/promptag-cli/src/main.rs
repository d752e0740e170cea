//! `promptag` binary: formats a prompt file and reports failures with miette.

use std::{process::ExitCode, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};
use miette::GraphicalReportHandler;

use promptag::PromptError;
use promptag_cli::{Args, error_adapter::to_reportable};

fn main() -> ExitCode {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logging(&args.log_level);
    debug!(args:?; "Parsed arguments");

    match promptag_cli::run(&args) {
        Ok(()) => {
            info!(input = args.input; "Prompt formatted");
            ExitCode::SUCCESS
        }
        Err(err) => {
            if let PromptError::Parse { err: parse_err, .. } = &err {
                error!(code:? = parse_err.code(), span:? = parse_err.span(); "Prompt rejected");
            }
            // The report goes to stderr even with logging turned off
            eprintln!("{}", render(&err));
            ExitCode::FAILURE
        }
    }
}

/// Install `env_logger`, falling back to `warn` for an unknown level name.
fn init_logging(level: &str) {
    let filter = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Unknown log level `{level}`, logging at `warn`");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(filter)
        .init();
}

/// Render an error as a graphical miette report, or as plain text when the
/// report cannot be drawn.
fn render(err: &PromptError) -> String {
    let reportable = to_reportable(err);
    let mut report = String::new();
    match GraphicalReportHandler::new().render_report(&mut report, &reportable) {
        Ok(()) => report,
        Err(_) => reportable.to_string(),
    }
}
