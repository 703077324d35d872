use std::process::ExitCode;

use clap::Parser;
use gotrans::cli::{Arguments, ExitStatus};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_logging(args.verbose());

    match gotrans::cli::run_cli(args) {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}

/// Diagnostics go to stderr so stdout stays reserved for the report.
/// `RUST_LOG` overrides the level picked from `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "gotrans=debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
