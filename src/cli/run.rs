use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, check::check, extract::extract, init::init},
};

/// Dispatch to the command handler for the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` describing what the command found or changed
/// - `Err` if the command fails (e.g., config invalid, parse error, missing translations file)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
