//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Rewrite the translations file from the identifiers used in the source tree
//! - `check`: Report identifiers added or removed since the translations file was written
//! - `init`: Initialize a gotrans configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by `extract` and `check`.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Path to the folder with the server source code (overrides config file)
    #[arg(long, value_name = "DIR")]
    pub source_dir: Option<PathBuf>,

    /// Path to the folder with the enterprise source code (overrides config file)
    #[arg(long, value_name = "DIR")]
    pub enterprise_dir: Option<PathBuf>,

    /// Translations file (default: <source-dir>/i18n/en.json)
    #[arg(long, value_name = "FILE")]
    pub catalog_path: Option<PathBuf>,

    /// Keep going when the translations file is not valid JSON, using whatever entries decode
    #[arg(long)]
    pub allow_malformed_catalog: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translations from the source code and rewrite the translations file
    Extract(ExtractCommand),
    /// Compare translations used in the source code with the translations file
    Check(CheckCommand),
    /// Initialize a new .gotransrc.json configuration file
    Init,
}
