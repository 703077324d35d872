use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::core::CatalogDiff;

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Check(CheckSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub catalog_path: PathBuf,
    /// Entries in the rewritten translations file.
    pub entry_count: usize,
    /// Identifiers added and removed while rewriting.
    pub diff: CatalogDiff,
}

#[derive(Debug)]
pub struct CheckSummary {
    pub catalog_path: PathBuf,
    pub diff: CatalogDiff,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    /// Set when the config file could not be created.
    pub error: Option<String>,
}

/// Result of running gotrans commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Number of Go source files that were scanned.
    pub source_files_checked: usize,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Extract(_) => ExitStatus::Success,
            CommandSummary::Check(summary) if summary.diff.is_empty() => ExitStatus::Success,
            CommandSummary::Check(_) => ExitStatus::Failure,
            CommandSummary::Init(summary) if summary.error.is_none() => ExitStatus::Success,
            CommandSummary::Init(_) => ExitStatus::Failure,
        }
    }
}
