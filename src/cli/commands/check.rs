use anyhow::Result;

use super::super::args::CheckCommand;
use super::{CheckSummary, CommandResult, CommandSummary};
use crate::core::ExtractContext;

/// Compare the identifiers used in the source tree with the translations file.
///
/// Never writes the translations file.
pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = ExtractContext::new(&cmd.common)?;
    let diff = ctx.diff();

    Ok(CommandResult {
        summary: CommandSummary::Check(CheckSummary {
            catalog_path: ctx.catalog_path,
            diff,
        }),
        source_files_checked: ctx.files.len(),
    })
}
