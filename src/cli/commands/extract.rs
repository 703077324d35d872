use anyhow::Result;

use super::super::args::ExtractCommand;
use super::{CommandResult, CommandSummary, ExtractSummary};
use crate::core::ExtractContext;

/// Rewrite the translations file so it holds exactly the identifiers in use.
///
/// The file is written only after every source file was scanned, and always
/// rewritten even when nothing changed so its formatting stays canonical.
pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let ctx = ExtractContext::new(&cmd.common)?;
    let result = ctx.reconcile();

    result.catalog.save(&ctx.catalog_path)?;

    Ok(CommandResult {
        summary: CommandSummary::Extract(ExtractSummary {
            catalog_path: ctx.catalog_path,
            entry_count: result.catalog.len(),
            diff: result.diff,
        }),
        source_files_checked: ctx.files.len(),
    })
}
