//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow gotrans to be used as a library.
//! `Added:` and `Removed:` lines are printed uncolored so CI logs can be grepped.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CheckSummary, CommandResult, CommandSummary, ExtractSummary, InitSummary};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result to stdout and stderr.
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Print a command result to custom writers.
///
/// Useful for testing or redirecting output.
pub fn print_to<O: Write, E: Write>(result: &CommandResult, verbose: bool, out: &mut O, err: &mut E) {
    match &result.summary {
        CommandSummary::Extract(summary) => {
            print_extract(summary, result.source_files_checked, verbose, out)
        }
        CommandSummary::Check(summary) => {
            print_check(summary, result.source_files_checked, out, err)
        }
        CommandSummary::Init(summary) => print_init(summary, out, err),
    }
}

fn print_extract<W: Write>(summary: &ExtractSummary, source_files: usize, verbose: bool, out: &mut W) {
    if verbose {
        for line in summary.diff.lines() {
            let _ = writeln!(out, "{}", line);
        }
    }

    let _ = writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Wrote {} {} to {} ({} added, {} removed) from {} source {}",
            summary.entry_count,
            plural(summary.entry_count, "translation", "translations"),
            summary.catalog_path.display(),
            summary.diff.added.len(),
            summary.diff.removed.len(),
            source_files,
            plural(source_files, "file", "files"),
        )
        .green()
    );
}

fn print_check<O: Write, E: Write>(summary: &CheckSummary, source_files: usize, out: &mut O, err: &mut E) {
    if summary.diff.is_empty() {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} source {} - {} is up to date",
                source_files,
                plural(source_files, "file", "files"),
                summary.catalog_path.display()
            )
            .green()
        );
        return;
    }

    for line in summary.diff.lines() {
        let _ = writeln!(out, "{}", line);
    }

    let _ = writeln!(
        err,
        "{} {} translations file out of date: {} added, {} removed (run {} to update {})",
        FAILURE_MARK.red(),
        "error:".bold().red(),
        summary.diff.added.len(),
        summary.diff.removed.len(),
        "gotrans extract".cyan(),
        summary.catalog_path.display()
    );
}

fn print_init<O: Write, E: Write>(summary: &InitSummary, out: &mut O, err: &mut E) {
    match &summary.error {
        Some(error) => {
            let _ = writeln!(err, "{} {}", "error:".bold().red(), error);
        }
        None => {
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", summary.path.display()).green()
            );
        }
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
