//! Output formatting.
//!
//! The boundary table goes to stdout so it can be redirected straight into
//! a source file. Everything else (progress, warnings, summary) goes to
//! stderr.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use super::run::RunResult;
use crate::core::{BoundaryList, parsers::MessageScanWarning};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Render `boundaries` as rows of `columns` hex literals.
///
/// Every entry is printed with at least four hex digits, entries are
/// separated by `", "` and each row ends with a trailing comma, so the
/// output can be pasted into an array initializer as-is.
///
/// # Examples
///
/// ```
/// use glyphrange::cli::report::format_boundaries;
/// use glyphrange::core::{CodepointSet, compact};
///
/// let set: CodepointSet = "ABCF".chars().collect();
/// assert_eq!(
///     format_boundaries(&compact(set), 16),
///     "0x0041, 0x0043, 0x0046, 0x0046,\n"
/// );
/// ```
pub fn format_boundaries(boundaries: &BoundaryList, columns: usize) -> String {
    let mut out = String::new();
    for row in boundaries.as_slice().chunks(columns.max(1)) {
        let line = row
            .iter()
            .map(|c| format!("{:#06x}", c))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&line);
        out.push_str(",\n");
    }
    out
}

/// Print the boundary table to stdout.
pub fn print_table(boundaries: &BoundaryList, columns: usize) -> io::Result<()> {
    print_table_to(boundaries, columns, &mut io::stdout().lock())
}

/// Print the boundary table to a custom writer.
///
/// Unlike the diagnostics, write errors are returned: the table is the
/// only data this tool produces.
pub fn print_table_to<W: Write>(
    boundaries: &BoundaryList,
    columns: usize,
    writer: &mut W,
) -> io::Result<()> {
    writer.write_all(format_boundaries(boundaries, columns).as_bytes())?;
    writer.flush()
}

/// Print a warning about files that could not be parsed.
///
/// Verbose mode lists each file and its error, otherwise a single count is
/// printed.
pub fn print_parse_warnings_to<W: Write>(
    warnings: &[MessageScanWarning],
    verbose: bool,
    writer: &mut W,
) {
    if warnings.is_empty() {
        return;
    }

    if verbose {
        for warning in warnings {
            let _ = writeln!(
                writer,
                "{} {}",
                "warning:".bold().yellow(),
                warning.error
            );
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            warnings.len(),
            "-v".cyan()
        );
    }
}

/// Print the closing summary line.
pub fn print_summary_to<W: Write>(result: &RunResult, writer: &mut W) {
    let runs = result.boundaries.run_count();
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Read {} {}, {} {} in {} {}",
            result.files_read,
            if result.files_read == 1 { "file" } else { "files" },
            result.codepoint_count,
            if result.codepoint_count == 1 {
                "codepoint"
            } else {
                "codepoints"
            },
            runs,
            if runs == 1 { "range" } else { "ranges" }
        )
        .green()
    );
}

pub fn print(result: &RunResult, verbose: bool) -> Result<()> {
    print_table(&result.boundaries, result.columns).context("Failed to write table")?;

    let mut stderr = io::stderr().lock();
    print_parse_warnings_to(&result.warnings, verbose, &mut stderr);
    print_summary_to(result, &mut stderr);
    Ok(())
}
