use std::{
    collections::BTreeMap,
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use log::{debug, trace};
use serde::Serialize;

use crate::{
    config::Config,
    types::{CheckResult, Violation},
};

/// Display a file relative to the project root when possible
fn display_path(root: &Path, file: &Path) -> String {
    file.strip_prefix(root).unwrap_or(file).to_string_lossy().replace('\\', "/")
}

pub fn print_no_violations_message<W: Write>(writer: &mut W) -> io::Result<()> {
    debug!("No relative imports found");
    writeln!(writer, "{} No relative imports found.", "✓".green().bold())?;
    writer.flush()?;
    Ok(())
}

pub fn print_violations<W: Write>(
    writer: &mut W,
    result: &CheckResult,
    cfg: &Config,
) -> io::Result<()> {
    let violations = &result.violations;
    debug!("Printing {} violations", violations.len());
    let root = result.root.as_path();

    let mut by_file: BTreeMap<String, Vec<&Violation>> = BTreeMap::new();
    for v in violations {
        by_file.entry(display_path(root, &v.statement.source_file)).or_default().push(v);
    }
    debug!("Grouped violations into {} files", by_file.len());

    writeln!(
        writer,
        "{} Relative imports found ({} violations)\n",
        "⚠".yellow().bold(),
        violations.len().to_string().yellow()
    )?;

    for (file, file_violations) in &by_file {
        trace!("Printing file: {} with {} violations", file, file_violations.len());
        writeln!(writer, "{}", file.blue())?;

        for (idx, v) in file_violations.iter().enumerate() {
            let is_last = idx == file_violations.len() - 1;
            let prefix = if is_last { "└──" } else { "├──" };
            let position = format!("{}:{}", v.statement.line, v.statement.column);
            let suggestion = match &v.replacement {
                Some(replacement) => format!("→ '{}'", replacement.green()),
                None => "(no fix available)".dimmed().to_string(),
            };

            writeln!(
                writer,
                "{}  {}  '{}' {}  {}",
                prefix.dimmed(),
                position.dimmed(),
                v.statement.raw_path.red(),
                suggestion,
                v.message.dimmed()
            )?;
        }

        writeln!(writer)?;
    }

    print_summary(writer, violations, by_file.len(), cfg.fix, result.fixes_applied)?;

    writer.flush()?;
    Ok(())
}

fn print_summary<W: Write>(
    writer: &mut W,
    violations: &[Violation],
    files: usize,
    fix: bool,
    fixes_applied: usize,
) -> io::Result<()> {
    let fixable = violations.iter().filter(|v| v.replacement.is_some()).count();

    writeln!(writer, "{}", "─".repeat(60).dimmed())?;
    writeln!(writer, "{}", "Summary".bold())?;
    writeln!(writer, "  Total violations: {}", violations.len().to_string().yellow().bold())?;
    writeln!(writer, "  Files affected: {}", files.to_string().yellow())?;
    if fix {
        writeln!(writer, "  Fixed: {}", fixes_applied.to_string().green().bold())?;
    } else if fixable > 0 {
        writeln!(
            writer,
            "  Fixable: {} (run with {} to rewrite)",
            fixable.to_string().green(),
            "--fix".cyan()
        )?;
    }

    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonViolation<'a> {
    file: String,
    line: usize,
    column: usize,
    start: u32,
    end: u32,
    raw_path: &'a str,
    message: &'a str,
    replacement: Option<&'a str>,
}

pub fn print_violations_json<W: Write>(writer: &mut W, result: &CheckResult) -> io::Result<()> {
    let root = result.root.as_path();
    let items: Vec<JsonViolation> = result
        .violations
        .iter()
        .map(|v| JsonViolation {
            file: display_path(root, &v.statement.source_file),
            line: v.statement.line,
            column: v.statement.column,
            start: v.statement.range.start,
            end: v.statement.range.end,
            raw_path: &v.statement.raw_path,
            message: v.message,
            replacement: v.replacement.as_deref(),
        })
        .collect();

    serde_json::to_writer_pretty(&mut *writer, &items)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
