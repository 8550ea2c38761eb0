use std::io::{self, Write};

use colored::Colorize;
use log::debug;

use crate::{
    config::Config,
    types::{ExtendsReference, ImportOutcome, ImportStatement},
};

pub(crate) fn print_header<W: Write>(writer: &mut W, cfg: &Config) -> io::Result<()> {
    writeln!(
        writer,
        "Processing {} files in {}",
        cfg.extension.to_uppercase(),
        cfg.target_directory.display().to_string().blue()
    )?;
    if cfg.debug {
        writeln!(writer, "{}", "Debug mode enabled - detailed output will be shown".dimmed())?;
    }
    Ok(())
}

pub(crate) fn print_scan_summary<W: Write>(writer: &mut W, matched: usize) -> io::Result<()> {
    if matched == 0 {
        debug!("No files found with fully qualified extends");
        writeln!(writer, "{} No files found with fully qualified extends", "✓".green().bold())
    } else {
        writeln!(
            writer,
            "Found {} files with fully qualified extends",
            matched.to_string().yellow().bold()
        )
    }
}

pub(crate) fn print_checking<W: Write>(writer: &mut W, display_path: &str) -> io::Result<()> {
    writeln!(writer, "\nChecking {}", display_path.bright_white().bold())
}

pub(crate) fn print_skipped<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer, "  {}", "Could not determine class name, skipping".dimmed())
}

pub(crate) fn print_failed<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer, "  {}", "Failed to update extends statement".red())
}

pub(crate) fn print_error<W: Write>(writer: &mut W, err: &anyhow::Error) -> io::Result<()> {
    writeln!(writer, "  {} {:#}", "Error:".red().bold(), err)
}

pub(crate) fn print_rewritten<W: Write>(
    writer: &mut W,
    reference: &ExtendsReference,
    import: &ImportStatement,
    outcome: ImportOutcome,
) -> io::Result<()> {
    writeln!(writer, "  Original: {}", reference.original_extends().dimmed())?;
    writeln!(writer, "  Updated: class ... extends {}", reference.base_class.green())?;
    match outcome {
        ImportOutcome::Inserted => {
            writeln!(writer, "  {} {}", "Added:".green(), import)
        }
        ImportOutcome::ManualRequired => {
            writeln!(writer, "  {} {}", "Please manually add:".yellow().bold(), import)
        }
        ImportOutcome::AlreadyPresent => Ok(()),
    }
}

pub(crate) fn print_completed<W: Write>(writer: &mut W, modified: usize) -> io::Result<()> {
    writeln!(writer, "\n{} Completed! Modified {} files.", "●".bright_blue(), modified.to_string().cyan())?;
    writer.flush()
}
