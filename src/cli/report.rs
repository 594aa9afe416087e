//! Report formatting and printing utilities.
//!
//! Separate from the merge logic so locmerge can be used as a library. Every
//! printer has a `*_to` variant taking a writer, for tests.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, InitSummary, MergeSummary, WriteMode};
use crate::merge::{KeyAction, MergeOutcome};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Confirmation printed after the built-in bundles were written.
pub const APPLY_SUCCESS_MESSAGE: &str = "Translation JSONs updated successfully!";

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Apply(summary) => print_apply(summary, verbose, writer),
        CommandSummary::Merge(summary) => print_merge(summary, verbose, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

/// Print the per-key actions for each file.
///
/// ```text
/// src/locales/en/translation.json
///   + notificationsPage  added
///   ~ scanQrPage         updated
/// ```
///
/// Unchanged keys are listed only when `show_unchanged` is set.
pub fn print_outcomes_to<W: Write>(
    outcomes: &[MergeOutcome],
    show_unchanged: bool,
    writer: &mut W,
) {
    for outcome in outcomes {
        let visible: Vec<_> = outcome
            .changes
            .iter()
            .filter(|c| show_unchanged || c.action.is_change())
            .collect();
        if visible.is_empty() {
            continue;
        }

        let _ = writeln!(writer, "{}", outcome.path.display().to_string().bold());

        let key_width = visible
            .iter()
            .map(|c| UnicodeWidthStr::width(c.key.as_str()))
            .max()
            .unwrap_or(0);

        for change in visible {
            let padding = key_width - UnicodeWidthStr::width(change.key.as_str());
            let (mark, label) = match change.action {
                KeyAction::Added => ("+".green(), change.action.as_str().green()),
                KeyAction::Updated => ("~".yellow(), change.action.as_str().yellow()),
                KeyAction::Unchanged => ("=".dimmed(), change.action.as_str().dimmed()),
            };
            let _ = writeln!(
                writer,
                "  {} {}{}  {}",
                mark,
                change.key,
                " ".repeat(padding),
                label
            );
        }
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_apply<W: Write>(summary: &MergeSummary, verbose: bool, writer: &mut W) {
    match summary.mode {
        WriteMode::Write => {
            if verbose {
                print_outcomes_to(&summary.outcomes, true, writer);
            }
            let _ = writeln!(writer, "{}", APPLY_SUCCESS_MESSAGE.green());
        }
        WriteMode::DryRun => print_pending(summary, verbose, writer),
        WriteMode::Check => {
            print_outcomes_to(&summary.outcomes, verbose, writer);
            let files = summary.changed_file_count();
            if files == 0 {
                print_up_to_date(writer);
            } else {
                let _ = writeln!(
                    writer,
                    "{} {}",
                    FAILURE_MARK.red(),
                    format!("{} locale file(s) out of date", files).red()
                );
                let _ = writeln!(writer, "Run {} to update them.", "locmerge apply".cyan());
            }
        }
    }
}

fn print_merge<W: Write>(summary: &MergeSummary, verbose: bool, writer: &mut W) {
    if summary.mode.writes() {
        if verbose {
            print_outcomes_to(&summary.outcomes, true, writer);
        }
        for outcome in &summary.outcomes {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Updated {} ({} key(s) changed)",
                    outcome.path.display(),
                    outcome.changed_count()
                )
                .green()
            );
        }
    } else {
        print_pending(summary, verbose, writer);
    }
}

fn print_pending<W: Write>(summary: &MergeSummary, verbose: bool, writer: &mut W) {
    print_outcomes_to(&summary.outcomes, verbose, writer);

    let keys = summary.changed_key_count();
    if keys == 0 {
        print_up_to_date(writer);
        return;
    }

    let _ = writeln!(
        writer,
        "{} {} key(s) in {} file(s).",
        "Would update".yellow().bold(),
        keys,
        summary.changed_file_count()
    );
    let _ = writeln!(
        writer,
        "Run without {} to write these changes.",
        "--dry-run".cyan()
    );
}

fn print_up_to_date<W: Write>(writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        "All locale files are up to date".green()
    );
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.config_path.display()).green()
    );
}

// ============================================================
// Tests
// ============================================================
