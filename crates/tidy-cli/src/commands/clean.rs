//! clean: remove caches and build artefacts

use std::path::PathBuf;

use colored::Colorize;
use tidy_core::clean::ItemStatus;
use tidy_core::{CleanOptions, CleanReport, TidySettings};

use crate::context::ProjectContext;
use crate::error::{CliError, Result};

/// Run the clean command
pub fn run_clean(
    ctx: &ProjectContext,
    dry_run: bool,
    target: Option<PathBuf>,
    exclude: Vec<String>,
    json: bool,
) -> Result<()> {
    let settings = TidySettings::load(&ctx.pyproject)?.clean;
    // The configured target is relative to the project root
    let target = target.unwrap_or_else(|| ctx.root.to_native().join(&settings.target));
    let options = CleanOptions {
        target: Some(target),
        dry_run,
        excludes: (!exclude.is_empty()).then_some(exclude),
    };

    let report = tidy_core::run_clean(&settings, &options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if report.totals.errors > 0 {
        return Err(CliError::user(format!(
            "{} item(s) could not be removed",
            report.totals.errors
        )));
    }
    Ok(())
}

fn print_report(report: &CleanReport) {
    println!("{} Cleaning {}", "=>".blue().bold(), report.target.cyan());

    for item in &report.items {
        match item.status {
            ItemStatus::Removed => println!("  {:<8} {}", "removed".green(), item.path),
            ItemStatus::DryRun => println!("  {:<8} {}", "would".yellow(), item.path),
            ItemStatus::Error => println!(
                "  {:<8} {} ({})",
                "error".red().bold(),
                item.path,
                item.error.as_deref().unwrap_or("unknown error").dimmed()
            ),
        }
    }

    let totals = &report.totals;
    println!();
    println!(
        "{} {} removed, {} skipped, {} error(s){}",
        "Total:".dimmed(),
        totals.removed,
        totals.skipped,
        totals.errors,
        if report.dry_run { " (dry run)" } else { "" }
    );
}
