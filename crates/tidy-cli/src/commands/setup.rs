//! init and setup: write tool sections into pyproject.toml

use colored::Colorize;
use tidy_core::{ApplyOptions, ApplyReport, apply};
use tidy_tools::ToolRegistry;

use crate::context::ProjectContext;
use crate::error::Result;

/// Group written by `tidycode init`.
const INIT_GROUP: &str = "defaults";

/// Run the init command
pub fn run_init(ctx: &ProjectContext, dry_run: bool) -> Result<()> {
    run_setup(ctx, &[INIT_GROUP.to_string()], dry_run)
}

/// Run the setup command
pub fn run_setup(ctx: &ProjectContext, tools: &[String], dry_run: bool) -> Result<()> {
    println!(
        "{} Configuring {} in {}",
        "=>".blue().bold(),
        tools.join(", ").cyan(),
        ctx.pyproject
    );

    let registry = ToolRegistry::with_builtins();
    let report = apply(&ctx.pyproject, &registry, tools, ApplyOptions { dry_run })?;
    print_report(ctx, &report, dry_run);
    Ok(())
}

fn print_report(ctx: &ProjectContext, report: &ApplyReport, dry_run: bool) {
    if report.is_unchanged() {
        println!(
            "{} {} is already up to date.",
            "OK".green().bold(),
            ctx.pyproject
        );
        return;
    }

    if dry_run {
        print_diff(&report.diff);
        println!();
        println!(
            "{} Dry run: {} change(s), nothing written.",
            "=>".blue().bold(),
            report.changes.len()
        );
        return;
    }

    for change in &report.changes {
        println!("  {}", change.to_string().dimmed());
    }
    println!(
        "{} Updated {} ({} tool(s), {} change(s)).",
        "OK".green().bold(),
        ctx.pyproject,
        report.tools.len(),
        report.changes.len()
    );
}

fn print_diff(diff: &str) {
    for line in diff.lines() {
        if line.starts_with("+++") || line.starts_with("---") {
            println!("{}", line.bold());
        } else if line.starts_with('+') {
            println!("{}", line.green());
        } else if line.starts_with('-') {
            println!("{}", line.red());
        } else if line.starts_with("@@") {
            println!("{}", line.cyan());
        } else {
            println!("{line}");
        }
    }
}
