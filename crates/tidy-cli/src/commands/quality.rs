//! quality, security, coverage and bump: run external tools

use std::path::PathBuf;

use colored::Colorize;
use tidy_core::{RunStatus, RunSummary, SystemExecutor, TidySettings, run_tools};
use tidy_tools::{RunnerOptions, ToolRegistry};

use crate::context::ProjectContext;
use crate::error::{CliError, Result};

/// Run the quality command
pub fn run_quality(
    ctx: &ProjectContext,
    tools: &[String],
    check_only: bool,
    target: Option<PathBuf>,
) -> Result<()> {
    let settings = TidySettings::load(&ctx.pyproject)?;
    let names = if tools.is_empty() {
        settings.tools.clone()
    } else {
        tools.to_vec()
    };
    let options = runner_options(ctx, &settings.target, target)?
        .check_only(check_only || settings.check_only);
    run_and_report(&names, &options, settings.verbose)
}

/// Run the security command
pub fn run_security(ctx: &ProjectContext, target: Option<PathBuf>) -> Result<()> {
    let settings = TidySettings::load(&ctx.pyproject)?;
    let options = runner_options(ctx, &settings.target, target)?;
    run_and_report(&["security".to_string()], &options, settings.verbose)
}

/// Run the coverage command
pub fn run_coverage(ctx: &ProjectContext) -> Result<()> {
    let settings = TidySettings::load(&ctx.pyproject)?;
    let options = runner_options(ctx, &settings.target, None)?;
    // The report is the point of this command, so always show output.
    run_and_report(&["coverage".to_string()], &options, true)
}

/// Run the bump command
pub fn run_bump(ctx: &ProjectContext, dry_run: bool) -> Result<()> {
    let settings = TidySettings::load(&ctx.pyproject)?;
    let options = runner_options(ctx, &settings.target, None)?.dry_run(dry_run);
    run_and_report(&["commitizen".to_string()], &options, true)
}

/// Commands start in the project root, so the configured target and the
/// config file are taken relative to it. An explicit target is relative to
/// the shell's directory.
fn runner_options(
    ctx: &ProjectContext,
    configured: &str,
    target: Option<PathBuf>,
) -> Result<RunnerOptions> {
    let target = match target {
        Some(target) => std::path::absolute(target)?,
        None => PathBuf::from(configured),
    };
    let config = ctx.pyproject.file_name().unwrap_or("pyproject.toml");
    Ok(RunnerOptions::new(target)
        .config(config)
        .in_dir(ctx.root.to_native()))
}

fn run_and_report(names: &[String], options: &RunnerOptions, show_output: bool) -> Result<()> {
    let target = match &options.cwd {
        Some(cwd) => cwd.join(&options.target),
        None => options.target.clone(),
    };
    println!(
        "{} Running {} on {}",
        "=>".blue().bold(),
        names.join(", ").cyan(),
        target.display()
    );

    let registry = ToolRegistry::with_builtins();
    let summary = run_tools(&SystemExecutor, &registry, names, options);
    print_summary(&summary, show_output);

    let failed = summary.failures().count();
    if failed > 0 {
        return Err(CliError::user(format!(
            "{} of {} command(s) failed",
            failed,
            summary.runs.len()
        )));
    }
    Ok(())
}

fn print_summary(summary: &RunSummary, show_output: bool) {
    for run in &summary.runs {
        let status = match run.status {
            RunStatus::Success => "OK".green().bold(),
            RunStatus::Failed(_) => "FAIL".red().bold(),
            RunStatus::NotFound => "MISSING".yellow().bold(),
            RunStatus::Error => "ERROR".red().bold(),
        };
        println!("  {:<8} {:<18} {}", status, run.command, run.status.to_string().dimmed());

        let failed = run.status != RunStatus::Success;
        if show_output || failed {
            for line in run.stdout.lines().chain(run.stderr.lines()) {
                println!("           {}", line.dimmed());
            }
        }
    }

    for (name, reason) in &summary.skipped {
        println!("  {:<8} {:<18} {}", "SKIP".yellow().bold(), name, reason.dimmed());
    }

    println!();
    if summary.runs.is_empty() {
        println!("{} Nothing was run.", "warning:".yellow().bold());
    } else if summary.success() {
        println!("{} All checks passed.", "OK".green().bold());
    }
}
