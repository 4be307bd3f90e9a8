//! tidycode CLI
//!
//! Writes and maintains Python tool configuration: `[tool.*]` sections in
//! pyproject.toml, pre-commit hooks and dependabot, and runs the tools.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands, HooksAction, PyprojectAction};
use context::ProjectContext;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{} could not set up logging: {}", "warning:".yellow().bold(), e);
    }
    tracing::debug!(pyproject = %cli.pyproject.display(), "Starting");

    let ctx = ProjectContext::new(&cli.pyproject);
    match cli.command {
        Some(cmd) => execute_command(&ctx, cmd),
        None => {
            println!("{} Python tool configuration", "tidycode".green().bold());
            println!();
            println!("Run {} for available commands.", "tidycode --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(ctx: &ProjectContext, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Init { dry_run } => commands::run_init(ctx, dry_run),
        Commands::Setup { tools, dry_run } => commands::run_setup(ctx, &tools, dry_run),
        Commands::ListTools { category } => commands::run_list_tools(category.as_deref()),
        Commands::Pyproject { action } => match action {
            PyprojectAction::List { all } => commands::run_pyproject_list(ctx, all),
            PyprojectAction::Show {
                section,
                json,
                show_secrets,
            } => commands::run_pyproject_show(ctx, &section, json, show_secrets),
            PyprojectAction::Remove { section } => commands::run_pyproject_remove(ctx, &section),
            PyprojectAction::Set { key, value } => commands::run_pyproject_set(ctx, &key, &value),
        },
        Commands::Quality {
            tools,
            check_only,
            target,
        } => commands::run_quality(ctx, &tools, check_only, target),
        Commands::Security { target } => commands::run_security(ctx, target),
        Commands::Coverage => commands::run_coverage(ctx),
        Commands::Bump { dry_run } => commands::run_bump(ctx, dry_run),
        Commands::Hooks { action } => match action {
            HooksAction::List => commands::run_hooks_list(ctx),
            HooksAction::Add { keys } => commands::run_hooks_add(ctx, &keys),
            HooksAction::Remove { keys } => commands::run_hooks_remove(ctx, &keys),
            HooksAction::Init { minimal } => commands::run_hooks_init(ctx, minimal),
            HooksAction::Install => commands::run_hooks_command(ctx, "install"),
            HooksAction::Autoupdate => commands::run_hooks_command(ctx, "autoupdate"),
        },
        Commands::Clean {
            dry_run,
            target,
            exclude,
            json,
        } => commands::run_clean(ctx, dry_run, target, exclude, json),
        Commands::Dependabot { path } => commands::run_dependabot(ctx, path),
    }
}
