//! hooks subcommands: manage .pre-commit-config.yaml

use colored::Colorize;
use tidy_core::PreCommitConfig;
use tidy_core::process::{SystemExecutor, run_checked};
use tidy_fs::ProjectFile;
use tidy_tools::hooks::{find_hook, hook_catalog};
use tidy_tools::{CommandSpec, HookDefinition, MINIMAL_HOOKS};

use crate::context::ProjectContext;
use crate::error::Result;

/// Validate every key before touching the file.
fn resolve_keys(keys: &[String]) -> Result<Vec<HookDefinition>> {
    Ok(keys
        .iter()
        .map(|key| find_hook(key))
        .collect::<tidy_tools::Result<Vec<_>>>()?)
}

/// Run `hooks list`
pub fn run_hooks_list(ctx: &ProjectContext) -> Result<()> {
    let path = ctx.file(ProjectFile::PreCommitConfig);
    let config = PreCommitConfig::load(&path)?;
    let catalog = hook_catalog();
    let installed = config.installed_keys(&catalog);

    println!("{}", "Available Hooks".bold());
    println!();
    for def in &catalog {
        let marker = if installed.contains(&def.key) {
            "installed".green()
        } else {
            "-".dimmed()
        };
        println!(
            "  {:<18} {:<10} {} ({})",
            def.key.cyan(),
            marker,
            def.description,
            def.repo.repo.dimmed()
        );
    }

    let other: Vec<&str> = config
        .repos()
        .iter()
        .filter(|entry| !catalog.iter().any(|def| def.repo.repo == entry.repo))
        .map(|entry| entry.repo.as_str())
        .collect();
    if !other.is_empty() {
        println!();
        println!("{}", "Other repositories:".bold());
        for repo in other {
            println!("  {}", repo.dimmed());
        }
    }
    Ok(())
}

/// Run `hooks add`
pub fn run_hooks_add(ctx: &ProjectContext, keys: &[String]) -> Result<()> {
    let defs = resolve_keys(keys)?;
    let path = ctx.file(ProjectFile::PreCommitConfig);
    let mut config = PreCommitConfig::load(&path)?;

    let mut changed = false;
    for def in &defs {
        if config.add(def)? {
            println!("{} Added {}.", "OK".green().bold(), def.key.cyan());
            changed = true;
        } else {
            println!("{} {} is already configured.", "OK".green().bold(), def.key.cyan());
        }
    }

    if changed {
        config.save(&path)?;
    }
    Ok(())
}

/// Run `hooks remove`
pub fn run_hooks_remove(ctx: &ProjectContext, keys: &[String]) -> Result<()> {
    let defs = resolve_keys(keys)?;
    let path = ctx.file(ProjectFile::PreCommitConfig);
    let mut config = PreCommitConfig::load(&path)?;

    let mut changed = false;
    for def in &defs {
        if config.remove(def) {
            println!("{} Removed {}.", "OK".green().bold(), def.key.cyan());
            changed = true;
        } else {
            eprintln!(
                "{} {} is not configured.",
                "warning:".yellow().bold(),
                def.key
            );
        }
    }

    if changed {
        config.save(&path)?;
    }
    Ok(())
}

/// Run `hooks init`
///
/// Adds to an existing config rather than replacing it.
pub fn run_hooks_init(ctx: &ProjectContext, minimal: bool) -> Result<()> {
    let defs: Vec<HookDefinition> = if minimal {
        let keys: Vec<String> = MINIMAL_HOOKS.iter().map(|k| k.to_string()).collect();
        resolve_keys(&keys)?
    } else {
        hook_catalog()
    };

    let path = ctx.file(ProjectFile::PreCommitConfig);
    let mut config = PreCommitConfig::load(&path)?;
    let mut added = 0;
    for def in &defs {
        if config.add(def)? {
            added += 1;
        }
    }

    if added == 0 {
        println!("{} {} is already up to date.", "OK".green().bold(), path);
        return Ok(());
    }
    config.save(&path)?;
    println!(
        "{} Wrote {} ({} hook set(s) added).",
        "OK".green().bold(),
        path,
        added
    );
    Ok(())
}

/// Run `pre-commit <subcommand>` in the project root
pub fn run_hooks_command(ctx: &ProjectContext, subcommand: &str) -> Result<()> {
    let spec = CommandSpec::new("pre-commit")
        .arg(subcommand)
        .with_cwd(ctx.root.to_native());
    println!("{} Running {}", "=>".blue().bold(), spec.to_string().cyan());

    let output = run_checked(&SystemExecutor, &spec)?;
    for line in output.stdout.lines() {
        println!("  {}", line.dimmed());
    }
    println!("{} Done.", "OK".green().bold());
    Ok(())
}
