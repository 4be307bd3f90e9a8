//! pyproject subcommands: list, show, remove and set

use colored::Colorize;
use serde_json::Value;
use tidy_content::{ConfigDocument, ConfigValue, SectionPath};
use tidy_core::inspect::{mask_sensitive, visible_sections};

use crate::context::ProjectContext;
use crate::error::{CliError, Result};

fn load_existing(ctx: &ProjectContext) -> Result<ConfigDocument> {
    if !ctx.pyproject.is_file() {
        return Err(CliError::user(format!(
            "{} not found (use --pyproject to point at another file)",
            ctx.pyproject
        )));
    }
    Ok(ConfigDocument::load(&ctx.pyproject)?)
}

/// Run `pyproject list`
pub fn run_pyproject_list(ctx: &ProjectContext, all: bool) -> Result<()> {
    let doc = load_existing(ctx)?;
    let sections = visible_sections(&doc, all);

    if sections.is_empty() {
        println!("{} No sections to show.", "=>".blue().bold());
        return Ok(());
    }

    println!("{}", format!("Sections in {}", ctx.pyproject).bold());
    for section in sections {
        let depth = section.matches('.').count();
        println!("{}{}", "  ".repeat(depth + 1), section.green());
    }
    Ok(())
}

/// Run `pyproject show`
pub fn run_pyproject_show(
    ctx: &ProjectContext,
    section: &str,
    json: bool,
    show_secrets: bool,
) -> Result<()> {
    let doc = load_existing(ctx)?;
    let path = SectionPath::parse(section)?;
    let mut value = doc.section_json(&path)?;
    if !show_secrets {
        let masked = mask_sensitive(&mut value);
        tracing::debug!(masked, "Masked sensitive values");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}", format!("[{path}]").cyan().bold());
    match &value {
        Value::Object(_) => print_flat(None, &value),
        other => println!("{}", render_json(other)),
    }
    Ok(())
}

/// `key = value` lines, nested tables as dotted keys.
fn print_flat(prefix: Option<&str>, value: &Value) {
    let Value::Object(map) = value else {
        return;
    };
    for (key, child) in map {
        let full = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key.clone(),
        };
        match child {
            Value::Object(_) => print_flat(Some(&full), child),
            leaf => println!("{} = {}", full.green(), render_json(leaf)),
        }
    }
}

fn render_json(value: &Value) -> String {
    match value {
        Value::String(s) => format!("{s:?}"),
        other => other.to_string(),
    }
}

/// Run `pyproject remove`
pub fn run_pyproject_remove(ctx: &ProjectContext, section: &str) -> Result<()> {
    let mut doc = load_existing(ctx)?;
    let path = SectionPath::parse(section)?;
    doc.remove_section(&path)?;
    doc.dump(&ctx.pyproject)?;
    println!("{} Removed [{}].", "OK".green().bold(), path);
    Ok(())
}

/// Run `pyproject set`
pub fn run_pyproject_set(ctx: &ProjectContext, key: &str, value: &str) -> Result<()> {
    let mut doc = ConfigDocument::load(&ctx.pyproject)?;
    let path = SectionPath::parse(key)?;
    let changes = doc.set_key(&path, ConfigValue::parse_literal(value))?;

    if changes.is_empty() {
        println!("{} {} is already set.", "OK".green().bold(), path);
        return Ok(());
    }

    doc.dump(&ctx.pyproject)?;
    for change in &changes {
        println!("  {}", change.to_string().dimmed());
    }
    println!("{} Updated {}.", "OK".green().bold(), ctx.pyproject);
    Ok(())
}
