//! list-tools: the registry, grouped by category

use colored::Colorize;
use tidy_tools::{ToolCategory, ToolRegistry};

use crate::error::Result;

const CATEGORIES: [(ToolCategory, &str); 7] = [
    (ToolCategory::Project, "Project"),
    (ToolCategory::Formatter, "Formatters"),
    (ToolCategory::Linter, "Linters"),
    (ToolCategory::TypeChecker, "Type Checkers"),
    (ToolCategory::Testing, "Testing"),
    (ToolCategory::Security, "Security"),
    (ToolCategory::Commit, "Commit & Release"),
];

/// Run the list-tools command
pub fn run_list_tools(category_filter: Option<&str>) -> Result<()> {
    let registry = ToolRegistry::with_builtins();

    let filter = match category_filter {
        Some(name) => {
            let found = CATEGORIES
                .iter()
                .map(|(cat, _)| *cat)
                .find(|cat| cat.as_str() == name);
            if found.is_none() {
                let valid: Vec<&str> = CATEGORIES.iter().map(|(cat, _)| cat.as_str()).collect();
                eprintln!(
                    "{} Unknown category '{}'. Valid: {}",
                    "warning:".yellow().bold(),
                    name,
                    valid.join(", ")
                );
            }
            found
        }
        None => None,
    };

    println!("{}", "Available Tools".bold());
    println!();

    for (cat, label) in CATEGORIES {
        if filter.is_some_and(|f| f != cat) {
            continue;
        }

        let tools = registry.by_category(cat);
        if tools.is_empty() {
            continue;
        }

        println!("{}:", label.cyan().bold());
        for slug in tools {
            if let Some(reg) = registry.get(slug) {
                let sections: Vec<String> =
                    reg.sections.iter().map(|(path, _)| path.to_string()).collect();
                let target = if sections.is_empty() {
                    "runner only".to_string()
                } else {
                    sections.join(", ")
                };
                println!("  {:<12} {} ({})", slug.green(), reg.description, target.dimmed());
            }
        }
        println!();
    }

    if filter.is_none() {
        println!("{}:", "Groups".cyan().bold());
        for group in registry.groups() {
            println!(
                "  {:<12} {}",
                group.slug.green(),
                group.members.join(", ").dimmed()
            );
        }
        println!();
    }

    println!(
        "{} {} tools available. Use {} to configure them.",
        "Total:".dimmed(),
        registry.len(),
        "tidycode setup <name>".cyan()
    );

    Ok(())
}
