//! dependabot: scaffold .github/dependabot.yml

use std::path::PathBuf;

use colored::Colorize;
use tidy_core::setup_dependabot;
use tidy_fs::{NormalizedPath, ProjectFile};

use crate::context::ProjectContext;
use crate::error::Result;

/// Run the dependabot command
pub fn run_dependabot(ctx: &ProjectContext, path: Option<PathBuf>) -> Result<()> {
    let path = path
        .map(NormalizedPath::new)
        .unwrap_or_else(|| ctx.file(ProjectFile::Dependabot));

    if setup_dependabot(&path)? {
        println!("{} Created {}.", "OK".green().bold(), path);
    } else {
        println!(
            "{} {} already exists, left unchanged.",
            "=>".blue().bold(),
            path
        );
    }
    Ok(())
}
