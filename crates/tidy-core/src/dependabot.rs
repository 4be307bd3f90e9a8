//! `.github/dependabot.yml` scaffolding

use serde::Serialize;
use tidy_fs::NormalizedPath;

use crate::error::Result;

#[derive(Debug, Serialize)]
struct DependabotConfig {
    version: u8,
    updates: Vec<Update>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
struct Update {
    package_ecosystem: &'static str,
    directory: &'static str,
    schedule: Schedule,
}

#[derive(Debug, Serialize)]
struct Schedule {
    interval: &'static str,
}

impl Update {
    fn weekly(ecosystem: &'static str) -> Self {
        Self {
            package_ecosystem: ecosystem,
            directory: "/",
            schedule: Schedule { interval: "weekly" },
        }
    }
}

/// Render the default configuration: weekly `pip` and `github-actions` updates.
pub fn default_config() -> Result<String> {
    let config = DependabotConfig {
        version: 2,
        updates: vec![Update::weekly("pip"), Update::weekly("github-actions")],
    };
    Ok(serde_yaml::to_string(&config)?)
}

/// Write the default configuration to `path` unless a file is already there.
///
/// Returns `true` when the file was created.
pub fn setup_dependabot(path: &NormalizedPath) -> Result<bool> {
    if path.exists() {
        tracing::info!(path = %path, "Dependabot config already exists, leaving it alone");
        return Ok(false);
    }
    tidy_fs::io::write_text(path, &default_config()?)?;
    tracing::info!(path = %path, "Created dependabot config");
    Ok(true)
}
