//! Hand-off of a resolved configuration to the generator

use crate::config::{ResolvedConfiguration, StackOptions};
use crate::options::OptionValue;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

/// Render the configuration as YAML
pub fn render_yaml(config: &ResolvedConfiguration) -> Result<String> {
    serde_yaml::to_string(config).context("Failed to serialize workspace configuration")
}

/// Write the configuration to `path`, creating parent directories as needed
pub async fn write_configuration(config: &ResolvedConfiguration, path: &Path) -> Result<()> {
    let yaml = render_yaml(config)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    tokio::fs::write(path, yaml)
        .await
        .with_context(|| format!("Failed to write configuration to {}", path.display()))?;

    tracing::debug!(path = %path.display(), "configuration written");
    Ok(())
}

/// Short human-readable summary of the configuration
pub fn summary(config: &ResolvedConfiguration) -> Vec<String> {
    let mut lines = vec![
        format!("{} {}", "workspace:".dimmed(), config.name.bold()),
        format!("{} {}", "preset:".dimmed(), config.preset().cyan()),
    ];

    if let Some(stack) = config.stack() {
        lines.push(format!("{} {}", "stack:".dimmed(), stack));
    }
    if let Some(app) = config.options.app_name().filter(|name| !name.is_empty()) {
        lines.push(format!("{} {}", "app:".dimmed(), app));
    }
    if let StackOptions::React(opts) = &config.options {
        lines.push(format!("{} {}", "framework:".dimmed(), opts.app.framework().label()));
    }

    lines.push(format!(
        "{} {}",
        "package manager:".dimmed(),
        config.package_manager.id()
    ));
    lines.push(format!("{} {}", "base branch:".dimmed(), config.default_base));
    match config.ci {
        Some(ci) => lines.push(format!("{} {}", "ci:".dimmed(), ci.label())),
        None => lines.push(format!("{} {}", "ci:".dimmed(), "none".yellow())),
    }

    lines
}
