//! Subcommand handlers.

use color_eyre::eyre::WrapErr;
use colored::Colorize;
use rk_core::config::{find_config, load, to_yaml, Project};
use rk_protocol::config_models::ProjectConfig;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolves the descriptor path: the explicit one, or whatever
/// [`find_config`] picks in the current directory.
fn resolve(file: Option<&Path>) -> color_eyre::Result<PathBuf> {
    match file {
        Some(path) => Ok(path.to_path_buf()),
        None => {
            let cwd = std::env::current_dir().wrap_err("Failed to determine current directory")?;
            Ok(find_config(&cwd)?)
        }
    }
}

fn load_project(file: Option<&Path>) -> color_eyre::Result<(PathBuf, Project)> {
    let path = resolve(file)?;
    debug!(path = %path.display(), "resolved config path");

    let project = load(&path).wrap_err_with(|| format!("Could not load {}", path.display()))?;
    Ok((path, project))
}

pub fn check(file: Option<&Path>) -> color_eyre::Result<()> {
    let (path, project) = load_project(file)?;

    println!("{} {}", "✓".green().bold(), summary(&path, &project.config));
    Ok(())
}

pub fn show(file: Option<&Path>, json: bool) -> color_eyre::Result<()> {
    let (_, project) = load_project(file)?;

    if json {
        let rendered = serde_json::to_string_pretty(&project.config)
            .wrap_err("Failed to render config as JSON")?;
        println!("{rendered}");
    } else {
        print!("{}", to_yaml(&project.config)?);
    }
    Ok(())
}

fn summary(path: &Path, config: &ProjectConfig) -> String {
    let sections = config.configured_sections();
    let sections = if sections.is_empty() {
        "no sections configured".to_string()
    } else {
        format!("sections: {}", sections.join(", "))
    };

    let release = &config.release;
    let draft = if release.draft { " (draft)" } else { "" };

    format!(
        "{}: release {}{}, {}",
        path.display(),
        release.github,
        draft,
        sections
    )
}
