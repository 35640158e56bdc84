// Configuration loader
// Loads settings from ~/.journal/config.toml and the prompt book they point to

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::constants::SETTINGS_FILE;
use super::settings::{journal_home, Settings};
use crate::session::PromptBook;

pub fn default_settings_path() -> PathBuf {
    journal_home().join(SETTINGS_FILE)
}

/// Load settings from `path`, or from the default location when `None`.
///
/// An explicit path must exist; a missing default file just means defaults.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let path = match path {
        Some(path) => {
            if !path.exists() {
                bail!("Settings file {} does not exist", path.display());
            }
            path.to_path_buf()
        }
        None => {
            let path = default_settings_path();
            if !path.exists() {
                debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Settings::default());
            }
            path
        }
    };

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read settings from {}", path.display()))?;
    let settings: Settings = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse settings in {}", path.display()))?;
    debug!(path = %path.display(), "loaded settings");
    Ok(settings)
}

/// Load and validate every prompt the settings point to
pub fn load_prompt_book(settings: &Settings) -> Result<PromptBook> {
    match &settings.prompts_path {
        Some(path) => PromptBook::load(path)
            .with_context(|| format!("Invalid prompt configuration in {}", path.display())),
        None => PromptBook::builtin().context("Invalid builtin prompt configuration"),
    }
}
