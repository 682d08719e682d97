//! Configuration module for tubesearch
//!
//! Handles loading settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use crate::error::SearchResult;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit settings file
pub const SETTINGS_PATH_VAR: &str = "TUBESEARCH_SETTINGS_PATH";

/// Locations searched for settings.yml, in order
pub fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("tubesearch/settings.yml"));
    }
    paths
}

/// First existing settings file, the explicit env path taking precedence
pub fn locate() -> Option<PathBuf> {
    let explicit = std::env::var(SETTINGS_PATH_VAR).ok().map(PathBuf::from);

    explicit
        .into_iter()
        .chain(default_paths())
        .find(|path| path.exists())
}

/// Load settings from `path` or use defaults, then apply the environment
pub fn load_from(path: Option<&Path>) -> SearchResult<Settings> {
    let mut settings = match path {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };

    settings.merge_env();
    Ok(settings)
}
