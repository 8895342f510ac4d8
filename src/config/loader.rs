use std::fs;
use std::path::{Path, PathBuf};

use super::core::AppConfig;
use crate::errors::{Error, Result};

/// Settings file looked up in the working directory and its ancestors
pub const DEFAULT_CONFIG_FILE: &str = "private.yaml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Syntax of a settings file, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSyntax {
    Yaml,
    Toml,
}

impl ConfigSyntax {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }
}

/// Pure function to parse config contents in the given syntax
pub fn parse_config(contents: &str, syntax: ConfigSyntax) -> std::result::Result<AppConfig, String> {
    match syntax {
        // An empty YAML document deserializes to unit, not a map
        ConfigSyntax::Yaml if contents.trim().is_empty() => Ok(AppConfig::default()),
        ConfigSyntax::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
        ConfigSyntax::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
    }
}

/// Load settings from an explicit path. The file must exist.
pub fn load_config_from_path(path: &Path) -> Result<AppConfig> {
    if !path.is_file() {
        return Err(Error::config_with_path(
            format!("Invalid config file: {}", path.display()),
            path,
        ));
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| Error::file_system_with_source("Failed to read config file", path, e))?;

    let config = parse_config(&contents, ConfigSyntax::from_path(path)).map_err(|e| {
        Error::config_with_path(format!("Failed to parse {}: {}", path.display(), e), path)
    })?;

    tracing::debug!("Loaded config from {}", path.display());
    Ok(match path.parent() {
        Some(dir) => config.relative_to(dir),
        None => config,
    })
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find the nearest default settings file at or above `start`
pub fn find_config_file(start: PathBuf) -> Option<PathBuf> {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(DEFAULT_CONFIG_FILE))
        .find(|path| path.is_file())
}

/// Resolve settings: explicit path, else nearest default file, else defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig> {
    if let Some(path) = explicit {
        return load_config_from_path(path);
    }

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return Ok(AppConfig::default());
        }
    };

    match find_config_file(current) {
        Some(path) => load_config_from_path(&path),
        None => {
            tracing::debug!(
                "No {} found after checking {} directories. Using default config.",
                DEFAULT_CONFIG_FILE,
                MAX_TRAVERSAL_DEPTH
            );
            Ok(AppConfig::default())
        }
    }
}
