//! Shared error types for the exporter

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cfgexport operations
#[derive(Debug, Error)]
pub enum Error {
    /// A team name that is not among the known teams
    #[error("Unknown team name: {team}. Valid teams are: {}", valid.join(", "))]
    UnknownTeam { team: String, valid: Vec<String> },

    /// A `.cfg` line that does not follow `<keyword> KEY=VALUE`
    #[error("Parse error in {}:{line}: {message}", file.display())]
    Parse {
        file: PathBuf,
        line: usize,
        message: String,
    },

    /// A `.cfg` file whose name is not `<team>_<cluster>_<type>.cfg`
    #[error("Invalid file name format: {}", path.display())]
    InvalidFileName { path: PathBuf },

    /// Settings file errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        path: Option<PathBuf>,
    },

    /// File system related errors
    #[error("File system error: {message} ({})", path.display())]
    FileSystem {
        message: String,
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    /// `git pull` could not be run or failed
    #[error("Git error: {0}")]
    Git(String),

    /// The user declined to continue
    #[error("Aborted: {0}")]
    Aborted(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// Pattern errors
    #[error(transparent)]
    Pattern(#[from] glob::PatternError),
}

impl Error {
    /// Create an unknown-team error listing the teams that do exist
    pub fn unknown_team(team: impl Into<String>, valid: impl IntoIterator<Item = String>) -> Self {
        Self::UnknownTeam {
            team: team.into(),
            valid: valid.into_iter().collect(),
        }
    }

    /// Create a parse error with file and line context
    pub fn parse(file: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            path: None,
        }
    }

    /// Create a configuration error with path context
    pub fn config_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Configuration {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a file system error with path context
    pub fn file_system(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: path.into(),
            source: None,
        }
    }

    /// Create a file system error wrapping the underlying io error
    pub fn file_system_with_source(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: path.into(),
            source: Some(source),
        }
    }
}

/// Result type alias for cfgexport operations
pub type Result<T> = std::result::Result<T, Error>;
