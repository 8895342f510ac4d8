use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Root configuration structure for cfgexport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory searched recursively for `.cfg` files
    #[serde(default = "default_cfg_path")]
    pub cfg_path: PathBuf,

    /// Known teams; discovered from file names when empty
    #[serde(default)]
    pub team_names: BTreeSet<String>,

    /// Variables present in every file but resolved through GitHub
    #[serde(default)]
    pub github_var_names: BTreeSet<String>,
}

fn default_cfg_path() -> PathBuf {
    PathBuf::from(".")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cfg_path: default_cfg_path(),
            team_names: BTreeSet::new(),
            github_var_names: BTreeSet::new(),
        }
    }
}

impl AppConfig {
    pub fn with_cfg_path(mut self, cfg_path: PathBuf) -> Self {
        self.cfg_path = cfg_path;
        self
    }

    /// Anchor a relative `cfg_path` at `base`, the settings file's directory
    pub fn relative_to(mut self, base: &Path) -> Self {
        if self.cfg_path.is_relative() {
            self.cfg_path = base.join(&self.cfg_path);
        }
        self
    }

    /// Whether teams come from the settings file rather than discovery
    pub fn has_declared_teams(&self) -> bool {
        !self.team_names.is_empty()
    }
}
