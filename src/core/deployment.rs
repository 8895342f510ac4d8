//! A single parsed `<team>_<cluster>_<deployment_type>.cfg` file.

use crate::errors::{Error, Result};
use crate::parser::{parse_cfg_file, Variables};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub const CFG_EXTENSION: &str = ".cfg";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentFile {
    pub path: PathBuf,
    pub variables: Variables,
    pub team_name: String,
    pub cluster_name: String,
    pub deployment_type: String,
}

/// Name segments of a deployment file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentName {
    pub team: String,
    pub cluster: String,
    pub deployment_type: String,
}

impl DeploymentName {
    /// Split `<team>_<cluster>_<deployment_type>.cfg`. The deployment type
    /// keeps any further underscores.
    pub fn parse(path: &Path) -> Result<Self> {
        let invalid = || Error::InvalidFileName {
            path: path.to_path_buf(),
        };
        let file_name = path.file_name().and_then(|n| n.to_str()).ok_or_else(invalid)?;
        let stem = file_name.strip_suffix(CFG_EXTENSION).ok_or_else(invalid)?;

        let mut parts = stem.splitn(3, '_');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(team), Some(cluster), Some(deployment_type))
                if !team.is_empty() && !cluster.is_empty() && !deployment_type.is_empty() =>
            {
                Ok(Self {
                    team: team.to_string(),
                    cluster: cluster.to_string(),
                    deployment_type: deployment_type.to_string(),
                })
            }
            _ => Err(invalid()),
        }
    }
}

impl DeploymentFile {
    /// Parse the file name and content of a deployment file.
    pub fn create(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::file_system("Invalid CFG file", path));
        }
        let name = DeploymentName::parse(path)?;
        let variables = parse_cfg_file(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            variables,
            team_name: name.team,
            cluster_name: name.cluster,
            deployment_type: name.deployment_type,
        })
    }

    /// Variables minus those resolved separately through GitHub.
    pub fn exclude_github_vars(&self, github_var_names: &BTreeSet<String>) -> Variables {
        self.variables
            .iter()
            .filter(|(key, _)| !github_var_names.contains(*key))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
