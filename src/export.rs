//! Building team exports from deployment files.
//!
//! A [`CfgExporter`] collects every `.cfg` file owned by one team and folds
//! them into a [`TeamExport`] through a [`DeploymentMapper`]. The default
//! mapper nests each deployment's variables (minus GitHub variables) under
//! its cluster and deployment type.

use crate::config::AppConfig;
use crate::core::{DeploymentFile, ExportDocument, TeamExport};
use crate::errors::{Error, Result};
use crate::io::walker::{discover_team_names, find_team_cfgs};
use std::collections::BTreeSet;
use tracing::{debug, info_span};

/// Folds one deployment into a team export.
pub type DeploymentMapper = fn(&mut TeamExport, &DeploymentFile, &AppConfig);

/// Default mapper: `export[cluster][deployment_type] = variables - github vars`.
pub fn deployment_mapper(export: &mut TeamExport, deployment: &DeploymentFile, config: &AppConfig) {
    export.insert(
        &deployment.cluster_name,
        &deployment.deployment_type,
        deployment.exclude_github_vars(&config.github_var_names),
    );
}

/// Known teams: declared in settings, otherwise discovered from file names.
pub fn team_names(config: &AppConfig) -> Result<BTreeSet<String>> {
    if config.has_declared_teams() {
        Ok(config.team_names.clone())
    } else {
        discover_team_names(&config.cfg_path)
    }
}

/// Fail unless `team` is one of the known teams.
pub fn ensure_known_team(config: &AppConfig, team: &str) -> Result<()> {
    let teams = team_names(config)?;
    if teams.contains(team) {
        Ok(())
    } else {
        Err(Error::unknown_team(team, teams))
    }
}

pub struct CfgExporter<'a> {
    team_name: String,
    config: &'a AppConfig,
    mapper: DeploymentMapper,
}

impl<'a> CfgExporter<'a> {
    pub fn new(team_name: impl Into<String>, config: &'a AppConfig) -> Self {
        Self {
            team_name: team_name.into(),
            config,
            mapper: deployment_mapper,
        }
    }

    pub fn with_mapper(mut self, mapper: DeploymentMapper) -> Self {
        self.mapper = mapper;
        self
    }

    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    /// Parse every deployment file of the team and fold it into an export.
    pub fn build_contents(&self) -> Result<TeamExport> {
        let _span = info_span!("build_contents", team = %self.team_name).entered();

        let mut export = TeamExport::new();
        for path in find_team_cfgs(&self.config.cfg_path, &self.team_name)? {
            debug!("Parsing {}", path.display());
            let deployment = DeploymentFile::create(&path)?;
            (self.mapper)(&mut export, &deployment, self.config);
        }

        debug!(
            "Team {} has {} deployments",
            self.team_name,
            export.deployment_count()
        );
        Ok(export)
    }
}

/// Export a single known team.
pub fn export_team(config: &AppConfig, team: &str) -> Result<ExportDocument> {
    ensure_known_team(config, team)?;

    let mut document = ExportDocument::new();
    document.insert(team, CfgExporter::new(team, config).build_contents()?);
    Ok(document)
}

/// Export every known team.
pub fn export_all(config: &AppConfig) -> Result<ExportDocument> {
    let mut document = ExportDocument::new();
    for team in team_names(config)? {
        let export = CfgExporter::new(team.as_str(), config).build_contents()?;
        document.insert(team, export);
    }
    Ok(document)
}
