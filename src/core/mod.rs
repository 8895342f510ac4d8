pub mod deployment;

pub use deployment::DeploymentFile;

use crate::parser::Variables;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Exported data for one team: cluster -> deployment type -> variables.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamExport {
    pub clusters: BTreeMap<String, BTreeMap<String, Variables>>,
}

impl TeamExport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a deployment's variables under its cluster and type.
    pub fn insert(&mut self, cluster: &str, deployment_type: &str, variables: Variables) {
        self.clusters
            .entry(cluster.to_string())
            .or_default()
            .insert(deployment_type.to_string(), variables);
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn deployment_count(&self) -> usize {
        self.clusters.values().map(BTreeMap::len).sum()
    }
}

/// The full document written by an export: team -> team export.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExportDocument {
    pub teams: BTreeMap<String, TeamExport>,
}

impl ExportDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, team: impl Into<String>, export: TeamExport) {
        self.teams.insert(team.into(), export);
    }

    pub fn get(&self, team: &str) -> Option<&TeamExport> {
        self.teams.get(team)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}
