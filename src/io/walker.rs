use crate::core::deployment::{DeploymentName, CFG_EXTENSION};
use crate::errors::{Error, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursive finder for `.cfg` files under a root directory.
pub struct CfgWalker {
    root: PathBuf,
    pattern: Option<glob::Pattern>,
}

impl CfgWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            pattern: None,
        }
    }

    /// Only keep files owned by `team`, i.e. named `<team>_*.cfg`.
    pub fn for_team(mut self, team: &str) -> Result<Self> {
        let pattern = format!("{}_*{}", glob::Pattern::escape(team), CFG_EXTENSION);
        self.pattern = Some(glob::Pattern::new(&pattern)?);
        Ok(self)
    }

    /// Matching files, sorted by path.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(Error::file_system("cfg directory not found", &self.root));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| self.root.clone());
                match e.into_io_error() {
                    Some(io) => Error::file_system_with_source("Failed to walk cfg directory", path, io),
                    None => Error::file_system("Failed to walk cfg directory", path),
                }
            })?;

            if entry.file_type().is_file() && self.should_process(entry.path()) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        match &self.pattern {
            Some(pattern) => pattern.matches(name),
            None => name.ends_with(CFG_EXTENSION),
        }
    }
}

/// All `.cfg` files owned by `team` under `root`.
pub fn find_team_cfgs(root: &Path, team: &str) -> Result<Vec<PathBuf>> {
    CfgWalker::new(root.to_path_buf()).for_team(team)?.walk()
}

/// Team names found in the first segment of every well-formed `.cfg` name.
pub fn discover_team_names(root: &Path) -> Result<BTreeSet<String>> {
    let files = CfgWalker::new(root.to_path_buf()).walk()?;
    let mut teams = BTreeSet::new();

    for file in files {
        match DeploymentName::parse(&file) {
            Ok(name) => {
                teams.insert(name.team);
            }
            Err(e) => tracing::warn!("Skipping during team discovery: {}", e),
        }
    }

    Ok(teams)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "export A=1\n").unwrap();
    }

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "payments_eu_api.cfg");
        touch(dir.path(), "nested/payments_us_worker.cfg");
        touch(dir.path(), "search_eu_api.cfg");
        touch(dir.path(), "payments-legacy_eu_api.cfg");
        touch(dir.path(), "payments_eu_api.cfg.bak");
        touch(dir.path(), "README.md");
        dir
    }

    #[test]
    fn test_find_team_cfgs_is_recursive_and_exact() {
        let dir = fixture();
        let files = find_team_cfgs(dir.path(), "payments").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"payments_eu_api.cfg".to_string()));
        assert!(names.contains(&"payments_us_worker.cfg".to_string()));
    }

    #[test]
    fn test_glob_metacharacters_in_team_are_literal() {
        let dir = fixture();
        assert!(find_team_cfgs(dir.path(), "pay*").unwrap().is_empty());
    }

    #[test]
    fn test_discover_team_names() {
        let dir = fixture();
        touch(dir.path(), "orphan.cfg");
        let teams = discover_team_names(dir.path()).unwrap();
        let expected: BTreeSet<String> = ["payments", "payments-legacy", "search"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(teams, expected);
    }

    #[test]
    fn test_missing_root_is_error() {
        let dir = TempDir::new().unwrap();
        let err = find_team_cfgs(&dir.path().join("missing"), "payments").unwrap_err();
        assert!(matches!(err, Error::FileSystem { .. }));
    }
}
