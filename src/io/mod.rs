pub mod output;
pub mod walker;

pub use output::{create_writer, JsonWriter, OutputWriter, YamlWriter};
pub use walker::{discover_team_names, find_team_cfgs, CfgWalker};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {}", path.display()))?;
    }
    Ok(())
}
