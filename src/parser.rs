//! Parser for shell-style `.cfg` deployment files.
//!
//! Each meaningful line has the shape `<keyword> KEY=VALUE`, usually
//! `export KEY='value'`. Blank lines and lines starting with `#` are skipped.

use crate::errors::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Variables of one `.cfg` file, keyed by name.
pub type Variables = BTreeMap<String, String>;

/// Read and parse a `.cfg` file.
pub fn parse_cfg_file(path: &Path) -> Result<Variables> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::file_system_with_source("Failed to read cfg file", path, e))?;
    parse_cfg(&content, path)
}

/// Parse `.cfg` content. `origin` is only used for error reporting.
pub fn parse_cfg(content: &str, origin: &Path) -> Result<Variables> {
    let mut vars = Variables::new();

    for (index, line) in content.lines().enumerate() {
        if is_skippable(line) {
            continue;
        }
        let (key, value) = parse_line(line).map_err(|msg| Error::parse(origin, index + 1, msg))?;
        vars.insert(key, value);
    }

    Ok(vars)
}

fn is_skippable(line: &str) -> bool {
    line.trim().is_empty() || line.starts_with('#')
}

// Pure function to split one assignment line into key and value
fn parse_line(line: &str) -> std::result::Result<(String, String), String> {
    let mut tokens = line.split_whitespace();
    let (Some(_keyword), Some(assignment)) = (tokens.next(), tokens.next()) else {
        return Err(format!("expected '<keyword> KEY=VALUE', found '{}'", line.trim()));
    };
    if tokens.next().is_some() {
        return Err(format!("unexpected tokens after assignment in '{}'", line.trim()));
    }

    let (key, value) = assignment
        .split_once('=')
        .ok_or_else(|| format!("missing '=' in '{}'", line.trim()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty variable name in '{}'", line.trim()));
    }

    Ok((key.to_string(), value.trim().replace('\'', "")))
}
