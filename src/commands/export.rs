use crate::cli::{Cli, OutputFormat};
use crate::config::{load_config, AppConfig};
use crate::core::ExportDocument;
use crate::export;
use crate::io::{self, create_writer};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, IsTerminal};
use std::path::PathBuf;

use super::pull::try_pull;

/// Which teams to export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    Team(String),
}

/// Where the exported data goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
    /// One `<team>.<ext>` file per team
    Directory(PathBuf),
}

pub struct ExportConfig {
    pub selection: Selection,
    pub format: OutputFormat,
    pub destination: Destination,
    pub config_file: Option<PathBuf>,
    pub cfg_path: Option<PathBuf>,
    pub pull: bool,
}

impl From<Cli> for ExportConfig {
    fn from(cli: Cli) -> Self {
        let selection = match cli.team {
            Some(team) if !cli.all => Selection::Team(team),
            _ => Selection::All,
        };
        let destination = match (cli.output, cli.output_dir) {
            (Some(file), _) => Destination::File(file),
            (None, Some(dir)) => Destination::Directory(dir),
            (None, None) => Destination::Stdout,
        };

        Self {
            selection,
            format: cli.format,
            destination,
            config_file: cli.config,
            cfg_path: cli.cfg_path,
            pull: cli.pull,
        }
    }
}

pub fn handle_export(config: ExportConfig) -> Result<()> {
    configure_output();
    let app_config = resolve_app_config(&config)?;

    if config.pull {
        try_pull(&app_config.cfg_path)?;
    }

    let document = build_document(&app_config, &config.selection)?;
    write_document(&document, config.format, &config.destination)?;

    if let Selection::Team(team) = &config.selection {
        eprintln!(
            "{}",
            format!(
                ">> {} export for team \"{}\" complete <<",
                config.format.extension(),
                team
            )
            .green()
        );
    }
    Ok(())
}

// Status lines go to stderr, so color follows stderr rather than stdout
fn configure_output() {
    colored::control::set_override(std::io::stderr().is_terminal());
}

fn resolve_app_config(config: &ExportConfig) -> Result<AppConfig> {
    let app_config = load_config(config.config_file.as_deref()).context("Failed to load settings")?;
    Ok(match &config.cfg_path {
        Some(path) => app_config.with_cfg_path(path.clone()),
        None => app_config,
    })
}

// Everything is built before anything is written, so a failure leaves no output
fn build_document(app_config: &AppConfig, selection: &Selection) -> Result<ExportDocument> {
    let document = match selection {
        Selection::All => export::export_all(app_config)?,
        Selection::Team(team) => export::export_team(app_config, team)?,
    };
    tracing::info!("Built export for {} team(s)", document.len());
    Ok(document)
}

pub fn write_document(
    document: &ExportDocument,
    format: OutputFormat,
    destination: &Destination,
) -> Result<()> {
    match destination {
        Destination::Stdout => {
            let stdout = std::io::stdout();
            create_writer(format, Box::new(stdout.lock())).write_document(document)?;
        }
        Destination::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                io::ensure_dir(parent)?;
            }
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            create_writer(format, Box::new(BufWriter::new(file))).write_document(document)?;
            report_exported(path);
        }
        Destination::Directory(dir) => {
            io::ensure_dir(dir)?;
            for (team, export) in &document.teams {
                let path = dir.join(format!("{}.{}", team, format.extension()));
                let file = File::create(&path)
                    .with_context(|| format!("Failed to create output file {}", path.display()))?;
                create_writer(format, Box::new(BufWriter::new(file))).write_team(export)?;
                report_exported(&path);
            }
        }
    }
    Ok(())
}

fn report_exported(path: &std::path::Path) {
    eprintln!("{}", format!(">> exported {} <<", path.display()).cyan());
}
