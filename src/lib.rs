// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod io;
pub mod observability;
pub mod parser;

// Re-export commonly used types
pub use crate::cli::OutputFormat;
pub use crate::config::AppConfig;
pub use crate::core::{DeploymentFile, ExportDocument, TeamExport};
pub use crate::errors::{Error, Result};
pub use crate::export::{export_all, export_team, CfgExporter, DeploymentMapper};
pub use crate::io::output::{create_writer, OutputWriter};
pub use crate::parser::{parse_cfg, parse_cfg_file, Variables};
