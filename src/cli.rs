use clap::{ArgGroup, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cfgexport")]
#[command(about = "Export team .cfg files to JSON or YAML.", long_about = None)]
#[command(version)]
#[command(group(
    ArgGroup::new("selection")
        .required(true)
        .args(["all", "team"])
))]
pub struct Cli {
    /// Team name to export configuration for
    #[arg(long)]
    pub team: Option<String>,

    /// Export all team configurations
    #[arg(long)]
    pub all: bool,

    /// Format to export the configuration
    #[arg(short, long, value_enum)]
    pub format: OutputFormat,

    /// Pull latest changes from remote before exporting
    #[arg(long)]
    pub pull: bool,

    /// Settings file (defaults to the nearest private.yaml)
    #[arg(short, long, env = "CFGEXPORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory containing .cfg files (overrides cfg_path from settings)
    #[arg(long = "cfg-path", env = "CFGEXPORT_CFG_PATH")]
    pub cfg_path: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long, conflicts_with = "output_dir")]
    pub output: Option<PathBuf>,

    /// Write one <team>.<format> file per team into this directory
    #[arg(long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl OutputFormat {
    /// File extension used for per-team files
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}
