use anyhow::Result;
use cfgexport::cli::Cli;
use cfgexport::commands::{handle_export, ExportConfig};
use cfgexport::observability::init_logging;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    handle_export(ExportConfig::from(cli))
}
