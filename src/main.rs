use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use payroll_registry::config::ConfigLoader;
use payroll_registry::logging::init_logging;
use payroll_registry::shell::Session;

#[derive(Parser)]
#[command(name = "payroll-registry", version)]
#[command(about = "Interactive payroll department registry of work types")]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ConfigLoader::load_or_default(cli.config.as_ref())
        .context("Failed to load configuration")?;

    let mut session = Session::new(config, io::stdin().lock(), io::stdout().lock());
    session.run().context("Console I/O failed")?;

    Ok(())
}
