//! mcprice - Monte Carlo option pricing from historical closes
//!
//! Logs go to stderr so that JSON output on stdout stays machine-readable.

use clap::Parser;
use service_cli::cli::{Cli, Commands};
use service_cli::config::{build_config, CliConfig};
use service_cli::{commands, Result};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(config: &CliConfig, verbose: bool) {
    let level = if verbose {
        "debug"
    } else {
        config.log_level.as_filter_str()
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.overrides())?;

    init_tracing(&config, cli.verbose);
    debug!(?config, "Effective configuration");

    let output = match &cli.command {
        Commands::Calibrate(args) => commands::calibrate::run(&config, args)?,
        Commands::Price(args) => commands::price::run(&config, args)?,
        Commands::Check => commands::check::run(&config)?,
    };

    print!("{}", output);
    Ok(())
}
