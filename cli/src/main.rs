//! CLI entrypoint for twlc
//!
//! This is the main binary that wires together all layers: configuration
//! files and flags are merged into a `LoggerConfig`, the filesystem adapter is
//! injected into the `Logger`, and each message becomes one entry.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::io::{self, BufRead};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use twlc_application::{Clock, SystemClock};
use twlc_infrastructure::{ConfigLoader, LoggerFactory};
use twlc_presentation::{Cli, ConfigReport};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // twlc's own diagnostics go to stderr so they never mix with log output
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    info!("Starting twlc");

    let mut file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {e}"))?
    };
    cli.apply_overrides(&mut file_config.logger);

    if cli.show_config {
        let default_dir = LoggerFactory::default_log_directory()?;
        let resolved = file_config.logger.to_logger_config(&default_dir);
        let toml = ConfigLoader::to_toml(&resolved).context("Failed to render configuration")?;
        let log_file = resolved.log_file_path(SystemClock.now().date());
        print!("{}", ConfigReport::format_sources());
        print!("{}", ConfigReport::format_resolved(&toml, &log_file));
        return Ok(());
    }

    let mut logger = LoggerFactory::from_file_config(&file_config.logger)
        .context("Failed to initialize logger")?;
    debug!(config = ?logger.config(), "Logger ready");

    if cli.messages.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read stdin")?;
            logger.write(&cli.level, line)?;
        }
    } else {
        for message in &cli.messages {
            logger.write(&cli.level, message)?;
        }
    }

    Ok(())
}
