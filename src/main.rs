//! Sumi-Scout main entry point
//!
//! This is the command-line interface for the Sumi-Scout site mapper.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use sumi_scout::config::{load_config_with_hash, prepare_start_url, validate, Config};
use sumi_scout::crawler::crawl;
use sumi_scout::output::{write_report, OutputFormat};
use tracing_subscriber::EnvFilter;

/// Sumi-Scout: a concurrent site mapper
///
/// Sumi-Scout crawls one site from a start URL with a pool of workers,
/// following links on the start URL's host up to a maximum depth, and
/// reports the scripts, images, stylesheets and links found on every page.
#[derive(Parser, Debug)]
#[command(name = "sumi-scout")]
#[command(version)]
#[command(about = "A concurrent site mapper", long_about = None)]
struct Cli {
    /// Start URL; `http://` is assumed when no scheme is given
    #[arg(value_name = "URL")]
    url: String,

    /// Number of concurrent workers [default: 2]
    #[arg(value_name = "WORKERS")]
    workers: Option<usize>,

    /// Maximum link depth, counting the start URL as 1 [default: 5]
    #[arg(value_name = "MAX_DEPTH")]
    max_depth: Option<u32>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let seed = prepare_start_url(&cli.url)
        .with_context(|| format!("Invalid start URL {:?}", cli.url))?;

    let (config, config_hash) = load_configuration(&cli)?;

    let mut report = crawl(seed, &config).await.context("Crawl failed")?;
    report.summary.config_hash = config_hash;

    write_report(&report, config.output.format, config.output.path.as_deref())
        .context("Failed to write report")?;

    Ok(())
}

/// Merges defaults, the optional config file and command-line overrides
///
/// Returns the validated configuration and the config file's hash, if a file
/// was given.
fn load_configuration(cli: &Cli) -> anyhow::Result<(Config, Option<String>)> {
    let (mut config, config_hash) = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (config, Some(hash))
        }
        None => (Config::default(), None),
    };

    if let Some(workers) = cli.workers {
        config.crawler.workers = workers;
    }
    if let Some(max_depth) = cli.max_depth {
        config.crawler.max_depth = max_depth;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(output) = &cli.output {
        config.output.path = Some(output.clone());
    }

    validate(&config).context("Invalid configuration")?;

    Ok((config, config_hash))
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout is reserved for the report.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sumi_scout=info,warn"),
            1 => EnvFilter::new("sumi_scout=debug,info"),
            2 => EnvFilter::new("sumi_scout=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
