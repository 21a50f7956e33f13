//! Linkscan main entry point
//!
//! This is the command-line interface for the Linkscan link collector.

use anyhow::Context;
use clap::Parser;
use linkscan::collector::{LinkFilter, Scanner};
use linkscan::config::{load_config_with_hash, validate, Config};
use linkscan::input::{expand_inputs, InputSource};
use linkscan::output::{create_output_handler, OutputFormat};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Linkscan: collects hyperlink references from HTML documents
///
/// Every element of each input document is visited in document order and the
/// resolved `href` of each element exposing one is printed.
#[derive(Parser, Debug)]
#[command(name = "linkscan")]
#[command(version)]
#[command(about = "Collects hyperlink references from HTML documents", long_about = None)]
struct Cli {
    /// HTML files to scan; '-' reads stdin, '@FILE' reads one input per line,
    /// '[1-3]' or '[1,5,7]' expand to several inputs
    #[arg(value_name = "INPUT")]
    inputs: Vec<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// URL every document is treated as loaded from
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Keep only links matching this regex
    #[arg(long, value_name = "REGEX")]
    include: Option<String>,

    /// Drop links matching this regex
    #[arg(long, value_name = "REGEX")]
    exclude: Option<String>,

    /// Also collect `src` values of media, frame and script elements
    #[arg(long)]
    include_sources: bool,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Write output to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<String>,

    /// Show the expanded inputs and effective settings without scanning
    #[arg(long)]
    dry_run: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded configuration
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.document.base_url = Some(base_url.clone());
        }
        if let Some(include) = &self.include {
            config.filter.include = include.clone();
        }
        if let Some(exclude) = &self.exclude {
            config.filter.exclude = exclude.clone();
        }
        if self.include_sources {
            config.collector.include_sources = true;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(output) = &self.output {
            config.output.path = Some(output.clone());
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration, then layer the command line on top
    let (mut config, config_hash) = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (config, Some(hash))
        }
        None => (Config::default(), None),
    };
    cli.apply_overrides(&mut config);
    validate(&config).context("Invalid settings")?;

    let sources = expand_inputs(&cli.inputs)?;
    tracing::debug!("{} input sources", sources.len());

    if cli.dry_run {
        return handle_dry_run(&config, &sources);
    }

    let scanner = Scanner::from_config(&config)?.with_config_hash(config_hash);
    let mut output = create_output_handler(&config.output)?;
    scanner.run(&sources, output.as_mut())?;

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout carries only the collected links.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("linkscan=info,warn"),
            1 => EnvFilter::new("linkscan=debug,info"),
            2 => EnvFilter::new("linkscan=trace,debug"),
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

/// Handles the --dry-run mode: shows what would be scanned
fn handle_dry_run(config: &Config, sources: &[InputSource]) -> anyhow::Result<()> {
    println!("=== Linkscan Dry Run ===\n");

    println!("Document:");
    match &config.document.base_url {
        Some(base_url) => println!("  Base URL: {}", base_url),
        None => println!("  Base URL: file URL of each input (about:blank for stdin)"),
    }

    println!("\nCollector:");
    println!("  Include src values: {}", config.collector.include_sources);

    println!("\nFilter:");
    println!("{}", describe_filter(config)?);

    println!("\nOutput:");
    println!("  Format: {}", config.output.format);
    println!(
        "  Destination: {}",
        config.output.path.as_deref().unwrap_or("stdout")
    );

    println!("\nInputs ({}):", sources.len());
    for source in sources {
        println!("  - {}", source);
    }

    println!("\n✓ Settings are valid");
    Ok(())
}

/// Describes the effective link filter for the dry-run report
fn describe_filter(config: &Config) -> anyhow::Result<String> {
    let filter = LinkFilter::try_from(&config.filter)?;
    if filter.is_pass_through() {
        return Ok("  None (every link is kept)".to_string());
    }

    Ok(format!(
        "  Include: {}\n  Exclude: {}",
        config.filter.include, config.filter.exclude
    ))
}
