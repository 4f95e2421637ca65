use std::fmt::Display;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use step_tracker::config::TrackerConfig;
use step_tracker::ingest::{self, IngestResult};
use step_tracker::models::Person;
use step_tracker::records::{ActivityParser, StepsRecord, TrainingRecord};

#[derive(Parser)]
#[command(name = "step-tracker")]
#[command(about = "Computes distance, speed and calories from activity records")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./tracker.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Person name
    #[arg(long)]
    name: Option<String>,

    /// Person weight in kilograms
    #[arg(long)]
    weight: Option<f64>,

    /// Person height in meters
    #[arg(long)]
    height: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report day-steps records ("<steps>,<duration>")
    Steps(BatchArgs),

    /// Report training records ("<steps>,<activity>,<duration>")
    Training(BatchArgs),

    /// Print the person profile
    Profile,
}

#[derive(Args)]
struct BatchArgs {
    /// Read records from this file (one per line)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Records given directly on the command line; stdin is read when neither
    /// these nor --input are given
    #[arg(allow_hyphen_values = true)]
    lines: Vec<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = TrackerConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;
    if let Some(name) = cli.name {
        config.person.name = name;
    }
    if let Some(weight) = cli.weight {
        config.person.weight = weight;
    }
    if let Some(height) = cli.height {
        config.person.height = height;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    config.validate()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    let (plain, json) = if cli.json_logs {
        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr);
        (None, Some(layer))
    } else {
        let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
        (Some(layer), None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(plain)
        .with(json)
        .init();

    tracing::info!("Starting step-tracker v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Steps(args) => {
            let mut parser = StepsRecord::new(config.person.clone());
            run_batch(&mut parser, &config.person, args)?;
        }
        Commands::Training(args) => {
            let mut parser = TrainingRecord::new(config.person.clone());
            run_batch(&mut parser, &config.person, args)?;
        }
        Commands::Profile => {
            print!("{}", config.person);
        }
    }

    Ok(())
}

fn run_batch<P: ActivityParser>(parser: &mut P, person: &Person, args: BatchArgs) -> Result<()> {
    let lines = load_lines(args.lines, args.input)?;
    tracing::info!("Processing {} {} records", lines.len(), parser.kind());

    let result = ingest::ingest_lines(&lines, parser);
    emit(&result, person, args.format)
}

fn load_lines(lines: Vec<String>, input: Option<PathBuf>) -> Result<Vec<String>> {
    if !lines.is_empty() {
        return Ok(lines);
    }

    if let Some(path) = input {
        return ingest::read_lines(&path)
            .with_context(|| format!("Failed to read input file {}", path.display()));
    }

    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read records from stdin")?;
    Ok(ingest::collect_lines(&content))
}

fn emit<S: Serialize + Display>(
    result: &IngestResult<S>,
    person: &Person,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{}", person);
            for report in result.reports() {
                println!("{}", report);
            }
            if !result.errors.is_empty() {
                tracing::warn!("{} records could not be processed", result.errors.len());
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
    }
    Ok(())
}
