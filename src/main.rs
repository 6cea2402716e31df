use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nametide::config::Config;

mod commands;

#[derive(Parser)]
#[command(
    name = "nametide",
    version,
    about = "Baby name trend analysis over state registration files",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json); overrides the config file
    #[arg(long, global = true)]
    log_format: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Data directory holding one registration file per state
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List names first registered in a given year
    NewNames {
        /// Debut year to inspect
        #[arg(short, long)]
        year: i32,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the top decile of names by registration share
    Popular {
        /// Year to rank
        #[arg(short, long)]
        year: i32,

        /// Print the entire ranking with counts and shares
        #[arg(long)]
        full: bool,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List new names that turn popular within the following decade
    Emerging {
        /// Debut year to inspect
        #[arg(short, long)]
        year: i32,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Tally states that carried emergent names in their debut year
    TrendSetters {
        /// First debut year of the period
        #[arg(long)]
        start: i32,

        /// Last debut year of the period (defaults to --start)
        #[arg(long)]
        end: Option<i32>,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Tally states that picked names up only after they turned popular
    LateAdopters {
        /// First debut year of the period
        #[arg(long)]
        start: i32,

        /// Last debut year of the period (defaults to --start)
        #[arg(long)]
        end: Option<i32>,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = resolve_config(&cli)?;

    let log_format = cli
        .log_format
        .as_deref()
        .unwrap_or(&config.logging.format)
        .to_string();
    setup_tracing(&log_format, cli.verbose, &config.logging.level)?;

    match cli.command {
        Commands::NewNames { year, json, output } => {
            tracing::info!(year, json, "Starting new-names command");
            commands::new_names(config, year, json, output)?;
        }

        Commands::Popular {
            year,
            full,
            json,
            output,
        } => {
            tracing::info!(year, full, json, "Starting popular command");
            commands::popular(config, year, full, json, output)?;
        }

        Commands::Emerging { year, json, output } => {
            tracing::info!(year, json, "Starting emerging command");
            commands::emerging(config, year, json, output)?;
        }

        Commands::TrendSetters {
            start,
            end,
            json,
            output,
        } => {
            tracing::info!(start, end = ?end, json, "Starting trend-setters command");
            commands::trend_setters(config, start, end, json, output)?;
        }

        Commands::LateAdopters {
            start,
            end,
            json,
            output,
        } => {
            tracing::info!(start, end = ?end, json, "Starting late-adopters command");
            commands::late_adopters(config, start, end, json, output)?;
        }
    }

    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };

    if let Some(dir) = &cli.data {
        config.data.dir = dir.clone();
    }

    config.validate()?;
    Ok(config)
}

fn setup_tracing(format: &str, verbose: bool, level: &str) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("nametide=debug,info")
    } else {
        tracing_subscriber::EnvFilter::new(format!("nametide={level},warn"))
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}
