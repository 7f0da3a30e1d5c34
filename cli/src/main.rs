//! fair-value: theoretical stock price from a discounted cash flow valuation.
//!
//! Rates are typed in percent (`--growth 5` is 5%) and converted to fractions
//! before they reach the engine. By default the valuation runs in-process;
//! `--remote` sends it to a running engine over gRPC instead.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod components;
mod config;
mod error;
mod services;

use commands::calculate::{CalculateOptions, InputOverrides};
use commands::OutputFormat;
use engine::valuation::MAX_FORECAST_YEARS;
use config::AppConfig;
use error::{CliError, Result};

#[derive(Parser)]
#[command(name = "fair-value")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON configuration file (defaults to the bundled configuration)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the theoretical stock price
    Calculate {
        /// Current free cash flow
        #[arg(long)]
        fcf: Option<f64>,

        /// Near-term annual growth rate, in percent
        #[arg(long, value_parser = parse_percent_arg)]
        growth: Option<f64>,

        /// Number of high-growth forecast years
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_FORECAST_YEARS)))]
        years: Option<u32>,

        /// Discount rate (required return), in percent
        #[arg(long, value_parser = parse_percent_arg)]
        discount: Option<f64>,

        /// Perpetual growth rate after the forecast, in percent
        #[arg(long, value_parser = parse_percent_arg)]
        terminal_growth: Option<f64>,

        /// Shares outstanding
        #[arg(long)]
        shares: Option<f64>,

        /// Send the calculation to the engine configured in the config file
        #[arg(long)]
        remote: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Also write the cash flow series to this CSV file
        #[arg(long)]
        export_csv: Option<PathBuf>,
    },

    /// Show the default form values
    Defaults {
        /// Ask the engine instead of the local configuration
        #[arg(long)]
        remote: bool,
    },
}

fn parse_percent_arg(s: &str) -> std::result::Result<f64, String> {
    shared::utils::display_format::parse_percent(s).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match run(cli).await {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!("Command failed: {:?}", e);
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String> {
    let config = AppConfig::load(cli.config.as_deref()).map_err(CliError::Config)?;
    tracing::debug!(version = %config.version, "Loaded configuration");

    match cli.command {
        Commands::Calculate {
            fcf,
            growth,
            years,
            discount,
            terminal_growth,
            shares,
            remote,
            format,
            export_csv,
        } => {
            let options = CalculateOptions {
                overrides: InputOverrides {
                    current_fcf: fcf,
                    growth_rate: growth,
                    forecast_years: years,
                    discount_rate: discount,
                    terminal_growth,
                    shares_outstanding: shares,
                },
                remote,
                format,
                export_csv,
            };
            commands::calculate::run(&config, options).await
        }
        Commands::Defaults { remote } => commands::defaults::run(&config, remote).await,
    }
}
