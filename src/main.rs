use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use stock_charter::cli::commands::{Cli, Commands};
use stock_charter::config::AppConfig;
use stock_charter::errors::Error;
use stock_charter::models::request::ChartRequestParams;
use stock_charter::providers::alphavantage::AlphaVantageProvider;
use stock_charter::render::svg::{DEFAULT_OUTPUT_PATH, SvgChartRenderer};
use stock_charter::requests::{ChartOutcome, render_chart};
use stock_charter::symbols::load_symbols;
use tracing_subscriber::EnvFilter;

const DEFAULT_SYMBOLS_FILE: &str = "stocks.csv";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("ERROR: {error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, Error> {
    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };

    match cli.command {
        Commands::Render {
            symbol,
            chart,
            series,
            start,
            end,
            output,
            api_key,
        } => {
            let params = ChartRequestParams::from_tokens(
                &symbol,
                &chart,
                &series,
                &start,
                &end,
                Utc::now().date_naive(),
            )?;

            let provider = match api_key.or(config.api_key) {
                Some(key) => AlphaVantageProvider::with_api_key(key)?,
                None => AlphaVantageProvider::new()?,
            };

            let output_path = output
                .or(config.output_path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));
            let renderer = SvgChartRenderer::new(output_path);

            match render_chart(&provider, &renderer, &params).await? {
                ChartOutcome::Rendered(path) => {
                    println!("{}", path.display());
                    Ok(ExitCode::SUCCESS)
                }
                outcome @ ChartOutcome::NoData { .. } => {
                    eprintln!("{}", outcome.no_data_message().unwrap_or_default());
                    Ok(ExitCode::FAILURE)
                }
            }
        }

        Commands::Symbols { file } => {
            let path = file
                .or(config.symbols_file)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SYMBOLS_FILE));
            for symbol in load_symbols(&path) {
                println!("{symbol}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
