use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to an optional TOML config file (api_key, output_path, symbols_file)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a symbol's history and render it as an SVG chart
    Render {
        /// Ticker symbol (1-7 uppercase letters, e.g. "AAPL")
        #[arg(long)]
        symbol: String,

        /// Chart type: 1 (line) or 2 (bar)
        #[arg(long, default_value = "1")]
        chart: String,

        /// Time series: 1 (daily), 2 (weekly), 3 (monthly), 4 (intraday)
        #[arg(long, default_value = "1")]
        series: String,

        /// Start date in YYYY-MM-DD format
        #[arg(long)]
        start: String,

        /// End date in YYYY-MM-DD format
        #[arg(short, long)]
        end: String,

        /// Where to write the SVG artifact (overrides config)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Alpha Vantage API key (overrides config and environment)
        #[arg(long)]
        api_key: Option<String>,
    },

    /// List the selectable symbols from the symbols CSV file
    Symbols {
        /// Path to the CSV file (overrides config)
        #[arg(long)]
        file: Option<PathBuf>,
    },
}
