#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod errors;
pub mod models;
pub mod report;
pub mod utils;

// Re-export commonly used types
pub use analysis::VolatilityCalculator;
pub use data::{CsvOptions, load_price_series, read_price_series};
pub use domain::{PricePoint, RiskLevel, RiskThresholds, VolatilityWindow};
pub use errors::{ConfigError, InputError};
pub use models::{PriceSeries, VolatilityAnalysis};
pub use report::{ReportOptions, VolatilityReport, render_summary};

use std::path::PathBuf;

use anyhow::{Context, Result};
// CLI argument parsing
use clap::Parser;

use crate::config::{ANALYSIS, INPUT, REPORT};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// CSV file with at least a date column and a closing-price column
    pub file: PathBuf,

    /// Name of the timestamp column
    #[arg(long, default_value_t = INPUT.date_column.to_string())]
    pub date_column: String,

    /// Name of the closing-price column
    #[arg(long, default_value_t = INPUT.price_column.to_string())]
    pub price_column: String,

    /// Field delimiter
    #[arg(long, default_value_t = INPUT.delimiter as char)]
    pub delimiter: char,

    /// 30D volatility below this is low risk (fraction, 0.02 = 2%)
    #[arg(long, default_value_t = ANALYSIS.risk.low_upper)]
    pub low_threshold: f64,

    /// 30D volatility at or above this is high risk (fraction)
    #[arg(long, default_value_t = ANALYSIS.risk.high_lower)]
    pub high_threshold: f64,

    /// Number of most recent computed rows to show
    #[arg(long, default_value_t = REPORT.tail_rows)]
    pub tail: usize,

    /// Print a JSON report instead of the text summary
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Also write every computed row to this CSV file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

impl Cli {
    pub fn csv_options(&self) -> Result<CsvOptions, ConfigError> {
        if !self.delimiter.is_ascii() {
            return Err(ConfigError::InvalidDelimiter(self.delimiter));
        }
        Ok(CsvOptions {
            date_column: self.date_column.clone(),
            price_column: self.price_column.clone(),
            delimiter: self.delimiter as u8,
        })
    }

    pub fn risk_thresholds(&self) -> Result<RiskThresholds, ConfigError> {
        RiskThresholds::new(self.low_threshold, self.high_threshold)
    }
}

/// Load, analyse and report. This is the public API for the binary to call.
pub fn run(args: &Cli) -> Result<()> {
    let options = args.csv_options()?;
    let thresholds = args.risk_thresholds()?;

    let series = load_price_series(&args.file, &options)
        .with_context(|| format!("Failed to analyse {}", args.file.display()))?;

    let analysis = VolatilityCalculator::default()
        .with_thresholds(thresholds)
        .analyze(&series);

    if let Some(path) = &args.export {
        data::export_analysis_csv(&analysis, path)?;
    }

    if args.json {
        println!("{}", VolatilityReport::new(&analysis, args.tail).to_json()?);
    } else {
        let report_options = ReportOptions {
            tail_rows: args.tail,
            ..Default::default()
        };
        print!("{}", render_summary(&series, &analysis, &report_options));
    }

    Ok(())
}
