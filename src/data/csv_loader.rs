//! Reads a delimited price table into a [`PriceSeries`].
//!
//! The table needs a header row naming a timestamp column and a closing-price
//! column. Other columns are ignored. Required columns are located by exact
//! name and never substituted by a look-alike (`Adj Close` is not `Close`).

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::config::INPUT;
#[cfg(debug_assertions)]
use crate::config::debug::PRINT_CSV_ROWS;
use crate::domain::PricePoint;
use crate::errors::InputError;
use crate::models::PriceSeries;
use crate::utils::TimeUtils;

/// Column names and delimiter used when reading the table
#[derive(Debug, Clone, PartialEq)]
pub struct CsvOptions {
    pub date_column: String,
    pub price_column: String,
    pub delimiter: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            date_column: INPUT.date_column.to_string(),
            price_column: INPUT.price_column.to_string(),
            delimiter: INPUT.delimiter,
        }
    }
}

fn column_index(headers: &csv::StringRecord, column: &str) -> Result<usize, InputError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| InputError::MissingColumn {
            column: column.to_string(),
        })
}

fn parse_price(text: &str, row: usize) -> Result<f64, InputError> {
    match text.trim().parse::<f64>() {
        Ok(price) if price.is_finite() && price > 0.0 => Ok(price),
        _ => Err(InputError::InvalidPrice {
            row,
            value: text.to_string(),
        }),
    }
}

/// Parse a price table from any reader.
///
/// Rows are numbered from 1 (the first data row after the header) in errors.
pub fn read_price_series<R: Read>(reader: R, options: &CsvOptions) -> Result<PriceSeries, InputError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let date_idx = column_index(&headers, &options.date_column)?;
    let price_idx = column_index(&headers, &options.price_column)?;

    let mut points = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let row = i + 1;

        let date_text = record.get(date_idx).unwrap_or_default();
        let timestamp =
            TimeUtils::parse_timestamp(date_text).ok_or_else(|| InputError::InvalidTimestamp {
                row,
                value: date_text.to_string(),
            })?;
        let close = parse_price(record.get(price_idx).unwrap_or_default(), row)?;

        #[cfg(debug_assertions)]
        if PRINT_CSV_ROWS {
            log::debug!("Row {}: {} close {}", row, timestamp, close);
        }

        points.push(PricePoint::new(timestamp, close));
    }

    let series = PriceSeries::from_points(points)?;
    log::info!(
        "Loaded {} price rows ('{}' / '{}')",
        series.len(),
        options.date_column,
        options.price_column
    );
    Ok(series)
}

/// Open `path` and parse it with [`read_price_series`].
pub fn load_price_series(path: &Path, options: &CsvOptions) -> Result<PriceSeries, InputError> {
    let file = File::open(path)?;
    read_price_series(BufReader::new(file), options)
}
