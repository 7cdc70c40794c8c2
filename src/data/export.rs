use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::VolatilityAnalysis;
use crate::utils::TimeUtils;

fn optional_cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Write every analysis row as CSV: `Date,Close,Return,Vol_7D,...`.
/// Undefined volatilities are written as empty cells.
pub fn write_analysis_csv<W: Write>(analysis: &VolatilityAnalysis, writer: W) -> csv::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    let mut header = vec!["Date".to_string(), "Close".to_string(), "Return".to_string()];
    header.extend(analysis.windows.iter().map(|ws| ws.window.column_name()));
    wtr.write_record(&header)?;

    for row in analysis.rows() {
        let mut record = vec![
            TimeUtils::format_timestamp(&row.timestamp),
            row.close.to_string(),
            row.ret.to_string(),
        ];
        record.extend(row.volatilities.into_iter().map(optional_cell));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Export the analysis to a CSV file, creating parent directories as needed.
pub fn export_analysis_csv(analysis: &VolatilityAnalysis, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .context(format!("Failed to create directory: {}", parent.display()))?;
    }
    let file = File::create(path).context(format!("Failed to create file: {}", path.display()))?;
    write_analysis_csv(analysis, BufWriter::new(file))
        .context(format!("Failed to write analysis to: {}", path.display()))?;
    log::info!("Exported {} rows to {}", analysis.len(), path.display());
    Ok(())
}
