//! Plain-text rendering of an analysis for the terminal.

use std::fmt::Write;

use strum::IntoEnumIterator;

use crate::config::REPORT;
use crate::domain::RiskLevel;
use crate::models::{AnalysisRow, PriceSeries, VolatilityAnalysis};
use crate::utils::TimeUtils;
use crate::utils::maths_utils::to_pct;

/// Knobs for the text report
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportOptions {
    pub preview_rows: usize,
    pub tail_rows: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            preview_rows: REPORT.preview_rows,
            tail_rows: REPORT.tail_rows,
        }
    }
}

/// `1.23%`, or `N/A` when the value is undefined
pub fn format_pct(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.*}%", REPORT.pct_precision, to_pct(v)),
        _ => REPORT.not_available.to_string(),
    }
}

fn format_cell(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.6}", v),
        _ => REPORT.not_available.to_string(),
    }
}

fn section_heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{}\n{}", title, "-".repeat(title.len()));
}

fn render_preview(out: &mut String, series: &PriceSeries, rows: usize) {
    section_heading(out, &format!("Data Preview (first {} rows)", rows.min(series.len())));
    let _ = writeln!(out, "{:<20} {:>14}", "Date", "Close");
    for point in series.head(rows) {
        let _ = writeln!(
            out,
            "{:<20} {:>14.4}",
            TimeUtils::format_timestamp(&point.timestamp),
            point.close
        );
    }
}

fn render_metrics(out: &mut String, analysis: &VolatilityAnalysis) {
    section_heading(out, "Volatility Metrics (Std Dev of Daily Returns)");
    for ws in &analysis.windows {
        let label = format!("{} Volatility:", ws.window);
        let _ = writeln!(out, "  {:<20} {:>10}", label, format_pct(ws.latest()));
    }
    let risk_label = format!("Risk Level ({}):", analysis.risk_window);
    let _ = writeln!(out, "  {:<20} {:>10}", risk_label, analysis.risk);

    let _ = writeln!(out, "\n  Risk bands ({} volatility):", analysis.risk_window);
    for level in RiskLevel::iter().filter(|l| *l != RiskLevel::InsufficientData) {
        let _ = writeln!(
            out,
            "    {:<12} {}",
            level.to_string(),
            analysis.thresholds.describe(level)
        );
    }
}

fn render_table(out: &mut String, analysis: &VolatilityAnalysis, rows: &[AnalysisRow]) {
    section_heading(out, &format!("Last {} Records", rows.len()));

    let _ = write!(out, "{:<20} {:>14} {:>10}", "Date", "Close", "Return");
    for ws in &analysis.windows {
        let _ = write!(out, " {:>10}", ws.window.column_name());
    }
    let _ = writeln!(out);

    for row in rows {
        let _ = write!(
            out,
            "{:<20} {:>14.4} {:>10}",
            TimeUtils::format_timestamp(&row.timestamp),
            row.close,
            format_cell(Some(row.ret))
        );
        for vol in &row.volatilities {
            let _ = write!(out, " {:>10}", format_cell(*vol));
        }
        let _ = writeln!(out);
    }
}

/// Full text report: preview, price range, metrics and the most recent rows.
pub fn render_summary(
    series: &PriceSeries,
    analysis: &VolatilityAnalysis,
    options: &ReportOptions,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Cryptocurrency Volatility Analyzer");
    let _ = writeln!(out, "==================================");

    render_preview(&mut out, series, options.preview_rows);

    if let (Some(first), Some(last), Some((low, high))) = (
        series.first_timestamp(),
        series.last_timestamp(),
        series.price_range(),
    ) {
        let _ = writeln!(
            out,
            "\n{} rows from {} to {}, close range {:.4} .. {:.4}",
            series.len(),
            TimeUtils::format_timestamp(&first),
            TimeUtils::format_timestamp(&last),
            low,
            high
        );
    }

    render_metrics(&mut out, analysis);
    render_table(&mut out, analysis, &analysis.tail(options.tail_rows));
    out
}
