//! Terminal report configuration

pub struct ReportConfig {
    /// Rows of the loaded table shown before the metrics
    pub preview_rows: usize,
    /// Most recent computed rows shown at the end of the report
    pub tail_rows: usize,
    /// Decimal places for percentages
    pub pct_precision: usize,
    /// Placeholder for values that cannot be computed
    pub not_available: &'static str,
}

pub const REPORT: ReportConfig = ReportConfig {
    preview_rows: 5,
    tail_rows: 10,
    pct_precision: 2,
    not_available: "N/A",
};
