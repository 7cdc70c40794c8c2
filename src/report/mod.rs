// Rendering of analysis results (terminal text and JSON)
pub mod json;
pub mod summary;

pub use json::VolatilityReport;
pub use summary::{ReportOptions, format_pct, render_summary};
