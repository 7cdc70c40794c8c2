// Domain models for volatility analysis
// These modules contain pure data independent of presentation

pub mod price_series;
pub mod volatility;

// Re-export key types for convenience
pub use price_series::PriceSeries;
pub use volatility::{AnalysisRow, VolatilityAnalysis, WindowSeries};
