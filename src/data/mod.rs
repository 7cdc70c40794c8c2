// Data loading and export
pub mod csv_loader;
pub mod export;

// Re-export commonly used items
pub use csv_loader::{CsvOptions, load_price_series, read_price_series};
pub use export::{export_analysis_csv, write_analysis_csv};
