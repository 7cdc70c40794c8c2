//! Configuration module for the volatility analyzer.

pub mod analysis;

pub mod debug;

pub mod input;
pub mod report;

// Re-export commonly used items
pub use analysis::ANALYSIS;
pub use input::INPUT;
pub use report::REPORT;
