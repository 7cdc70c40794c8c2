// Return and rolling volatility computations
pub mod returns;
pub mod risk;
pub mod rolling;
pub mod volatility_calculator;

// Re-export commonly used items
pub use returns::compute_returns;
pub use risk::classify_risk;
pub use rolling::{rolling_std, sample_std_dev};
pub use volatility_calculator::VolatilityCalculator;
