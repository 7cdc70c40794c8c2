// Domain types and value objects
pub mod price_point;
pub mod risk_level;
pub mod window;

// Re-export commonly used types
pub use price_point::PricePoint;
pub use risk_level::{RiskLevel, RiskThresholds};
pub use window::VolatilityWindow;
