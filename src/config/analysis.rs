//! Analysis and computation configuration

use crate::domain::{RiskThresholds, VolatilityWindow};

/// The Master Analysis Configuration
pub struct AnalysisConfig {
    // Trailing windows over which rolling volatility is computed (short, medium, long)
    pub windows: &'static [VolatilityWindow],
    // The window whose latest value drives the risk classification
    pub risk_window: VolatilityWindow,
    // Band boundaries for the classification (fractional, 0.02 = 2%)
    pub risk: RiskThresholds,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    windows: &[
        VolatilityWindow::new(7),
        VolatilityWindow::new(30),
        VolatilityWindow::new(90),
    ],
    risk_window: VolatilityWindow::new(30),

    // Thresholds can be tuned (also overridable from the command line)
    risk: RiskThresholds {
        low_upper: 0.02,
        high_lower: 0.05,
    },
};
