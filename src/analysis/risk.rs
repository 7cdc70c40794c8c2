use crate::domain::{RiskLevel, RiskThresholds};

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_RISK_CLASSIFICATION;

/// Map the latest medium-window volatility to a risk band.
pub fn classify_risk(volatility: Option<f64>, thresholds: &RiskThresholds) -> RiskLevel {
    #[cfg(debug_assertions)]
    if PRINT_RISK_CLASSIFICATION {
        log::debug!(
            "Classifying volatility {:?} against low < {} / high >= {}",
            volatility,
            thresholds.low_upper,
            thresholds.high_lower
        );
    }

    match volatility {
        Some(v) if v.is_nan() => RiskLevel::InsufficientData,
        None => RiskLevel::InsufficientData,
        Some(v) if v < thresholds.low_upper => RiskLevel::Low,
        Some(v) if v < thresholds.high_lower => RiskLevel::Medium,
        Some(_) => RiskLevel::High,
    }
}
