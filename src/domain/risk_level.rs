use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Discrete risk label derived from the medium-window volatility.
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    #[strum(to_string = "insufficient data")]
    InsufficientData,
    #[strum(to_string = "low risk")]
    Low,
    #[strum(to_string = "medium risk")]
    Medium,
    #[strum(to_string = "high risk")]
    High,
}

/// Boundaries between the risk bands.
///
/// A volatility `v` is low when `v < low_upper`, high when `v >= high_lower`
/// and medium in between.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RiskThresholds {
    pub low_upper: f64,
    pub high_lower: f64,
}

impl RiskThresholds {
    pub fn new(low_upper: f64, high_lower: f64) -> Result<Self, ConfigError> {
        let valid = low_upper.is_finite()
            && high_lower.is_finite()
            && low_upper >= 0.0
            && low_upper < high_lower;
        if !valid {
            return Err(ConfigError::InvalidThresholds {
                low: low_upper,
                high: high_lower,
            });
        }
        Ok(Self {
            low_upper,
            high_lower,
        })
    }

    /// Human readable description of the band a level covers.
    pub fn describe(&self, level: RiskLevel) -> String {
        match level {
            RiskLevel::InsufficientData => "not enough rows for the window".to_string(),
            RiskLevel::Low => format!("< {:.2}%", self.low_upper * 100.0),
            RiskLevel::Medium => format!(
                "{:.2}% .. {:.2}%",
                self.low_upper * 100.0,
                self.high_lower * 100.0
            ),
            RiskLevel::High => format!(">= {:.2}%", self.high_lower * 100.0),
        }
    }
}
