use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::{RiskLevel, RiskThresholds};
use crate::models::{AnalysisRow, VolatilityAnalysis};

/// Latest value of one window; `volatility` is `null` when undefined
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WindowSummary {
    pub window_days: usize,
    pub volatility: Option<f64>,
}

/// Machine-readable counterpart of the text summary
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct VolatilityReport {
    pub rows: usize,
    pub windows: Vec<WindowSummary>,
    pub risk_window_days: usize,
    pub risk: RiskLevel,
    pub risk_label: String,
    pub thresholds: RiskThresholds,
    pub recent: Vec<AnalysisRow>,
}

impl VolatilityReport {
    pub fn new(analysis: &VolatilityAnalysis, tail_rows: usize) -> Self {
        Self {
            rows: analysis.len(),
            windows: analysis
                .windows
                .iter()
                .map(|ws| WindowSummary {
                    window_days: ws.window.days,
                    volatility: ws.latest(),
                })
                .collect(),
            risk_window_days: analysis.risk_window.days,
            risk: analysis.risk,
            risk_label: analysis.risk.to_string(),
            thresholds: analysis.thresholds,
            recent: analysis.tail(tail_rows),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize volatility report")
    }
}
