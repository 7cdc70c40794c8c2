use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::{RiskLevel, RiskThresholds, VolatilityWindow};

/// Rolling volatility for one window, aligned with the input rows.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WindowSeries {
    pub window: VolatilityWindow,
    pub values: Vec<Option<f64>>,
}

impl WindowSeries {
    /// Value at the last row; `None` when the series is shorter than the window.
    pub fn latest(&self) -> Option<f64> {
        self.values.last().copied().flatten()
    }
}

/// One computed row: the input observation plus its derived values.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AnalysisRow {
    pub timestamp: NaiveDateTime,
    pub close: f64,
    #[serde(rename = "return")]
    pub ret: f64,
    /// One entry per analysed window, in the order of `VolatilityAnalysis::windows`
    pub volatilities: Vec<Option<f64>>,
}

/// Result of a single analysis run.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct VolatilityAnalysis {
    pub timestamps: Vec<NaiveDateTime>,
    pub close_prices: Vec<f64>,
    pub returns: Vec<f64>,
    pub windows: Vec<WindowSeries>,
    pub risk_window: VolatilityWindow,
    pub thresholds: RiskThresholds,
    pub risk: RiskLevel,
}

impl VolatilityAnalysis {
    pub fn len(&self) -> usize {
        self.close_prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.close_prices.is_empty()
    }

    pub fn window_series(&self, window: VolatilityWindow) -> Option<&WindowSeries> {
        self.windows.iter().find(|ws| ws.window == window)
    }

    /// Latest rolling volatility for `window`, if it was analysed and is defined
    pub fn latest(&self, window: VolatilityWindow) -> Option<f64> {
        self.window_series(window).and_then(WindowSeries::latest)
    }

    pub fn latest_risk_volatility(&self) -> Option<f64> {
        self.latest(self.risk_window)
    }

    pub fn get_row(&self, idx: usize) -> AnalysisRow {
        AnalysisRow {
            timestamp: self.timestamps[idx],
            close: self.close_prices[idx],
            ret: self.returns[idx],
            volatilities: self.windows.iter().map(|ws| ws.values[idx]).collect(),
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = AnalysisRow> + '_ {
        (0..self.len()).map(|idx| self.get_row(idx))
    }

    /// The most recent `n` rows, oldest first
    pub fn tail(&self, n: usize) -> Vec<AnalysisRow> {
        let start = self.len().saturating_sub(n);
        (start..self.len()).map(|idx| self.get_row(idx)).collect()
    }
}
