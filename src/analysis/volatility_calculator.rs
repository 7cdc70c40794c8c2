use crate::analysis::returns::compute_returns;
use crate::analysis::risk::classify_risk;
use crate::analysis::rolling::rolling_std;
use crate::config::ANALYSIS;
use crate::domain::{RiskThresholds, VolatilityWindow};
use crate::models::{PriceSeries, VolatilityAnalysis, WindowSeries};

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_ROLLING_WINDOWS;

/// Computes returns, rolling volatilities and the risk label for a price series.
///
/// Holds no state between runs; every call to [`analyze`](Self::analyze)
/// derives everything from the series it is given.
#[derive(Debug, Clone)]
pub struct VolatilityCalculator {
    windows: Vec<VolatilityWindow>,
    risk_window: VolatilityWindow,
    thresholds: RiskThresholds,
}

impl Default for VolatilityCalculator {
    fn default() -> Self {
        Self::new(
            ANALYSIS.windows.to_vec(),
            ANALYSIS.risk_window,
            ANALYSIS.risk,
        )
    }
}

impl VolatilityCalculator {
    /// The risk window is always analysed, even when missing from `windows`.
    pub fn new(
        mut windows: Vec<VolatilityWindow>,
        risk_window: VolatilityWindow,
        thresholds: RiskThresholds,
    ) -> Self {
        if !windows.contains(&risk_window) {
            windows.push(risk_window);
        }
        windows.sort();
        windows.dedup();
        Self {
            windows,
            risk_window,
            thresholds,
        }
    }

    pub fn with_thresholds(mut self, thresholds: RiskThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn windows(&self) -> &[VolatilityWindow] {
        &self.windows
    }

    pub fn thresholds(&self) -> &RiskThresholds {
        &self.thresholds
    }

    pub fn analyze(&self, series: &PriceSeries) -> VolatilityAnalysis {
        let returns = compute_returns(&series.close_prices);

        let windows: Vec<WindowSeries> = self
            .windows
            .iter()
            .map(|&window| WindowSeries {
                window,
                values: rolling_std(&returns, window.days),
            })
            .collect();

        let latest_risk_vol = windows
            .iter()
            .find(|ws| ws.window == self.risk_window)
            .and_then(WindowSeries::latest);
        let risk = classify_risk(latest_risk_vol, &self.thresholds);

        #[cfg(debug_assertions)]
        if PRINT_ROLLING_WINDOWS {
            for ws in &windows {
                log::debug!("Latest {} volatility: {:?}", ws.window, ws.latest());
            }
        }
        log::info!(
            "Analysed {} rows: {} volatility {:?} -> {}",
            series.len(),
            self.risk_window,
            latest_risk_vol,
            risk
        );

        VolatilityAnalysis {
            timestamps: series.timestamps.clone(),
            close_prices: series.close_prices.clone(),
            returns,
            windows,
            risk_window: self.risk_window,
            thresholds: self.thresholds,
            risk,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PricePoint, RiskLevel};
    use chrono::{Duration, NaiveDate};

    fn daily_series(prices: &[f64]) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let points = prices
            .iter()
            .enumerate()
            .map(|(i, &p)| PricePoint::new(start + Duration::days(i as i64), p))
            .collect();
        PriceSeries::from_points(points).unwrap()
    }

    const W7: VolatilityWindow = VolatilityWindow::new(7);
    const W30: VolatilityWindow = VolatilityWindow::new(30);
    const W90: VolatilityWindow = VolatilityWindow::new(90);

    #[test]
    fn test_default_windows() {
        let calc = VolatilityCalculator::default();
        assert_eq!(calc.windows(), &[W7, W30, W90]);
        assert_eq!(calc.thresholds(), &ANALYSIS.risk);
    }

    #[test]
    fn test_risk_window_is_always_included() {
        let calc = VolatilityCalculator::new(vec![W7], VolatilityWindow::new(14), ANALYSIS.risk);
        assert_eq!(calc.windows(), &[W7, VolatilityWindow::new(14)]);
    }

    #[test]
    fn test_eight_point_example() {
        let prices = [100.0, 102.0, 101.0, 105.0, 103.0, 107.0, 110.0, 108.0];
        let analysis = VolatilityCalculator::default().analyze(&daily_series(&prices));

        assert_eq!(analysis.len(), 8);
        assert_eq!(analysis.returns[0], 0.0);
        assert!((analysis.returns[1] - 0.02).abs() < 1e-12);

        // Return[0] is a defined zero, so the first full window ends at index 6
        let vol_7d = &analysis.window_series(W7).unwrap().values;
        assert!(vol_7d[..6].iter().all(Option::is_none));
        let first = crate::analysis::rolling::sample_std_dev(&analysis.returns[0..7]).unwrap();
        assert!((vol_7d[6].unwrap() - first).abs() < 1e-15);
        let expected = crate::analysis::rolling::sample_std_dev(&analysis.returns[1..8]).unwrap();
        assert!((vol_7d[7].unwrap() - expected).abs() < 1e-15);
        assert!((vol_7d[7].unwrap() - 0.026_301_558_925_354_726).abs() < 1e-12);

        assert_eq!(analysis.latest(W30), None);
        assert_eq!(analysis.latest(W90), None);
        assert_eq!(analysis.risk, RiskLevel::InsufficientData);
    }

    #[test]
    fn test_constant_series_has_zero_volatility() {
        let analysis = VolatilityCalculator::default().analyze(&daily_series(&[250.0; 95]));

        assert!(analysis.returns.iter().all(|&r| r == 0.0));
        for ws in &analysis.windows {
            let first = ws.window.first_defined_index();
            assert!(ws.values[..first].iter().all(Option::is_none));
            assert!(ws.values[first..].iter().all(|v| *v == Some(0.0)));
        }
        assert_eq!(analysis.risk, RiskLevel::Low);
    }

    #[test]
    fn test_defined_exactly_from_full_window() {
        let prices: Vec<f64> = (0..30).map(|i| 100.0 + (i % 4) as f64).collect();
        let analysis = VolatilityCalculator::default().analyze(&daily_series(&prices));

        let vol_30d = &analysis.window_series(W30).unwrap().values;
        assert!(vol_30d[..29].iter().all(Option::is_none));
        assert!(vol_30d[29].is_some());
        assert!(analysis.latest_risk_volatility().is_some());
        assert_eq!(analysis.latest(W90), None);
    }

    #[test]
    fn test_high_volatility_series() {
        // Alternating +/-10% moves
        let prices: Vec<f64> = (0..40)
            .map(|i| if i % 2 == 0 { 100.0 } else { 110.0 })
            .collect();
        let analysis = VolatilityCalculator::default().analyze(&daily_series(&prices));
        assert_eq!(analysis.risk, RiskLevel::High);
    }

    #[test]
    fn test_custom_thresholds_change_the_label() {
        // Alternating 100 / 101 gives roughly 1% volatility
        let prices: Vec<f64> = (0..40)
            .map(|i| if i % 2 == 0 { 100.0 } else { 101.0 })
            .collect();
        let series = daily_series(&prices);
        let strict = RiskThresholds::new(0.001, 0.005).unwrap();

        let default_risk = VolatilityCalculator::default().analyze(&series).risk;
        let strict_risk = VolatilityCalculator::default()
            .with_thresholds(strict)
            .analyze(&series)
            .risk;

        assert_eq!(default_risk, RiskLevel::Low);
        assert_eq!(strict_risk, RiskLevel::High);
    }

    #[test]
    fn test_tail_rows() {
        let prices: Vec<f64> = (0..12).map(|i| 100.0 + i as f64).collect();
        let analysis = VolatilityCalculator::default().analyze(&daily_series(&prices));

        let tail = analysis.tail(10);
        assert_eq!(tail.len(), 10);
        assert_eq!(tail[0].close, 102.0);
        assert_eq!(tail[9].close, 111.0);
        assert_eq!(tail[9].volatilities.len(), 3);
        assert!(tail[9].volatilities[0].is_some());
        assert!(tail[9].volatilities[1].is_none());
        assert_eq!(analysis.tail(50).len(), 12);
    }
}
