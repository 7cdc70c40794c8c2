use volatility_analyzer::{
    CsvOptions, InputError, ReportOptions, RiskLevel, RiskThresholds, VolatilityCalculator,
    VolatilityReport, VolatilityWindow, read_price_series, render_summary,
};

/// Daily CSV with `days` rows, prices produced by `price(i)`
fn daily_csv(days: usize, price: impl Fn(usize) -> f64) -> String {
    let start = chrono::NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let mut csv = String::from("Date,Open,High,Low,Close,Adj Close,Volume\n");
    for i in 0..days {
        let date = start + chrono::Duration::days(i as i64);
        let p = price(i);
        csv.push_str(&format!("{},{p},{p},{p},{p},{p},1000\n", date.format("%Y-%m-%d")));
    }
    csv
}

#[test]
fn test_full_history_has_all_windows() {
    // Alternating 100 / 103: ~3% daily moves, medium risk under default bands
    let csv = daily_csv(120, |i| if i % 2 == 0 { 100.0 } else { 103.0 });
    let series = read_price_series(csv.as_bytes(), &CsvOptions::default()).unwrap();
    let analysis = VolatilityCalculator::default().analyze(&series);

    for days in [7, 30, 90] {
        let vol = analysis.latest(VolatilityWindow::new(days));
        assert!(vol.is_some(), "{}D volatility should be defined", days);
    }
    assert_eq!(analysis.risk, RiskLevel::Medium);

    let report = VolatilityReport::new(&analysis, 10);
    assert_eq!(report.rows, 120);
    assert_eq!(report.recent.len(), 10);
    assert_eq!(report.risk_label, "medium risk");
}

#[test]
fn test_short_history_only_defines_short_window() {
    let csv = daily_csv(45, |i| 100.0 + (i % 5) as f64);
    let series = read_price_series(csv.as_bytes(), &CsvOptions::default()).unwrap();
    let analysis = VolatilityCalculator::default().analyze(&series);

    assert!(analysis.latest(VolatilityWindow::new(7)).is_some());
    assert!(analysis.latest(VolatilityWindow::new(30)).is_some());
    assert!(analysis.latest(VolatilityWindow::new(90)).is_none());

    let text = render_summary(&series, &analysis, &ReportOptions::default());
    assert!(text.contains("90D Volatility:"));
    assert!(text.contains("N/A"));
    assert!(text.contains("Last 10 Records"));
}

#[test]
fn test_too_short_for_risk_window() {
    let csv = daily_csv(20, |i| 100.0 + i as f64);
    let series = read_price_series(csv.as_bytes(), &CsvOptions::default()).unwrap();
    let analysis = VolatilityCalculator::default().analyze(&series);
    assert_eq!(analysis.risk, RiskLevel::InsufficientData);
}

#[test]
fn test_thresholds_are_tunable() {
    let csv = daily_csv(40, |i| if i % 2 == 0 { 100.0 } else { 103.0 });
    let series = read_price_series(csv.as_bytes(), &CsvOptions::default()).unwrap();
    let relaxed = RiskThresholds::new(0.05, 0.10).unwrap();
    let analysis = VolatilityCalculator::default()
        .with_thresholds(relaxed)
        .analyze(&series);
    assert_eq!(analysis.risk, RiskLevel::Low);
}

#[test]
fn test_missing_close_column_is_an_input_error() {
    let csv = "Date,Open,Adj Close\n2024-01-01,1,2\n";
    let err = read_price_series(csv.as_bytes(), &CsvOptions::default()).unwrap_err();
    assert!(matches!(err, InputError::MissingColumn { ref column } if column == "Close"));
    assert_eq!(err.to_string(), "CSV must contain a 'Close' column");
}
