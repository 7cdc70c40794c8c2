//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so debug
//! builds stay readable. Every flag is additionally gated by
//! `cfg(debug_assertions)` at the call site.

/// Emit every parsed CSV record (timestamp and close).
pub const PRINT_CSV_ROWS: bool = false;

/// Emit the latest value of each rolling window after an analysis.
pub const PRINT_ROLLING_WINDOWS: bool = false;

/// Emit the volatility and thresholds used for the risk decision.
pub const PRINT_RISK_CLASSIFICATION: bool = false;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_are_off_by_default() {
        let flags = [PRINT_CSV_ROWS, PRINT_ROLLING_WINDOWS, PRINT_RISK_CLASSIFICATION];
        assert!(flags.iter().all(|enabled| !enabled));
    }
}
