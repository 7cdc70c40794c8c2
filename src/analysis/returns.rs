use itertools::Itertools;

/// Period-over-period fractional change of `prices`.
///
/// Same length as the input. The first element has no prior value and is
/// defined as zero.
pub fn compute_returns(prices: &[f64]) -> Vec<f64> {
    if prices.is_empty() {
        return Vec::new();
    }

    std::iter::once(0.0)
        .chain(
            prices
                .iter()
                .tuple_windows()
                .map(|(prev, curr)| curr / prev - 1.0),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_return_is_zero() {
        assert_eq!(compute_returns(&[100.0]), vec![0.0]);
        assert!(compute_returns(&[]).is_empty());
    }

    #[test]
    fn test_fractional_change() {
        let returns = compute_returns(&[100.0, 102.0, 101.0, 105.0]);
        assert_eq!(returns.len(), 4);
        assert_eq!(returns[0], 0.0);
        assert!((returns[1] - 0.02).abs() < 1e-12);
        assert!((returns[2] - (101.0 / 102.0 - 1.0)).abs() < 1e-12);
        assert!((returns[3] - (105.0 / 101.0 - 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_constant_prices_have_zero_returns() {
        let returns = compute_returns(&[42.0; 12]);
        assert!(returns.iter().all(|&r| r == 0.0));
    }
}
