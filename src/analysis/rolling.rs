//! Trailing-window statistics over the return series.

use statrs::statistics::{Data, Distribution};

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_ROLLING_WINDOWS;

/// Sample standard deviation (n - 1 denominator) of a slice.
///
/// `None` for fewer than two values, where the sample estimate is undefined.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let data = Data::new(values.to_vec());
    data.std_dev().filter(|sd| sd.is_finite())
}

/// Rolling sample standard deviation over a trailing window.
///
/// Element `i` covers `values[i + 1 - window ..= i]` and is `None` while
/// `i < window - 1`. Output is aligned with the input.
pub fn rolling_std(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }

    let rolled: Vec<Option<f64>> = (0..values.len())
        .map(|i| {
            if i + 1 < window {
                None
            } else {
                sample_std_dev(&values[i + 1 - window..=i])
            }
        })
        .collect();

    #[cfg(debug_assertions)]
    if PRINT_ROLLING_WINDOWS {
        let defined = rolled.iter().filter(|v| v.is_some()).count();
        log::debug!(
            "Rolling std over {} values with window {}: {} defined",
            values.len(),
            window,
            defined
        );
    }

    rolled
}
