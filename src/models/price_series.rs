use chrono::NaiveDateTime;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::domain::PricePoint;
use crate::errors::InputError;
use crate::utils::TimeUtils;
use crate::utils::maths_utils::get_min_max;

// ============================================================================
// PriceSeries: validated close prices, ascending by timestamp
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PriceSeries {
    pub timestamps: Vec<NaiveDateTime>,
    pub close_prices: Vec<f64>,
}

impl PriceSeries {
    /// Build a series from observations in any order.
    ///
    /// Points are sorted ascending by timestamp. Fails on an empty input or
    /// when two points share a timestamp; the error names the 1-based input
    /// position of the later of the two.
    pub fn from_points(points: Vec<PricePoint>) -> Result<Self, InputError> {
        if points.is_empty() {
            return Err(InputError::EmptySeries);
        }

        // Stable sort keeps input order among equal timestamps
        let mut indexed: Vec<(usize, PricePoint)> = points.into_iter().enumerate().collect();
        indexed.sort_by_key(|(_, p)| p.timestamp);

        if let Some((_, (dup_idx, dup))) = indexed
            .iter()
            .tuple_windows()
            .find(|((_, a), (_, b))| a.timestamp == b.timestamp)
        {
            return Err(InputError::DuplicateTimestamp {
                row: dup_idx + 1,
                timestamp: TimeUtils::format_timestamp(&dup.timestamp),
            });
        }

        let points = indexed.into_iter().map(|(_, p)| p);
        let (timestamps, close_prices): (Vec<_>, Vec<_>) =
            points.map(|p| (p.timestamp, p.close)).unzip();

        Ok(PriceSeries {
            timestamps,
            close_prices,
        })
    }

    pub fn len(&self) -> usize {
        self.close_prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.close_prices.is_empty()
    }

    pub fn get_point(&self, idx: usize) -> PricePoint {
        PricePoint::new(self.timestamps[idx], self.close_prices[idx])
    }

    pub fn points(&self) -> impl Iterator<Item = PricePoint> + '_ {
        (0..self.len()).map(|idx| self.get_point(idx))
    }

    /// First `n` observations (fewer if the series is shorter)
    pub fn head(&self, n: usize) -> impl Iterator<Item = PricePoint> + '_ {
        self.points().take(n)
    }

    pub fn first_timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamps.first().copied()
    }

    pub fn last_timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamps.last().copied()
    }

    /// (lowest, highest) close over the whole series
    pub fn price_range(&self) -> Option<(f64, f64)> {
        get_min_max(&self.close_prices)
    }
}
