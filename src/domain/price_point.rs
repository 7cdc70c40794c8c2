use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One observation of the input table.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub timestamp: NaiveDateTime,
    pub close: f64,
}

impl PricePoint {
    pub fn new(timestamp: NaiveDateTime, close: f64) -> Self {
        PricePoint { timestamp, close }
    }
}
