use serde::{Deserialize, Serialize};

/// A trailing window length, counted in rows (days for daily data).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct VolatilityWindow {
    pub days: usize,
}

impl VolatilityWindow {
    pub const fn new(days: usize) -> Self {
        Self { days }
    }

    /// Short label used in summaries, e.g. `30D`
    pub fn label(&self) -> String {
        format!("{}D", self.days)
    }

    /// Column header used in tables and exports, e.g. `Vol_30D`
    pub fn column_name(&self) -> String {
        format!("Vol_{}D", self.days)
    }

    /// Index of the first row at which a full window of returns is available.
    pub fn first_defined_index(&self) -> usize {
        self.days.saturating_sub(1)
    }
}

impl std::fmt::Display for VolatilityWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
