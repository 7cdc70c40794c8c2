//! Input table configuration

/// Settings for reading the price table
pub struct InputConfig {
    pub date_column: &'static str,
    pub price_column: &'static str,
    pub delimiter: u8,
    // Formats carrying a time of day, tried in order
    pub datetime_formats: &'static [&'static str],
    // Date-only formats, tried after the datetime formats (time is set to midnight)
    pub date_formats: &'static [&'static str],
}

pub const INPUT: InputConfig = InputConfig {
    date_column: "Date",
    price_column: "Close",
    delimiter: b',',
    datetime_formats: &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"],
    date_formats: &["%Y-%m-%d", "%m/%d/%Y"],
};
