use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::config::INPUT;

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_DATE_FORMAT: &str = "%Y-%m-%d";
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    /// Parse a timestamp cell. RFC 3339 first (offset is normalised to UTC),
    /// then the configured datetime formats, then the date-only formats.
    pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Some(dt.naive_utc());
        }

        INPUT
            .datetime_formats
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
            .or_else(|| {
                INPUT
                    .date_formats
                    .iter()
                    .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
                    .map(|date| date.and_time(NaiveTime::MIN))
            })
    }

    /// Display form: date only when the timestamp falls on midnight (daily data).
    pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
        if timestamp.time() == NaiveTime::MIN {
            timestamp.format(Self::STANDARD_DATE_FORMAT).to_string()
        } else {
            timestamp.format(Self::STANDARD_TIME_FORMAT).to_string()
        }
    }
}
