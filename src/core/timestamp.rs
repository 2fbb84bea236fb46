//! Timestamp formatting for the DateTime field
//!
//! Entries capture local time at construction. The default rendering is the
//! fixed, locale-independent `YYYY-MM-DD HH:MM:SS`.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// strftime pattern of [`TimestampFormat::DateTime`]
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use rust_tagged_logger::TimestampFormat;
/// use chrono::{Local, TimeZone};
///
/// let at = Local.with_ymd_and_hms(2023, 1, 1, 9, 5, 0).unwrap();
/// assert_eq!(TimestampFormat::DateTime.format(&at), "2023-01-01 09:05:00");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2023-01-01 09:05:00`
    #[default]
    DateTime,

    /// ISO 8601 with milliseconds and offset: `2023-01-01T09:05:00.000+01:00`
    Iso8601,

    /// RFC 3339: `2023-01-01T09:05:00+01:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1672560300`
    Unix,

    /// Custom strftime format
    ///
    /// Invalid patterns fall back to [`DEFAULT_DATETIME_FORMAT`] instead of
    /// failing the write.
    Custom(String),
}

impl TimestampFormat {
    /// Render a local timestamp according to this format
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::DateTime => datetime.format(DEFAULT_DATETIME_FORMAT).to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut out = String::new();
                if is_valid_strftime(format_str)
                    && write!(out, "{}", datetime.format(format_str)).is_ok()
                {
                    out
                } else {
                    datetime.format(DEFAULT_DATETIME_FORMAT).to_string()
                }
            }
        }
    }
}

/// Check that every item of a strftime pattern is recognized by chrono
pub(crate) fn is_valid_strftime(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}
