//! Timestamps
//!
//! Items carry epoch milliseconds; the table shows them as `DD.MM.YYYY HH:mm:ss`.

use chrono::{Local, TimeZone, Utc};

/// Display format used for `createdAt` / `updatedAt` columns
pub const DISPLAY_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Current time in epoch milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format a timestamp in the given zone.
///
/// Missing and zero timestamps render as an empty string, as do values
/// outside chrono's representable range.
pub fn format_timestamp_in<Tz>(millis: Option<i64>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match millis {
        Some(ms) if ms != 0 => tz
            .timestamp_millis_opt(ms)
            .single()
            .map(|dt| dt.format(DISPLAY_FORMAT).to_string())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// Format a timestamp in the local zone
pub fn format_timestamp(millis: Option<i64>) -> String {
    format_timestamp_in(millis, &Local)
}
