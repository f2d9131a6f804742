//! Human-readable values, in the shapes the column types read back.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

/// Format used for timestamps; read back by [`crate::normalize::parse_datetime`].
pub const DATETIME_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Byte count in powers of 1024 with octet units: `930.0 o`, `2.0 Mo`.
pub fn format_size(bytes: f64) -> String {
    let mut size = bytes;
    for unit in ["", "K", "M", "G", "T", "P", "E", "Z"] {
        if size.abs() < 1024.0 {
            return format!("{size:3.1} {unit}o");
        }
        size /= 1024.0;
    }
    format!("{size:.1} Yo")
}

/// Integer with its digits grouped by three: `1 234 567`.
pub fn format_number(number: u64) -> String {
    let digits = number.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(' ');
        }
        out.push(digit);
    }
    out
}

/// Timestamp in the given zone, or `-` when there is none.
pub fn format_datetime<Tz>(date: Option<DateTime<Utc>>, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match date {
        Some(date) => date.with_timezone(zone).format(DATETIME_FORMAT).to_string(),
        None => "-".to_string(),
    }
}
