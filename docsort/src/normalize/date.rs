use std::sync::LazyLock;

use regex::Regex;

static DATETIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2})/([0-9]{2})/([0-9]{4}) ([0-9]{2}):([0-9]{2}):([0-9]{2})")
        .expect("date pattern is valid")
});

/// Read `DD/MM/YYYY HH:MM:SS` as the integer `YYYYMMDDHHMMSS`.
///
/// The fields have fixed widths, so integer order is chronological order.
pub fn parse_datetime(text: &str) -> Option<u64> {
    let c = DATETIME.captures(text.trim())?;
    format!("{}{}{}{}{}{}", &c[3], &c[2], &c[1], &c[4], &c[5], &c[6])
        .parse()
        .ok()
}
