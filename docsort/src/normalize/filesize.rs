use std::sync::LazyLock;

use regex::Regex;

use super::number::parse_number;

/// `<number>[ ]<unit>`, where the unit is a magnitude letter with optional
/// `i` and byte suffix (`B` or the French `o`), or a bare byte suffix.
static FILESIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([0-9 ]+([.,][0-9 ]+)?) ?([KMGTPEZY]i?[Bo]?|[Bo])$")
        .expect("file size pattern is valid")
});

/// Magnitude letters by power of 1024. Index 0 stands for "no letter".
const MAGNITUDES: &str = " kmgtpezy";

/// Multiplier for a unit: `1024^index` of its first letter, or 1 for a bare
/// byte unit.
pub fn magnitude(unit: &str) -> f64 {
    let power = unit
        .chars()
        .next()
        .map(|c| c.to_ascii_lowercase())
        .and_then(|c| MAGNITUDES.find(c))
        .unwrap_or(0);
    1024f64.powi(power as i32)
}

/// Read a human file size (`"12.5 MiB"`, `"930B"`, `"4 Go"`) as a byte count.
pub fn parse_filesize(text: &str) -> Option<f64> {
    let captures = FILESIZE.captures(text.trim())?;
    let number = parse_number(&captures[1])?;
    Some(number * magnitude(&captures[3]))
}
