/// Read locale-formatted numeric text.
///
/// Commas become decimal points, then spaces are dropped, so `"1 234,5"`
/// reads as `1234.5`. The replacement order is fixed: mixed input such as
/// `"1,234 567"` is accepted as `1.234567` rather than guessed at.
///
/// Returns `None` for empty, non-numeric or non-finite text.
pub fn parse_number(text: &str) -> Option<f64> {
    let cleaned = text.trim().replace(',', ".").replace(' ', "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}
