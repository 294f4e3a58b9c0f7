use crate::core::Price;

/// Normalize a boundary price into a number.
///
/// Strings have every character that is not an ASCII digit or `.` removed,
/// then the longest leading decimal literal is parsed, so `"$1,234.50"`
/// becomes `1234.5` and `"1.2.3"` becomes `1.2`. Returns `None` when nothing
/// parseable remains, or when a numeric payload is negative or non-finite.
pub fn parse_price(price: &Price) -> Option<f64> {
    match price {
        Price::Parsed(value) => accept(*value),
        Price::Raw(raw) => parse_price_str(raw),
        Price::Other(_) => None,
    }
}

/// String half of [`parse_price`].
pub fn parse_price_str(raw: &str) -> Option<f64> {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    leading_decimal(&digits)
        .and_then(|literal| literal.parse::<f64>().ok())
        .and_then(accept)
}

// Pure function: only finite, non-negative prices take part in aggregation
fn accept(value: f64) -> Option<f64> {
    (value.is_finite() && value >= 0.0).then_some(value)
}

// Cut at the second '.', the point where a float literal stops being valid
fn leading_decimal(digits: &str) -> Option<&str> {
    let end = digits
        .char_indices()
        .filter(|(_, c)| *c == '.')
        .nth(1)
        .map(|(idx, _)| idx)
        .unwrap_or(digits.len());

    let literal = &digits[..end];
    if literal.chars().any(|c| c.is_ascii_digit()) {
        Some(literal)
    } else {
        None
    }
}
