/// Percentage below the average, rounded, e.g. `Some(33)` for "33% below avg".
///
/// `None` unless the price is strictly cheaper than a positive average.
pub fn savings_percentage(price: f64, average_price: f64) -> Option<u32> {
    original_price(price, average_price)
        .map(|reference| (((reference - price) / reference) * 100.0).round() as u32)
}

/// Reference price shown struck through next to a cheaper-than-average price.
pub fn original_price(price: f64, average_price: f64) -> Option<f64> {
    (average_price.is_finite() && average_price > 0.0 && average_price > price)
        .then_some(average_price)
}
