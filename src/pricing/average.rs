use crate::core::OrgGroup;

/// Reference price for scoring: mean of every group's positive `min_price`.
///
/// Returns `0.0` when no group has a positive price; the scorer treats that
/// as "no baseline" and falls back to its neutral score.
pub fn average_min_price(groups: &[OrgGroup]) -> f64 {
    let prices: Vec<f64> = groups
        .iter()
        .filter_map(|group| group.min_price)
        .filter(|price| *price > 0.0)
        .collect();

    if prices.is_empty() {
        return 0.0;
    }

    prices.iter().sum::<f64>() / prices.len() as f64
}
