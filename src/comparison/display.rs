use crate::core::{OrgGroup, PriceRange};

/// Format whole US dollars with thousands separators: `1234.6` -> `"$1,235"`.
pub fn format_usd(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}", sign, grouped)
}

/// Card price label: a single amount, or `"$min - $max"` for a real range.
pub fn display_price(range: &PriceRange) -> String {
    if range.is_single_point() {
        format_usd(range.min)
    } else {
        format!("{} - {}", format_usd(range.min), format_usd(range.max))
    }
}

/// `address, city, state`, skipping blank parts.
pub fn format_address(group: &OrgGroup) -> String {
    [&group.address, &group.city, &group.state]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
