//! Property-based tests for grouping and scoring
//!
//! These tests verify invariants that should hold for all inputs:
//! - One group per distinct organization key
//! - Provider counts sum to the number of input records
//! - Parsed ranges only ever contain parseable prices
//! - Scores stay on the 10-100 scale and never rise as price rises

use mario_pricing::{
    group_by_org, mario_price_score, parse_price, Price, PriceRecord, UNKNOWN_ORGANIZATION,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn org_name() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        "[A-D] (Clinic|Imaging|Lab)".prop_map(Some),
    ]
}

fn price() -> impl Strategy<Value = Option<Price>> {
    prop_oneof![
        Just(None),
        (0.0f64..50_000.0).prop_map(|p| Some(Price::Parsed(p))),
        (0u32..50_000).prop_map(|p| Some(Price::Raw(format!("${}", p)))),
        "[a-z ]{0,8}".prop_map(|s| Some(Price::Raw(s))),
    ]
}

fn record() -> impl Strategy<Value = PriceRecord> {
    (org_name(), price()).prop_map(|(org_name, min_price)| PriceRecord {
        org_name,
        min_price,
        ..PriceRecord::default()
    })
}

proptest! {
    #[test]
    fn prop_one_group_per_distinct_key(records in prop::collection::vec(record(), 0..40)) {
        let groups = group_by_org(&records);

        let keys: HashSet<&str> = records.iter().map(|r| r.org_key()).collect();
        prop_assert_eq!(groups.len(), keys.len());

        let total: usize = groups.iter().map(|g| g.count_provider).sum();
        prop_assert_eq!(total, records.len());
    }

    #[test]
    fn prop_range_bounds_parsed_prices(records in prop::collection::vec(record(), 1..40)) {
        for group in group_by_org(&records) {
            let parsed: Vec<f64> = group
                .providers
                .iter()
                .filter_map(|r| r.min_price.as_ref().and_then(parse_price))
                .collect();

            if parsed.is_empty() {
                prop_assert_eq!(group.price_range.min, 0.0);
                prop_assert_eq!(group.price_range.max, 0.0);
                prop_assert!(group.min_price.is_none());
            } else {
                let min = parsed.iter().cloned().fold(f64::INFINITY, f64::min);
                let max = parsed.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
                prop_assert_eq!(group.price_range.min, min);
                prop_assert_eq!(group.price_range.max, max);
                prop_assert_eq!(group.min_price, Some(min));
            }
        }
    }

    #[test]
    fn prop_unknown_group_collects_unnamed(records in prop::collection::vec(record(), 0..40)) {
        let unnamed = records
            .iter()
            .filter(|r| r.org_name.as_deref().map_or(true, |n| n.trim().is_empty()))
            .count();
        let groups = group_by_org(&records);
        let unknown = groups
            .iter()
            .find(|g| g.org_name == UNKNOWN_ORGANIZATION)
            .map_or(0, |g| g.count_provider);

        prop_assert_eq!(unknown, unnamed);
    }

    #[test]
    fn prop_score_is_bounded(price in -1_000.0f64..1_000_000.0, average in 0.01f64..100_000.0) {
        let score = mario_price_score(price, average);
        prop_assert!((10..=100).contains(&score));
    }

    #[test]
    fn prop_score_never_increases_with_price(
        low in 0.0f64..10_000.0,
        delta in 0.0f64..10_000.0,
        average in 1.0f64..10_000.0,
    ) {
        prop_assert!(mario_price_score(low, average) >= mario_price_score(low + delta, average));
    }
}
