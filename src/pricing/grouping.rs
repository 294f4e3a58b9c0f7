//! Collapse per-provider price records into one view per organization.

use super::parse::parse_price;
use crate::core::{OrgGroup, PriceRange, PriceRecord};
use std::collections::HashMap;

/// Group records by organization name, preserving first-seen order.
///
/// Representative fields (id, carrier, address, network status, distance,
/// savings label) come from the first record seen for each organization.
/// Every record increments `count_provider`, but only parseable prices feed
/// `min_price` and `price_range`.
pub fn group_by_org(records: &[PriceRecord]) -> Vec<OrgGroup> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<GroupAccumulator> = Vec::new();

    for record in records {
        let key = record.org_key();
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(GroupAccumulator::seed(key, record));
            groups.len() - 1
        });
        groups[slot].absorb(record);
    }

    groups.into_iter().map(GroupAccumulator::finish).collect()
}

/// In-progress group. `observed` stays `None` until a parseable price shows up.
struct GroupAccumulator {
    group: OrgGroup,
    observed: Option<PriceRange>,
}

impl GroupAccumulator {
    fn seed(key: &str, first: &PriceRecord) -> Self {
        let org_id = first
            .org_id
            .clone()
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| key.to_string());

        Self {
            group: OrgGroup {
                org_id,
                org_name: key.to_string(),
                carrier_name: first.carrier_name.clone(),
                min_price: None,
                price_range: PriceRange::default(),
                count_provider: 0,
                in_network: first.in_network.unwrap_or(false),
                distance_miles: first.distance_miles,
                address: first.address.clone(),
                city: first.city.clone(),
                state: first.state.clone(),
                zip_code: first.zip_code.clone(),
                savings: first.savings.clone(),
                providers: Vec::new(),
            },
            observed: None,
        }
    }

    fn absorb(&mut self, record: &PriceRecord) {
        self.group.providers.push(record.clone());
        self.group.count_provider += 1;

        let Some(price) = record.min_price.as_ref().and_then(parse_price) else {
            return;
        };

        self.observed = Some(match self.observed {
            Some(range) => PriceRange::new(range.min.min(price), range.max.max(price)),
            None => PriceRange::new(price, price),
        });
        self.group.min_price = Some(match self.group.min_price {
            Some(current) => current.min(price),
            None => price,
        });
    }

    fn finish(self) -> OrgGroup {
        OrgGroup {
            price_range: self.observed.unwrap_or_default(),
            ..self.group
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Price, UNKNOWN_ORGANIZATION};

    fn record(org: &str, price: impl Into<Price>) -> PriceRecord {
        PriceRecord::new(org, price)
    }

    #[test]
    fn test_empty_input_produces_no_groups() {
        assert!(group_by_org(&[]).is_empty());
    }

    #[test]
    fn test_groups_by_name_in_first_seen_order() {
        let records = vec![
            record("A Clinic", "$100"),
            record("B Imaging", 200.0),
            record("A Clinic", "$150"),
        ];

        let groups = group_by_org(&records);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].org_name, "A Clinic");
        assert_eq!(groups[0].count_provider, 2);
        assert_eq!(groups[0].min_price, Some(100.0));
        assert_eq!(groups[0].price_range, PriceRange::new(100.0, 150.0));
        assert_eq!(groups[1].org_name, "B Imaging");
        assert_eq!(groups[1].price_range, PriceRange::new(200.0, 200.0));
    }

    #[test]
    fn test_unparseable_prices_still_count() {
        let records = vec![
            record("A Clinic", "call for price"),
            record("A Clinic", "$90"),
            record("A Clinic", "n/a"),
        ];

        let groups = group_by_org(&records);

        assert_eq!(groups[0].count_provider, 3);
        assert_eq!(groups[0].min_price, Some(90.0));
        assert_eq!(groups[0].price_range, PriceRange::new(90.0, 90.0));
        assert_eq!(groups[0].providers.len(), 3);
    }

    #[test]
    fn test_group_without_any_price_collapses_range() {
        let mut missing = PriceRecord::new("C Lab", "invalid");
        missing.min_price = None;
        let records = vec![record("C Lab", "invalid"), missing];

        let groups = group_by_org(&records);

        assert_eq!(groups[0].price_range, PriceRange::new(0.0, 0.0));
        assert_eq!(groups[0].min_price, None);
        assert_eq!(groups[0].count_provider, 2);
    }

    #[test]
    fn test_missing_name_uses_unknown_label_and_id_fallback() {
        let mut anonymous = PriceRecord::default();
        anonymous.min_price = Some(Price::Parsed(42.0));

        let groups = group_by_org(&[anonymous]);

        assert_eq!(groups[0].org_name, UNKNOWN_ORGANIZATION);
        assert_eq!(groups[0].org_id, UNKNOWN_ORGANIZATION);
    }

    #[test]
    fn test_representative_fields_come_from_first_record() {
        let mut first = record("A Clinic", "$120");
        first.org_id = Some("org-1".into());
        first.city = Some("Austin".into());
        first.in_network = Some(true);
        first.savings = Some("Save 20%".into());
        let mut second = record("A Clinic", "$80");
        second.org_id = Some("org-2".into());
        second.city = Some("Dallas".into());
        second.in_network = Some(false);

        let groups = group_by_org(&[first, second]);

        assert_eq!(groups[0].org_id, "org-1");
        assert_eq!(groups[0].city.as_deref(), Some("Austin"));
        assert!(groups[0].in_network);
        assert_eq!(groups[0].savings.as_deref(), Some("Save 20%"));
        assert_eq!(groups[0].min_price, Some(80.0));
    }

    #[test]
    fn test_duplicate_records_inflate_count() {
        let records = vec![record("A Clinic", 100.0), record("A Clinic", 100.0)];
        let groups = group_by_org(&records);
        assert_eq!(groups[0].count_provider, 2);
    }
}
