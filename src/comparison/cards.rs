use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use super::savings::{original_price, savings_percentage};
use crate::config::MarioConfig;
use crate::core::{OrgGroup, PriceRecord, ProcedureOrgs, ScoreResult};
use crate::pricing::{average_min_price, group_by_org};
use crate::scoring::{has_baseline, PriceScorer};

/// One organization as rendered on the procedure page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgCard {
    pub group: OrgGroup,
    /// Group minimum, or 0 when the group had no parseable price.
    pub price: f64,
    /// Absent when there is no reference average to score against.
    pub score: Option<ScoreResult>,
    pub savings_percentage: Option<u32>,
    pub original_price: Option<f64>,
    pub marios_pick: bool,
}

/// All cards for one procedure, in first-seen organization order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub procedure_name: Option<String>,
    pub average_price: f64,
    pub cards: Vec<OrgCard>,
}

impl Comparison {
    pub fn total_providers(&self) -> usize {
        self.cards.iter().map(|card| card.group.count_provider).sum()
    }

    pub fn marios_pick(&self) -> Option<&OrgCard> {
        self.cards.iter().find(|card| card.marios_pick)
    }
}

/// Group, average and score a flat list of price records.
pub fn compare_orgs(records: &[PriceRecord], config: &MarioConfig) -> Comparison {
    let _span = debug_span!("compare_orgs", records = records.len()).entered();

    let groups = group_by_org(records);
    let average_price = average_min_price(&groups);
    debug!(groups = groups.len(), average_price, "grouped price records");

    let scorer = PriceScorer::new(config.scoring_thresholds());
    let pick_threshold = config.comparison_config().mario_pick_threshold;

    let cards = groups
        .into_iter()
        .enumerate()
        .map(|(index, group)| build_card(index, group, average_price, &scorer, pick_threshold))
        .collect();

    Comparison {
        procedure_name: None,
        average_price,
        cards,
    }
}

/// [`compare_orgs`] over an org-listing payload, keeping its procedure name.
pub fn compare_procedure(listing: &ProcedureOrgs, config: &MarioConfig) -> Comparison {
    Comparison {
        procedure_name: listing.procedure_name.clone(),
        ..compare_orgs(&listing.orgs, config)
    }
}

fn build_card(
    index: usize,
    group: OrgGroup,
    average_price: f64,
    scorer: &PriceScorer,
    pick_threshold: u8,
) -> OrgCard {
    let price = group.display_min_price();
    let score = has_baseline(average_price).then(|| scorer.score(price, average_price));
    // Only the leading card is eligible
    let marios_pick = index == 0 && score.is_some_and(|s| s.score > pick_threshold);

    OrgCard {
        price,
        score,
        savings_percentage: savings_percentage(price, average_price),
        original_price: original_price(price, average_price),
        marios_pick,
        group,
    }
}
