//! Core data model shared by grouping, scoring and comparison.
//!
//! Records arrive from the org-listing API already JSON-decoded. Field
//! names are accepted in either the backend's snake_case or the frontend's
//! camelCase spelling, and are always written back as snake_case.

pub mod errors;

pub use errors::{Error, Result};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Label used as grouping key when a record carries no organization name.
pub const UNKNOWN_ORGANIZATION: &str = "Unknown Organization";

/// A price as it arrives at the API boundary.
///
/// The backend sends either a JSON number or a currency-formatted string
/// such as `"$1,234.50"`. Normalization happens once, in
/// [`crate::pricing::parse_price`]. Any other JSON shape is kept as
/// [`Price::Other`] so one bad record cannot fail a whole listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Parsed(f64),
    Raw(String),
    Other(serde_json::Value),
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Price::Parsed(value)
    }
}

impl From<&str> for Price {
    fn from(value: &str) -> Self {
        Price::Raw(value.to_string())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Parsed(value) => write!(f, "{}", value),
            Price::Raw(raw) => write!(f, "{}", raw),
            Price::Other(value) => write!(f, "{}", value),
        }
    }
}

/// One provider/organization's priced offering of a procedure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    #[serde(default, alias = "orgId", skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,

    #[serde(default, alias = "orgName", skip_serializing_if = "Option::is_none")]
    pub org_name: Option<String>,

    /// Informational only; never used for grouping.
    #[serde(default, alias = "carrierName", skip_serializing_if = "Option::is_none")]
    pub carrier_name: Option<String>,

    #[serde(default, alias = "minPrice", skip_serializing_if = "Option::is_none")]
    pub min_price: Option<Price>,

    #[serde(default, alias = "inNetwork", skip_serializing_if = "Option::is_none")]
    pub in_network: Option<bool>,

    #[serde(default, alias = "distanceMiles", skip_serializing_if = "Option::is_none")]
    pub distance_miles: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(default, alias = "zipCode", skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,

    /// Pre-formatted savings label from the backend. Never recomputed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings: Option<String>,

    /// Fields this crate does not interpret (provider ids, specialties, ...),
    /// kept so a drill-down can still reach the individual provider.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl PriceRecord {
    pub fn new(org_name: impl Into<String>, min_price: impl Into<Price>) -> Self {
        Self {
            org_name: Some(org_name.into()),
            min_price: Some(min_price.into()),
            ..Self::default()
        }
    }

    /// Grouping key: the organization name, or [`UNKNOWN_ORGANIZATION`]
    /// when it is missing or blank.
    pub fn org_key(&self) -> &str {
        self.org_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(UNKNOWN_ORGANIZATION)
    }
}

/// Observed minimum and maximum of parsed prices in a group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// True when only a single price point (or none) was observed.
    pub fn is_single_point(&self) -> bool {
        self.min == self.max || self.max == 0.0
    }
}

/// One organization's aggregated pricing view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgGroup {
    pub org_id: String,
    pub org_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier_name: Option<String>,
    /// Lowest parsed price in the group, `None` if no record had a
    /// parseable price.
    pub min_price: Option<f64>,
    /// Collapsed to `{0, 0}` when no parseable price was seen.
    pub price_range: PriceRange,
    /// Number of records folded into this group, parseable or not.
    pub count_provider: usize,
    #[serde(default)]
    pub in_network: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_miles: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings: Option<String>,
    /// Raw input records in input order.
    pub providers: Vec<PriceRecord>,
}

impl OrgGroup {
    /// Price shown on the card; groups without a parseable price show 0.
    pub fn display_min_price(&self) -> f64 {
        self.min_price.unwrap_or(0.0)
    }
}

/// Display tier of a Mario Price Score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ColorTier {
    /// Color family used by the badge for this tier.
    pub fn color_family(&self) -> &'static str {
        match self {
            ColorTier::Excellent => "green",
            ColorTier::Good => "blue",
            ColorTier::Fair => "orange",
            ColorTier::Poor => "red",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorTier::Excellent => "excellent",
            ColorTier::Good => "good",
            ColorTier::Fair => "fair",
            ColorTier::Poor => "poor",
        }
    }
}

impl fmt::Display for ColorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A Mario Price Score and its display tier. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u8,
    pub tier: ColorTier,
}

/// Org-listing payload for one procedure, as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcedureOrgs {
    #[serde(default, alias = "procedureName", skip_serializing_if = "Option::is_none")]
    pub procedure_name: Option<String>,
    #[serde(default)]
    pub orgs: Vec<PriceRecord>,
}
