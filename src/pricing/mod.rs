//! Price normalization and per-organization grouping.
//!
//! Raw records → [`group_by_org`] → [`average_min_price`]. Everything here is
//! a pure, synchronous transformation over in-memory lists; malformed prices
//! degrade to "no price" rather than raising errors.

pub mod average;
pub mod grouping;
pub mod parse;

pub use average::average_min_price;
pub use grouping::group_by_org;
pub use parse::{parse_price, parse_price_str};
