//! Price comparison cards for one procedure.
//!
//! Ties the pricing and scoring layers together the way the procedure page
//! consumes them: group the records, derive the reference average, then
//! score and annotate every organization.

pub mod cards;
pub mod display;
pub mod savings;

pub use cards::{compare_orgs, compare_procedure, Comparison, OrgCard};
pub use display::{display_price, format_address, format_usd};
pub use savings::{original_price, savings_percentage};
