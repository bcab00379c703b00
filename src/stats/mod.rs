mod aggregate;
mod partner_index;

pub use aggregate::{AggregatedTotals, aggregate};
pub use partner_index::{PartnerIndexEntry, build_partner_index, filter_by_partner};
