use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::types::{Count, PartnerId};

/// Represents a single per-partner entry from the decoded payload.
///
/// Every field is optional on the wire. A record without a `partnerId` is
/// retained in the payload but carries no identity, so it is skipped when
/// the partner index is built. Counters default to zero when absent or
/// invalid so downstream aggregation never fails on dirty data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionRecord {
    /// Identifier used to group and filter records.
    #[serde(deserialize_with = "lenient_string")]
    pub partner_id: Option<PartnerId>,
    /// Display name; the index keeps the last one seen per id.
    #[serde(deserialize_with = "lenient_string")]
    pub partner_name: Option<String>,
    /// Reporting date; the first record's date labels the whole report.
    #[serde(deserialize_with = "lenient_string")]
    pub date: Option<String>,
    pub no_of_successful_orders: Count,
    pub no_of_failed_orders: Count,
    pub no_of_pending_orders: Count,
    pub no_of_successful_attempts: Count,
    pub no_of_failed_attempts: Count,
    pub no_of_pending_attempts: Count,
}

impl TransactionRecord {
    /// Total orders across the three terminal states for this record alone.
    pub fn order_total(&self) -> u64 {
        self.no_of_successful_orders
            .get()
            .saturating_add(self.no_of_failed_orders.get())
            .saturating_add(self.no_of_pending_orders.get())
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    match value {
        Value::String(text) => Ok(Some(text)),
        Value::Null => Ok(None),
        other => {
            warn!("Text field value [{other}] is not a string, treating it as absent");
            Ok(None)
        }
    }
}
