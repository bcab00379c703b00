use serde::Serialize;

use crate::models::TransactionRecord;

/// The fully decoded, validated record collection.
///
/// Produced once per input and treated as immutable afterwards: aggregation
/// and filtering derive new views from it, they never mutate it in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DecodedPayload {
    pub data: Vec<TransactionRecord>,
}

impl DecodedPayload {
    /// The report date is taken from the first record, matching how the
    /// upstream feed labels a reporting period.
    pub fn report_date(&self) -> Option<&str> {
        self.data.first().and_then(|record| record.date.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
