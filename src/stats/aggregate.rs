use crate::models::TransactionRecord;
use crate::types::Count;

/// Summed counters across a record collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregatedTotals {
    pub successful_orders: Count,
    pub failed_orders: Count,
    pub pending_orders: Count,
    pub successful_attempts: Count,
    pub failed_attempts: Count,
    pub pending_attempts: Count,
}

impl AggregatedTotals {
    pub fn total_orders(&self) -> u64 {
        self.successful_orders
            .get()
            .saturating_add(self.failed_orders.get())
            .saturating_add(self.pending_orders.get())
    }

    pub fn total_attempts(&self) -> u64 {
        self.successful_attempts
            .get()
            .saturating_add(self.failed_attempts.get())
            .saturating_add(self.pending_attempts.get())
    }

    /// Share of successful orders as a percentage, rounded to one decimal
    /// place. Exactly zero when there are no orders at all.
    pub fn success_rate(&self) -> f64 {
        let total = self.total_orders();

        if total == 0 {
            return 0.0;
        }

        let rate = self.successful_orders.get() as f64 / total as f64 * 100.0;
        (rate * 10.0).round() / 10.0
    }
}

/// Sums all six counters across the given records. Pure and infallible:
/// empty input yields all-zero totals.
pub fn aggregate(records: &[TransactionRecord]) -> AggregatedTotals {
    let mut totals = AggregatedTotals::default();

    for record in records {
        totals.successful_orders += record.no_of_successful_orders;
        totals.failed_orders += record.no_of_failed_orders;
        totals.pending_orders += record.no_of_pending_orders;
        totals.successful_attempts += record.no_of_successful_attempts;
        totals.failed_attempts += record.no_of_failed_attempts;
        totals.pending_attempts += record.no_of_pending_attempts;
    }

    totals
}
