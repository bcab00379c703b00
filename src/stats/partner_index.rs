use std::collections::HashMap;

use crate::models::TransactionRecord;
use crate::types::PartnerId;

/// One deduplicated partner with its accumulated order total.
///
/// Built fresh on every decode, never persisted. `name` stays optional
/// because display-only consumers decide how to render a missing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartnerIndexEntry {
    pub id: PartnerId,
    pub name: Option<String>,
    pub order_count: u64,
}

/// Builds the deduplicated partner index in a single grouped-sum pass.
///
/// Entries appear in first-seen order. The order count accumulates across
/// every record sharing the id, while the name is overwritten on each later
/// record (last write wins, even when the later record has no name). Records
/// without a `partnerId` have no identity to key on and are skipped.
pub fn build_partner_index(records: &[TransactionRecord]) -> Vec<PartnerIndexEntry> {
    let mut entries: Vec<PartnerIndexEntry> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let Some(id) = record.partner_id.as_deref() else {
            continue;
        };

        match positions.get(id) {
            Some(&position) => {
                let entry = &mut entries[position];
                entry.name = record.partner_name.clone();
                entry.order_count = entry.order_count.saturating_add(record.order_total());
            }
            None => {
                positions.insert(id, entries.len());
                entries.push(PartnerIndexEntry {
                    id: id.to_string(),
                    name: record.partner_name.clone(),
                    order_count: record.order_total(),
                });
            }
        }
    }

    entries
}

/// Derives the subset of records belonging to one partner.
///
/// A missing or empty id selects everything. Matching is exact string
/// equality with no normalization. The result is a new collection; the
/// payload itself is never mutated.
pub fn filter_by_partner(
    records: &[TransactionRecord],
    partner_id: Option<&str>,
) -> Vec<TransactionRecord> {
    match partner_id {
        Some(id) if !id.is_empty() => records
            .iter()
            .filter(|record| record.partner_id.as_deref() == Some(id))
            .cloned()
            .collect(),
        _ => records.to_vec(),
    }
}
