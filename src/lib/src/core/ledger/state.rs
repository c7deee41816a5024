use std::collections::BTreeMap;

use crate::model::MigrationLedger;
use crate::view::{LedgerEntryFields, LedgerEntryResponse};

/// The ledger as it is stored: pending records dropped, `lastRun` pointing at
/// the last applied title.
pub fn applied_only(ledger: &MigrationLedger) -> MigrationLedger {
    MigrationLedger {
        last_run: ledger.compute_last_run(),
        migrations: ledger.applied().cloned().collect(),
    }
}

/// Entry fields for `scope_key`, both keyed by `locale`.
pub fn encode(scope_key: &str, locale: &str, ledger: &MigrationLedger) -> LedgerEntryFields {
    LedgerEntryFields {
        content_type_id: BTreeMap::from([(locale.to_string(), scope_key.to_string())]),
        state: BTreeMap::from([(locale.to_string(), applied_only(ledger))]),
    }
}

/// Scope key and ledger of a remote entry.
///
/// Entries written under another locale are still read, the first locale
/// present is used. The entry id stands in for a missing scope field.
pub fn decode(entry: &LedgerEntryResponse, locale: &str) -> (String, MigrationLedger) {
    let fields = &entry.fields;
    let scope_key = fields
        .content_type_id
        .get(locale)
        .or_else(|| fields.content_type_id.values().next())
        .cloned()
        .unwrap_or_else(|| entry.sys.id.clone());

    let mut ledger = fields
        .state
        .get(locale)
        .or_else(|| fields.state.values().next())
        .cloned()
        .unwrap_or_default();
    ledger.migrations.sort_by(|a, b| a.title.cmp(&b.title));

    (scope_key, ledger)
}
