use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::MigrationLedger;
use crate::view::Sys;

/// A ledger entry of the `migration` content type.
///
/// Both fields are keyed by locale code.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LedgerEntryResponse {
    pub sys: Sys,
    pub fields: LedgerEntryFields,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntryFields {
    #[serde(default)]
    pub content_type_id: BTreeMap<String, String>,
    #[serde(default)]
    pub state: BTreeMap<String, MigrationLedger>,
}

/// Body of entry create and update requests.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LedgerEntryNew {
    pub fields: LedgerEntryFields,
}
