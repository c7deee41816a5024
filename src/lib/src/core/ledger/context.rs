use std::collections::BTreeMap;

use tokio::sync::OnceCell;

use crate::api;
use crate::core::ledger::state;
use crate::error::MigrateError;
use crate::model::{MigrationLedger, Space};

/// Everything ledger related that is fetched once per run.
///
/// The cache maps scope key to ledger and is filled by a single bulk read of
/// every ledger entry. Concurrent first callers share the same fetch.
pub struct LedgerContext {
    space: Space,
    cache: OnceCell<BTreeMap<String, MigrationLedger>>,
    locale: OnceCell<String>,
}

impl LedgerContext {
    pub fn new(space: Space) -> LedgerContext {
        LedgerContext {
            space,
            cache: OnceCell::new(),
            locale: OnceCell::new(),
        }
    }

    pub fn space(&self) -> &Space {
        &self.space
    }

    pub async fn default_locale(&self) -> Result<&str, MigrateError> {
        let space = &self.space;
        let locale = self
            .locale
            .get_or_try_init(|| async move {
                api::client::locales::get_default(space)
                    .await
                    .map_err(MigrateError::ledger_read)
            })
            .await?;
        Ok(locale.as_str())
    }

    pub async fn cache(&self) -> Result<&BTreeMap<String, MigrationLedger>, MigrateError> {
        let locale = self.default_locale().await?;
        let space = &self.space;
        self.cache
            .get_or_try_init(|| async move {
                let entries = match api::client::entries::list_ledger_entries(space).await {
                    Ok(entries) => entries,
                    Err(err) if err.is_not_found() => {
                        return Err(MigrateError::ledger_not_initialized())
                    }
                    Err(err) => return Err(MigrateError::ledger_read(err)),
                };
                log::debug!("ledger cache populated with {} entries", entries.len());
                Ok(entries
                    .iter()
                    .map(|entry| state::decode(entry, locale))
                    .collect())
            })
            .await
    }

    /// Fetch the locale and every ledger entry if not done yet.
    pub async fn populate(&self) -> Result<(), MigrateError> {
        self.cache().await.map(|_| ())
    }

    /// The cached ledger of a scope, empty when none is stored.
    pub async fn ledger_for(&self, scope_key: &str) -> Result<MigrationLedger, MigrateError> {
        Ok(self.cache().await?.get(scope_key).cloned().unwrap_or_default())
    }
}
