use std::sync::Arc;

use crate::api;
use crate::core::ledger::{state, LedgerContext};
use crate::error::MigrateError;
use crate::model::{MigrationLedger, Scope};

/// Reads and writes the ledger of one scope.
#[derive(Clone)]
pub struct LedgerStore {
    scope: Scope,
    ctx: Arc<LedgerContext>,
    dry_run: bool,
}

impl LedgerStore {
    pub fn new(scope: Scope, ctx: Arc<LedgerContext>, dry_run: bool) -> LedgerStore {
        LedgerStore {
            scope,
            ctx,
            dry_run,
        }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// The cached ledger, the remote is only read the first time any store
    /// of the context loads.
    pub async fn load(&self) -> Result<MigrationLedger, MigrateError> {
        self.ctx.ledger_for(self.scope.key()).await
    }

    /// Persist `ledger` unless this is a dry run.
    pub async fn save(&self, ledger: &MigrationLedger) -> Result<(), MigrateError> {
        if self.dry_run {
            log::debug!("dry run, not saving ledger for {}", self.scope);
            return Ok(());
        }
        self.write_state(ledger).await
    }

    /// Persist `ledger` even on a dry run. An empty ledger removes the entry.
    pub async fn write_state(&self, ledger: &MigrationLedger) -> Result<(), MigrateError> {
        self.write(ledger)
            .await
            .map_err(|err| MigrateError::ledger_write(self.scope.key(), err))
    }

    async fn write(&self, ledger: &MigrationLedger) -> Result<(), MigrateError> {
        if ledger.is_empty() {
            return self.remove_entry().await;
        }

        let space = self.ctx.space();
        let key = self.scope.key();
        let locale = self.ctx.default_locale().await?;
        let fields = state::encode(key, locale, ledger);

        let existing = api::client::entries::find_ledger_entries(space, key).await?;
        match existing.into_iter().next() {
            None => {
                log::debug!("creating ledger entry for {}", key);
                api::client::entries::create_with_id(space, key, fields).await?;
            }
            Some(mut entry) => {
                log::debug!(
                    "updating ledger entry {} at version {:?}",
                    entry.sys.id,
                    entry.sys.version
                );
                entry.fields.state = fields.state;
                if entry.fields.content_type_id.is_empty() {
                    entry.fields.content_type_id = fields.content_type_id;
                }
                api::client::entries::update(space, &entry).await?;
            }
        }
        Ok(())
    }

    /// Delete the scope's entry, a missing entry is already deleted.
    async fn remove_entry(&self) -> Result<(), MigrateError> {
        let space = self.ctx.space();
        let key = self.scope.key();
        let Some(entry) = api::client::entries::get(space, key).await? else {
            log::debug!("no ledger entry to delete for {}", key);
            return Ok(());
        };

        let version = entry.sys.version.unwrap_or_default();
        match api::client::entries::delete(space, key, version).await {
            Ok(_) => Ok(()),
            Err(err) if err.is_not_found() => Ok(()),
            Err(err) => Err(err),
        }
    }
}
