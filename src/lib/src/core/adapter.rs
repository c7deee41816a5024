//! Bridges the set runner to the migration engine and to the ledger store.
//!
//! The engine and the store are driven through completion callbacks, the
//! runner awaits them through a oneshot channel.
//!

use std::sync::Arc;

use tokio::sync::oneshot;

use crate::core::engine::{MigrationEngine, MigrationRequest};
use crate::core::ledger::LedgerStore;
use crate::error::MigrateError;
use crate::model::{Direction, MigrationLedger, MigrationScript, Scope, Space};

/// Called once with the outcome of an engine run or a ledger save.
pub type Completion = Box<dyn FnOnce(Result<(), MigrateError>) + Send + 'static>;

#[derive(Clone)]
pub struct ExecutionAdapter {
    engine: Arc<dyn MigrationEngine>,
    space: Space,
    dry_run: bool,
}

impl ExecutionAdapter {
    pub fn new(engine: Arc<dyn MigrationEngine>, space: Space, dry_run: bool) -> ExecutionAdapter {
        ExecutionAdapter {
            engine,
            space,
            dry_run,
        }
    }

    pub fn wrap(&self, script: &MigrationScript, scope: &Scope) -> WrappedMigration {
        WrappedMigration {
            engine: self.engine.clone(),
            script: script.clone(),
            scope: scope.clone(),
            space: self.space.clone(),
            dry_run: self.dry_run,
        }
    }
}

/// A script whose `up` and `down` hand over to the engine instead of
/// running in process.
#[derive(Clone)]
pub struct WrappedMigration {
    engine: Arc<dyn MigrationEngine>,
    script: MigrationScript,
    scope: Scope,
    space: Space,
    dry_run: bool,
}

impl WrappedMigration {
    pub fn script(&self) -> &MigrationScript {
        &self.script
    }

    pub fn request(&self, direction: Direction) -> MigrationRequest {
        MigrationRequest {
            title: self.script.title.clone(),
            script: self.script.path.clone(),
            direction,
            scope: self.scope.clone(),
            space: self.space.clone(),
            dry_run: self.dry_run,
        }
    }

    /// Schedule the engine run and report to `next` when it is done.
    pub fn call(&self, direction: Direction, next: Completion) {
        let engine = self.engine.clone();
        let request = self.request(direction);
        tokio::spawn(async move {
            let title = request.title.clone();
            let result = match engine.run(request).await {
                Ok(_) => Ok(()),
                Err(err @ MigrateError::Execution(_)) => Err(err),
                Err(err) => Err(MigrateError::execution(title, err)),
            };
            next(result);
        });
    }

    pub async fn call_async(&self, direction: Direction) -> Result<(), MigrateError> {
        let (tx, rx) = oneshot::channel();
        self.call(
            direction,
            Box::new(move |result| {
                let _ = tx.send(result);
            }),
        );
        rx.await
            .map_err(|_| MigrateError::execution(&self.script.title, "engine run was dropped"))?
    }
}

/// Save through the store and report to `next`.
pub fn save_with(store: LedgerStore, ledger: MigrationLedger, next: Completion) {
    tokio::spawn(async move {
        next(store.save(&ledger).await);
    });
}

pub async fn save_async(store: &LedgerStore, ledger: &MigrationLedger) -> Result<(), MigrateError> {
    let (tx, rx) = oneshot::channel();
    save_with(
        store.clone(),
        ledger.clone(),
        Box::new(move |result| {
            let _ = tx.send(result);
        }),
    );
    rx.await.map_err(|_| {
        MigrateError::ledger_write(store.scope().key(), "ledger save was dropped")
    })?
}
