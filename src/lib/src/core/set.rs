//! # MigrationSet
//!
//! The scripts of one scope, in file name order, with what the ledger knows
//! about each of them. Runs them up or down and saves the ledger after every
//! step, so a failure midway keeps what already ran recorded.
//!

use crate::core::adapter::{self, WrappedMigration};
use crate::core::ledger::LedgerStore;
use crate::error::MigrateError;
use crate::model::{Direction, MigrationLedger, MigrationRecord, Scope};
use crate::util;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationEvent {
    Warning(String),
    Migration { direction: Direction, title: String },
}

pub type Listener = Box<dyn Fn(&MigrationEvent) + Send + Sync>;

/// Logs warnings and every migration that runs.
pub fn log_listener() -> Listener {
    Box::new(|event| match event {
        MigrationEvent::Warning(msg) => log::warn!("{}", msg),
        MigrationEvent::Migration { direction, title } => log::info!("{} {}", direction, title),
    })
}

pub struct SetMigration {
    pub record: MigrationRecord,
    pub wrapped: WrappedMigration,
}

pub struct MigrationSet {
    scope: Scope,
    store: LedgerStore,
    migrations: Vec<SetMigration>,
    last_run: String,
    listeners: Vec<Listener>,
}

impl MigrationSet {
    /// Binds the wrapped scripts to the ledger by title.
    pub fn new(
        scope: Scope,
        store: LedgerStore,
        mut wrapped: Vec<WrappedMigration>,
        ledger: &MigrationLedger,
    ) -> MigrationSet {
        wrapped.sort_by(|a, b| a.script().title.cmp(&b.script().title));
        let migrations = wrapped
            .into_iter()
            .map(|wrapped| {
                let script = wrapped.script();
                let timestamp = ledger.find(&script.title).and_then(|r| r.timestamp);
                SetMigration {
                    record: MigrationRecord {
                        title: script.title.clone(),
                        description: script.description.clone(),
                        timestamp,
                    },
                    wrapped,
                }
            })
            .collect();

        let mut set = MigrationSet {
            scope,
            store,
            migrations,
            last_run: String::new(),
            listeners: vec![],
        };
        set.last_run = set.to_ledger().compute_last_run();
        set
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn last_run(&self) -> &str {
        &self.last_run
    }

    pub fn records(&self) -> Vec<&MigrationRecord> {
        self.migrations.iter().map(|m| &m.record).collect()
    }

    pub fn pending(&self) -> Vec<&MigrationRecord> {
        self.records()
            .into_iter()
            .filter(|r| !r.is_applied())
            .collect()
    }

    pub fn on(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    pub fn emit(&self, event: MigrationEvent) {
        for listener in &self.listeners {
            listener(&event);
        }
    }

    /// Everything the set knows, pending records included.
    pub fn to_ledger(&self) -> MigrationLedger {
        MigrationLedger {
            last_run: self.last_run.clone(),
            migrations: self.migrations.iter().map(|m| m.record.clone()).collect(),
        }
    }

    fn position(&self, title: &str) -> Result<usize, MigrateError> {
        self.migrations
            .iter()
            .position(|m| m.record.title == title)
            .ok_or_else(|| MigrateError::migration_not_found(title))
    }

    /// Apply pending scripts in order, up to and including `target`.
    /// Returns how many ran.
    pub async fn up(&mut self, target: Option<&str>) -> Result<usize, MigrateError> {
        let end = match target {
            Some(title) => self.position(title)? + 1,
            None => self.migrations.len(),
        };
        let to_run: Vec<usize> = (0..end)
            .filter(|i| !self.migrations[*i].record.is_applied())
            .collect();
        if to_run.is_empty() {
            log::info!("{}: no pending migrations", self.scope);
            return Ok(0);
        }

        for i in &to_run {
            let title = self.migrations[*i].record.title.clone();
            self.emit(MigrationEvent::Migration {
                direction: Direction::Up,
                title: title.clone(),
            });
            self.migrations[*i].wrapped.call_async(Direction::Up).await?;

            self.migrations[*i].record.timestamp = Some(util::millis::now());
            self.last_run = title;
            adapter::save_async(&self.store, &self.to_ledger()).await?;
        }
        Ok(to_run.len())
    }

    /// Revert applied scripts in reverse order, down to and including
    /// `target`. Without a target only the last applied script is reverted.
    /// Returns how many ran.
    pub async fn down(&mut self, target: Option<&str>) -> Result<usize, MigrateError> {
        let start = match target {
            Some(title) => self.position(title)?,
            None => match self.migrations.iter().rposition(|m| m.record.is_applied()) {
                Some(i) => i,
                None => {
                    log::info!("{}: nothing to revert", self.scope);
                    return Ok(0);
                }
            },
        };
        let to_run: Vec<usize> = (start..self.migrations.len())
            .rev()
            .filter(|i| self.migrations[*i].record.is_applied())
            .collect();

        for i in &to_run {
            let title = self.migrations[*i].record.title.clone();
            self.emit(MigrationEvent::Migration {
                direction: Direction::Down,
                title,
            });
            self.migrations[*i].wrapped.call_async(Direction::Down).await?;

            self.migrations[*i].record.timestamp = None;
            self.last_run = self.to_ledger().compute_last_run();
            adapter::save_async(&self.store, &self.to_ledger()).await?;
        }
        Ok(to_run.len())
    }
}
