//! # Bootstrap
//!
//! Snapshot the live content model into one migration script per content
//! type, optionally marking the new scripts as applied in the ledger.
//!

pub mod generator;
pub mod introspect;
pub mod materializer;

use std::collections::HashMap;
use std::sync::Arc;

use futures::prelude::*;

use crate::config::MigrationsConfig;
use crate::constants;
use crate::core::ledger::{LedgerContext, LedgerStore};
use crate::error::MigrateError;
use crate::model::{MigrationLedger, MigrationRecord, Scope, Space};
use crate::opts::BootstrapOpts;
use crate::util;

pub use crate::core::bootstrap::materializer::CreatedScript;

pub async fn bootstrap(
    space: &Space,
    opts: &BootstrapOpts,
) -> Result<Vec<CreatedScript>, MigrateError> {
    if opts.write_state {
        clear_scripts(opts)?;
    }

    let content_types = introspect::introspect(space, &opts.content_types).await?;
    let descriptions: HashMap<String, String> = content_types
        .iter()
        .map(|c| (c.schema.id.clone(), generator::description(&c.schema)))
        .collect();

    let results: Vec<Result<CreatedScript, String>> = stream::iter(content_types)
        .map(|content_type| {
            let scope_id = content_type.schema.id.clone();
            let migrations_dir = opts.migrations_dir.clone();
            let consolidated = opts.consolidated;
            let handle = tokio::task::spawn_blocking(move || {
                let source = generator::render(&content_type);
                materializer::create_file(
                    &content_type.schema.id,
                    &source,
                    &migrations_dir,
                    consolidated,
                )
            });
            async move {
                match handle.await {
                    Ok(Ok(script)) => Ok(script),
                    Ok(Err(err)) => {
                        log::error!("could not write script for {}: {}", scope_id, err);
                        Err(scope_id)
                    }
                    Err(err) => {
                        log::error!("script writer for {} panicked: {}", scope_id, err);
                        Err(scope_id)
                    }
                }
            }
        })
        .buffer_unordered(constants::DEFAULT_NUM_WORKERS)
        .collect()
        .await;

    let mut created: Vec<CreatedScript> = vec![];
    let mut failed: Vec<String> = vec![];
    for result in results {
        match result {
            Ok(script) => created.push(script),
            Err(scope_id) => failed.push(scope_id),
        }
    }
    created.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    // Scopes that were written still get their ledger
    if opts.write_state {
        let ctx = Arc::new(LedgerContext::new(space.clone()));
        failed.extend(rewrite_ledgers(ctx, &created, &descriptions, opts.consolidated).await);
    }

    if failed.is_empty() {
        Ok(created)
    } else {
        failed.sort();
        failed.dedup();
        Err(MigrateError::scope_failures(&failed))
    }
}

/// Clear out what bootstrap is about to regenerate. A consolidated layout
/// shares one ledger, so all of its scripts go. The layout config survives.
fn clear_scripts(opts: &BootstrapOpts) -> Result<(), MigrateError> {
    let scopes: &[String] = if opts.consolidated {
        &[]
    } else {
        &opts.content_types
    };
    materializer::delete_scripts(&opts.migrations_dir, scopes)?;

    if scopes.is_empty() {
        util::fs::create_dir_all(&opts.migrations_dir)?;
        MigrationsConfig::new(opts.consolidated).save(&opts.migrations_dir)?;
    }
    Ok(())
}

/// The ledgers a fresh bootstrap implies: every created script applied now.
pub fn bootstrapped_ledgers(
    created: &[CreatedScript],
    descriptions: &HashMap<String, String>,
    consolidated: bool,
    now: i64,
) -> Vec<(Scope, MigrationLedger)> {
    let record = |script: &CreatedScript| {
        let description = descriptions
            .get(&script.scope_id)
            .cloned()
            .unwrap_or_default();
        MigrationRecord::applied(&script.file_name, description, now)
    };

    if consolidated {
        let mut ledger = MigrationLedger {
            last_run: String::new(),
            migrations: created.iter().map(record).collect(),
        };
        ledger.migrations.sort_by(|a, b| a.title.cmp(&b.title));
        ledger.last_run = ledger.compute_last_run();
        return vec![(Scope::Consolidated, ledger)];
    }

    created
        .iter()
        .map(|script| {
            let ledger = MigrationLedger {
                last_run: script.file_name.clone(),
                migrations: vec![record(script)],
            };
            (Scope::content_type(&script.scope_id), ledger)
        })
        .collect()
}

async fn rewrite_ledgers(
    ctx: Arc<LedgerContext>,
    created: &[CreatedScript],
    descriptions: &HashMap<String, String>,
    consolidated: bool,
) -> Vec<String> {
    let ledgers = bootstrapped_ledgers(created, descriptions, consolidated, util::millis::now());

    let mut failed: Vec<String> = vec![];
    for (scope, ledger) in ledgers {
        let store = LedgerStore::new(scope.clone(), ctx.clone(), false);
        match store.write_state(&ledger).await {
            Ok(_) => log::info!("Wrote migration state for {}", scope),
            Err(err) => {
                log::error!("{}", err);
                failed.push(scope.key().to_string());
            }
        }
    }
    failed
}
