//! Builds one [`MigrationSet`] per scope from the scripts on disk and the
//! cached ledger.
//!

use std::path::Path;
use std::sync::Arc;

use regex::Regex;

use crate::core::adapter::ExecutionAdapter;
use crate::core::engine::MigrationEngine;
use crate::core::ledger::{LedgerContext, LedgerStore};
use crate::core::set::{self, MigrationEvent, MigrationSet};
use crate::error::MigrateError;
use crate::model::{MigrationScript, Scope, ScopeSelection, Space};
use crate::opts::LoadOpts;
use crate::util;

const DESCRIPTION_PATTERN: &str =
    r#"module\.exports\.description\s*=\s*(?:'((?:[^'\\]|\\.)*)'|"((?:[^"\\]|\\.)*)")"#;

/// Sets for every selected scope. A scope that fails to load does not stop
/// the others, a ledger that cannot be read stops everything.
pub async fn load(
    space: &Space,
    opts: &LoadOpts,
    engine: Arc<dyn MigrationEngine>,
) -> Result<Vec<(Scope, Result<MigrationSet, MigrateError>)>, MigrateError> {
    let ctx = Arc::new(LedgerContext::new(space.clone()));
    ctx.populate().await?;

    let adapter = ExecutionAdapter::new(engine, space.clone(), opts.dry_run);
    let scopes = discover_scopes(&opts.migrations_dir, &opts.selection)?;
    log::debug!("loading {} scope(s) from {:?}", scopes.len(), opts.migrations_dir);

    let mut sets = Vec::with_capacity(scopes.len());
    for scope in scopes {
        let set = load_scope(&ctx, &adapter, &scope, opts).await;
        if let Err(err) = &set {
            log::error!("could not load migrations for {}: {}", scope, err);
        }
        sets.push((scope, set));
    }
    Ok(sets)
}

pub fn discover_scopes(
    migrations_dir: &Path,
    selection: &ScopeSelection,
) -> Result<Vec<Scope>, MigrateError> {
    match selection {
        ScopeSelection::Explicit(ids) => Ok(ids.iter().map(Scope::content_type).collect()),
        ScopeSelection::Consolidated => Ok(vec![Scope::Consolidated]),
        ScopeSelection::All => {
            if !migrations_dir.exists() {
                return Err(MigrateError::path_does_not_exist(migrations_dir));
            }
            Ok(util::fs::list_subdir_names(migrations_dir)?
                .into_iter()
                .map(Scope::ContentType)
                .collect())
        }
    }
}

async fn load_scope(
    ctx: &Arc<LedgerContext>,
    adapter: &ExecutionAdapter,
    scope: &Scope,
    opts: &LoadOpts,
) -> Result<MigrationSet, MigrateError> {
    let dir = scope.dir(&opts.migrations_dir);
    if !dir.is_dir() {
        return Err(MigrateError::path_does_not_exist(&dir));
    }
    let scripts = read_scripts(&dir, &opts.extension)?;

    let store = LedgerStore::new(scope.clone(), ctx.clone(), opts.dry_run);
    let ledger = store.load().await?;

    let wrapped = scripts
        .iter()
        .map(|script| adapter.wrap(script, scope))
        .collect();
    let mut set = MigrationSet::new(scope.clone(), store, wrapped, &ledger);
    set.on(set::log_listener());

    for record in &ledger.migrations {
        if !scripts.iter().any(|s| s.title == record.title) {
            set.emit(MigrationEvent::Warning(format!(
                "{} is in the ledger of {} but not in {:?}",
                record.title, scope, dir
            )));
        }
    }
    Ok(set)
}

/// Scripts in `dir` sorted by file name.
pub fn read_scripts(dir: &Path, extension: &str) -> Result<Vec<MigrationScript>, MigrateError> {
    let pattern = Regex::new(DESCRIPTION_PATTERN)?;
    util::fs::list_files_with_extension(dir, extension)?
        .into_iter()
        .map(|path| -> Result<MigrationScript, MigrateError> {
            let title = util::fs::file_name_str(&path)?;
            let source = util::fs::read_from_path(&path)?;
            Ok(MigrationScript {
                title,
                description: parse_description(&pattern, &source),
                path,
            })
        })
        .collect()
}

fn parse_description(pattern: &Regex, source: &str) -> String {
    pattern
        .captures(source)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| unescape(m.as_str()))
        .unwrap_or_default()
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
