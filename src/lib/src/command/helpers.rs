use std::sync::Arc;

use crate::core::engine::MigrationEngine;
use crate::core::loader;
use crate::error::MigrateError;
use crate::model::{Direction, Space};
use crate::opts::LoadOpts;

/// Run every loaded scope one after the other. A failing scope is logged and
/// the rest still run, the error names every scope that failed.
pub async fn run_scopes(
    space: &Space,
    opts: &LoadOpts,
    engine: Arc<dyn MigrationEngine>,
    direction: Direction,
    target: Option<&str>,
) -> Result<usize, MigrateError> {
    let sets = loader::load(space, opts, engine).await?;

    let mut total = 0;
    let mut failed: Vec<String> = vec![];
    for (scope, set) in sets {
        let result = match set {
            Ok(mut set) => match direction {
                Direction::Up => set.up(target).await,
                Direction::Down => set.down(target).await,
            },
            Err(err) => Err(err),
        };
        match result {
            Ok(count) => {
                log::debug!("{} {}: {} migration(s)", direction, scope, count);
                total += count;
            }
            Err(err) => {
                log::error!("{} failed for {}: {}", direction, scope, err);
                failed.push(scope.key().to_string());
            }
        }
    }

    if failed.is_empty() {
        Ok(total)
    } else {
        Err(MigrateError::scope_failures(&failed))
    }
}
