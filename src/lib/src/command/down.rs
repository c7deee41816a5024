use std::sync::Arc;

use crate::command::helpers;
use crate::core::engine::MigrationEngine;
use crate::error::MigrateError;
use crate::model::{Direction, Space};
use crate::opts::LoadOpts;

/// Revert migrations of every selected scope down to and including
/// `target`, or only the last applied one. Returns how many ran.
pub async fn down(
    space: &Space,
    opts: &LoadOpts,
    engine: Arc<dyn MigrationEngine>,
    target: Option<&str>,
) -> Result<usize, MigrateError> {
    helpers::run_scopes(space, opts, engine, Direction::Down, target).await
}
