use std::sync::Arc;

use crate::command::helpers;
use crate::core::engine::MigrationEngine;
use crate::error::MigrateError;
use crate::model::{Direction, Space};
use crate::opts::LoadOpts;

/// Apply pending migrations of every selected scope, up to and including
/// `target` when given. Returns how many ran.
pub async fn up(
    space: &Space,
    opts: &LoadOpts,
    engine: Arc<dyn MigrationEngine>,
    target: Option<&str>,
) -> Result<usize, MigrateError> {
    helpers::run_scopes(space, opts, engine, Direction::Up, target).await
}
