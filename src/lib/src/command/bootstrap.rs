use crate::core;
use crate::core::bootstrap::CreatedScript;
use crate::error::MigrateError;
use crate::model::Space;
use crate::opts::BootstrapOpts;

/// Generate a migration script for each selected content type of the space.
///
/// With `write_state` the scripts being regenerated are deleted first and the
/// new ones are recorded as applied.
pub async fn bootstrap(
    space: &Space,
    opts: &BootstrapOpts,
) -> Result<Vec<CreatedScript>, MigrateError> {
    log::debug!("bootstrap {:?} into {:?}", space, opts.migrations_dir);
    core::bootstrap::bootstrap(space, opts).await
}
