use std::path::{Path, PathBuf};

use crate::config::MigrationsConfig;
use crate::constants::DEFAULT_SCRIPT_EXTENSION;
use crate::model::ScopeSelection;

/// Where scripts live and which scopes to run.
#[derive(Debug, Clone)]
pub struct LoadOpts {
    pub migrations_dir: PathBuf,
    pub selection: ScopeSelection,
    pub dry_run: bool,
    pub extension: String,
}

impl LoadOpts {
    /// Explicit content types win over the layout stored in the migrations
    /// folder, which decides between consolidated and every scope folder.
    pub fn from_args(
        migrations_dir: impl AsRef<Path>,
        content_types: Vec<String>,
        dry_run: bool,
    ) -> LoadOpts {
        let migrations_dir = migrations_dir.as_ref().to_path_buf();
        let consolidated =
            content_types.is_empty() && MigrationsConfig::get(&migrations_dir).consolidated;
        LoadOpts {
            selection: ScopeSelection::from_args(content_types, consolidated),
            migrations_dir,
            dry_run,
            extension: DEFAULT_SCRIPT_EXTENSION.to_string(),
        }
    }
}
