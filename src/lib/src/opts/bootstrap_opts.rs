use std::path::{Path, PathBuf};

use crate::config::MigrationsConfig;

#[derive(Debug, Clone)]
pub struct BootstrapOpts {
    pub migrations_dir: PathBuf,
    /// Empty means every content type
    pub content_types: Vec<String>,
    /// Also mark the generated scripts as applied in the ledger
    pub write_state: bool,
    pub consolidated: bool,
}

impl BootstrapOpts {
    pub fn new(
        migrations_dir: impl AsRef<Path>,
        content_types: Vec<String>,
        write_state: bool,
    ) -> BootstrapOpts {
        let migrations_dir = migrations_dir.as_ref().to_path_buf();
        BootstrapOpts {
            consolidated: MigrationsConfig::get(&migrations_dir).consolidated,
            migrations_dir,
            content_types,
            write_state,
        }
    }
}
