use crate::constants::MIGRATIONS_CONFIG_FILENAME;
use crate::error::MigrateError;
use crate::util;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Layout switch stored next to the scripts in `migrations/config.json`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationsConfig {
    #[serde(default)]
    pub consolidated: bool,
}

impl MigrationsConfig {
    pub fn new(consolidated: bool) -> MigrationsConfig {
        MigrationsConfig { consolidated }
    }

    pub fn config_file(migrations_dir: &Path) -> PathBuf {
        migrations_dir.join(MIGRATIONS_CONFIG_FILENAME)
    }

    /// A missing or unreadable file means per content type layout.
    pub fn get(migrations_dir: &Path) -> MigrationsConfig {
        let path = Self::config_file(migrations_dir);
        match util::fs::read_from_path(&path)
            .and_then(|contents| serde_json::from_str(&contents).map_err(MigrateError::from))
        {
            Ok(config) => config,
            Err(err) => {
                log::debug!("using per scope layout, could not read {:?}: {}", path, err);
                MigrationsConfig::default()
            }
        }
    }

    pub fn save(&self, migrations_dir: &Path) -> Result<(), MigrateError> {
        util::fs::create_dir_all(migrations_dir)?;
        let json = serde_json::to_string_pretty(self)?;
        util::fs::write_to_path(&Self::config_file(migrations_dir), &json)
    }
}
