use crate::error::MigrateError;
use crate::util;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ENGINE_CONFIG_FILENAME: &str = "engine_config.toml";

/// The external command that executes a single migration script.
///
/// ```toml
/// command = ["node", "run-migration.js"]
/// ```
///
/// The script path is appended as the last argument.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub command: Vec<String>,
}

impl EngineConfig {
    pub fn new(path: &Path) -> Result<EngineConfig, MigrateError> {
        let contents = util::fs::read_from_path(path)?;
        let config: EngineConfig = toml::from_str(&contents)?;
        if config.command.is_empty() {
            return Err(MigrateError::basic_str(format!(
                "engine config {path:?} has an empty command"
            )));
        }
        Ok(config)
    }

    pub fn from_command_line(command: impl AsRef<str>) -> Result<EngineConfig, MigrateError> {
        let command: Vec<String> = command
            .as_ref()
            .split_whitespace()
            .map(String::from)
            .collect();
        if command.is_empty() {
            return Err(MigrateError::basic_str("engine command cannot be empty"));
        }
        Ok(EngineConfig { command })
    }

    pub fn config_file() -> Result<PathBuf, MigrateError> {
        Ok(util::fs::config_dir()?.join(ENGINE_CONFIG_FILENAME))
    }

    pub fn get() -> Result<EngineConfig, MigrateError> {
        let config_file = Self::config_file()?;
        if !config_file.exists() {
            return Err(MigrateError::ConfigNotFound(
                format!(
                    "no migration engine configured, pass --engine or create {config_file:?} with:\n\ncommand = [\"node\", \"run-migration.js\"]\n"
                )
                .into(),
            ));
        }
        EngineConfig::new(&config_file)
    }

    pub fn save(&self, path: &Path) -> Result<(), MigrateError> {
        let toml = toml::to_string(&self)?;
        util::fs::write_to_path(path, &toml)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::EngineConfig;
    use crate::error::MigrateError;
    use crate::test;

    #[test]
    fn test_engine_command_from_command_line() -> Result<(), MigrateError> {
        let config = EngineConfig::from_command_line("node  scripts/run.js --quiet")?;
        assert_eq!(config.command, vec!["node", "scripts/run.js", "--quiet"]);
        assert!(EngineConfig::from_command_line("   ").is_err());
        Ok(())
    }

    #[test]
    fn test_engine_config_rejects_empty_command() -> Result<(), MigrateError> {
        test::run_empty_dir_test(|dir| {
            let path = dir.join("engine_config.toml");
            test::write_txt_file_to_path(&path, "command = []\n")?;
            assert!(EngineConfig::new(&path).is_err());

            let config = EngineConfig {
                command: vec!["node".to_string(), "run.js".to_string()],
            };
            config.save(&path)?;
            assert_eq!(EngineConfig::new(&path)?, config);
            Ok(())
        })
    }
}
