use crate::constants::{ACCESS_TOKEN_ENV, CONFIG_DIR, CTF_MIGRATE, DEFAULT_HOST};
use crate::error::MigrateError;
use crate::util;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

pub const AUTH_CONFIG_FILENAME: &str = "auth_config.toml";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HostConfig {
    pub host: String,
    pub access_token: Option<String>,
}

impl HostConfig {
    pub fn from_host(host: &str) -> HostConfig {
        HostConfig {
            host: String::from(host),
            access_token: None,
        }
    }
}

// Hash on the host so lookups by host are cheap
impl PartialEq for HostConfig {
    fn eq(&self, other: &HostConfig) -> bool {
        self.host == other.host
    }
}
impl Eq for HostConfig {}
impl Hash for HostConfig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.host.hash(state);
    }
}

/// Management tokens per API host, stored in `$HOME/.config/ctfmigrate/auth_config.toml`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthConfig {
    pub default_host: Option<String>,
    pub host_configs: HashSet<HostConfig>,
}

impl AuthConfig {
    pub fn new(path: &Path) -> Result<AuthConfig, MigrateError> {
        let contents = util::fs::read_from_path(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn new_empty() -> AuthConfig {
        AuthConfig {
            default_host: DEFAULT_HOST.to_string().into(),
            host_configs: HashSet::new(),
        }
    }

    pub fn config_file() -> Result<PathBuf, MigrateError> {
        if std::env::var("TEST").is_ok() {
            return Ok(PathBuf::from("data/test/config").join(AUTH_CONFIG_FILENAME));
        }
        Ok(util::fs::config_dir()?.join(AUTH_CONFIG_FILENAME))
    }

    pub fn get() -> Result<AuthConfig, MigrateError> {
        let config_file = Self::config_file()?;
        log::debug!("looking for config file in...{:?}", config_file);
        if config_file.exists() {
            AuthConfig::new(&config_file)
        } else {
            log::debug!("unable to find auth config file at {:?}", config_file);
            Err(MigrateError::access_token_not_set())
        }
    }

    pub fn get_or_create() -> Result<AuthConfig, MigrateError> {
        match Self::get() {
            Ok(config) => Ok(config),
            Err(_err) => {
                let config = Self::new_empty();
                config.save_default()?;
                println!("created a new config file in \"$HOME/{CONFIG_DIR}/{CTF_MIGRATE}/{AUTH_CONFIG_FILENAME}\"");
                Ok(config)
            }
        }
    }

    pub fn save_default(&self) -> Result<(), MigrateError> {
        let config_file = Self::config_file()?;
        log::debug!("Saving config to {:?}", config_file);
        if let Some(parent) = config_file.parent() {
            util::fs::create_dir_all(parent)?;
        }
        self.save(&config_file)
    }

    pub fn save(&self, path: &Path) -> Result<(), MigrateError> {
        let toml = toml::to_string(&self)?;
        util::fs::write_to_path(path, &toml)
    }

    pub fn add_host_access_token<S: AsRef<str>>(&mut self, host: S, token: S) {
        self.host_configs.replace(HostConfig {
            host: String::from(host.as_ref()),
            access_token: Some(String::from(token.as_ref())),
        });
    }

    pub fn access_token_for_host<S: AsRef<str>>(&self, host: S) -> Option<String> {
        let host = host.as_ref();
        if let Some(config) = self.host_configs.get(&HostConfig::from_host(host)) {
            if config.access_token.is_none() {
                log::debug!("no access_token found for host \"{}\"", config.host);
            }
            config.access_token.clone()
        } else {
            log::debug!("no host configuration found for {}", host);
            None
        }
    }

    /// The configured default host, unless it is unset or empty.
    pub fn host(&self) -> String {
        match &self.default_host {
            Some(host) if !host.is_empty() => host.clone(),
            _ => DEFAULT_HOST.to_string(),
        }
    }
}

/// Explicit flag, then the environment, then the auth config for the host.
pub fn resolve_access_token(
    host: impl AsRef<str>,
    explicit: Option<&str>,
) -> Result<String, MigrateError> {
    if let Some(token) = explicit {
        return Ok(token.to_string());
    }
    if let Ok(token) = std::env::var(ACCESS_TOKEN_ENV) {
        if !token.is_empty() {
            return Ok(token);
        }
    }
    match AuthConfig::get() {
        Ok(config) => config
            .access_token_for_host(host)
            .ok_or_else(MigrateError::access_token_not_set),
        Err(err) => {
            log::debug!("resolve_access_token error getting config: {}", err);
            Err(MigrateError::access_token_not_set())
        }
    }
}
