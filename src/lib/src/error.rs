//! Errors for the ctfmigrate library
//!
//! Enumeration for all errors that can occur while bootstrapping, loading,
//! running and recording migrations.
//!

use derive_more::{Display, Error};
use std::fmt::Debug;
use std::io;
use std::path::Path;

pub mod path_buf_error;
pub mod string_error;

pub use crate::error::path_buf_error::PathBufError;
pub use crate::error::string_error::StringError;

pub const ACCESS_TOKEN_NOT_FOUND: &str =
    "management access token not found, pass --access-token, set CONTENTFUL_MANAGEMENT_ACCESS_TOKEN or configure one with:\n\nctf-migrate config --auth <HOST> <TOKEN>\n";

pub const LEDGER_NOT_INITIALIZED: &str =
    "the space has no migration ledger content type, create it with:\n\nctf-migrate init -s <SPACE_ID>\n";

#[derive(Debug, Display, Error)]
pub enum MigrateError {
    // Bootstrap
    SchemaFetch(StringError),
    ScriptWrite(Box<PathBufError>),

    // Ledger
    LedgerRead(StringError),
    LedgerWrite(StringError),

    // Running migrations
    Execution(StringError),
    MigrationNotFound(StringError),
    ScopeFailures(StringError),

    // Remote platform
    RemoteRequest(StringError),
    RemoteNotFound(StringError),

    // Config
    ConfigNotFound(StringError),
    InvalidHost(StringError),

    // Filesystem
    PathDoesNotExist(Box<PathBufError>),

    // External Library Errors
    IO(io::Error),
    TomlSer(toml::ser::Error),
    TomlDe(toml::de::Error),
    URL(url::ParseError),
    JSON(serde_json::Error),
    HTTP(reqwest::Error),
    Regex(regex::Error),

    // Fallback
    Basic(StringError),
}

impl MigrateError {
    pub fn basic_str(s: impl AsRef<str>) -> Self {
        MigrateError::Basic(StringError::from(s.as_ref()))
    }

    pub fn schema_fetch(err: impl std::fmt::Display) -> Self {
        MigrateError::SchemaFetch(StringError::from(format!(
            "could not fetch content model: {err}"
        )))
    }

    pub fn script_write(path: impl AsRef<Path>, err: impl std::fmt::Display) -> Self {
        MigrateError::ScriptWrite(Box::new(PathBufError::new(path, err.to_string())))
    }

    pub fn ledger_read(err: impl std::fmt::Display) -> Self {
        MigrateError::LedgerRead(StringError::from(format!(
            "could not read migration ledger: {err}"
        )))
    }

    pub fn ledger_write(scope: impl AsRef<str>, err: impl std::fmt::Display) -> Self {
        MigrateError::LedgerWrite(StringError::from(format!(
            "could not write migration ledger for '{}': {err}",
            scope.as_ref()
        )))
    }

    pub fn execution(title: impl AsRef<str>, err: impl std::fmt::Display) -> Self {
        MigrateError::Execution(StringError::from(format!(
            "migration '{}' failed: {err}",
            title.as_ref()
        )))
    }

    pub fn migration_not_found(title: impl AsRef<str>) -> Self {
        MigrateError::MigrationNotFound(StringError::from(format!(
            "could not find migration: {}",
            title.as_ref()
        )))
    }

    pub fn scope_failures(failed: &[String]) -> Self {
        MigrateError::ScopeFailures(StringError::from(format!(
            "migrations failed for {} scope(s): {}",
            failed.len(),
            failed.join(", ")
        )))
    }

    pub fn remote_request(url: impl AsRef<str>, status: impl Debug, msg: impl AsRef<str>) -> Self {
        MigrateError::RemoteRequest(StringError::from(format!(
            "request to {} failed [{status:?}]: {}",
            url.as_ref(),
            msg.as_ref()
        )))
    }

    pub fn remote_not_found(url: impl AsRef<str>) -> Self {
        MigrateError::RemoteNotFound(StringError::from(format!(
            "resource not found: {}",
            url.as_ref()
        )))
    }

    pub fn access_token_not_set() -> Self {
        MigrateError::ConfigNotFound(StringError::from(ACCESS_TOKEN_NOT_FOUND))
    }

    pub fn ledger_not_initialized() -> Self {
        MigrateError::LedgerRead(StringError::from(LEDGER_NOT_INITIALIZED))
    }

    pub fn home_dir_not_found() -> Self {
        MigrateError::basic_str("Home directory not found")
    }

    pub fn path_does_not_exist(path: impl AsRef<Path>) -> Self {
        MigrateError::PathDoesNotExist(Box::new(PathBufError::new(path, "does not exist")))
    }

    pub fn invalid_host(host: impl AsRef<str>) -> Self {
        MigrateError::InvalidHost(StringError::from(format!(
            "invalid host '{}', expected something like https://api.contentful.com",
            host.as_ref()
        )))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, MigrateError::RemoteNotFound(_))
    }
}

impl From<io::Error> for MigrateError {
    fn from(error: io::Error) -> Self {
        MigrateError::IO(error)
    }
}

impl From<String> for MigrateError {
    fn from(error: String) -> Self {
        MigrateError::Basic(StringError::from(error))
    }
}

impl From<toml::ser::Error> for MigrateError {
    fn from(error: toml::ser::Error) -> Self {
        MigrateError::TomlSer(error)
    }
}

impl From<toml::de::Error> for MigrateError {
    fn from(error: toml::de::Error) -> Self {
        MigrateError::TomlDe(error)
    }
}

impl From<url::ParseError> for MigrateError {
    fn from(error: url::ParseError) -> Self {
        MigrateError::URL(error)
    }
}

impl From<serde_json::Error> for MigrateError {
    fn from(error: serde_json::Error) -> Self {
        MigrateError::JSON(error)
    }
}

impl From<reqwest::Error> for MigrateError {
    fn from(error: reqwest::Error) -> Self {
        MigrateError::HTTP(error)
    }
}

impl From<regex::Error> for MigrateError {
    fn from(error: regex::Error) -> Self {
        MigrateError::Regex(error)
    }
}
