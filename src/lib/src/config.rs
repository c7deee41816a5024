//! Configuration for ctfmigrate: access tokens per host, the external
//! migration engine and the on-disk migrations layout
//!

pub mod auth_config;
pub mod engine_config;
pub mod migrations_config;

pub use crate::config::auth_config::AuthConfig;
pub use crate::config::auth_config::AUTH_CONFIG_FILENAME;

pub use crate::config::engine_config::EngineConfig;
pub use crate::config::engine_config::ENGINE_CONFIG_FILENAME;

pub use crate::config::migrations_config::MigrationsConfig;
