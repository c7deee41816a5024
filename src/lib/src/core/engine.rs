//! The external engine that turns one migration script into platform
//! requests.
//!

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;

use crate::config::EngineConfig;
use crate::constants;
use crate::error::MigrateError;
use crate::model::{Direction, Scope, Space};

/// One script run in one direction.
#[derive(Debug, Clone)]
pub struct MigrationRequest {
    pub title: String,
    pub script: PathBuf,
    pub direction: Direction,
    pub scope: Scope,
    pub space: Space,
    pub dry_run: bool,
}

#[async_trait]
pub trait MigrationEngine: Send + Sync {
    async fn run(&self, request: MigrationRequest) -> Result<(), MigrateError>;
}

/// Runs a configured command with the script path as its last argument.
///
/// The target space and the run parameters are passed in the environment:
/// `CTF_SPACE_ID`, `CTF_ENVIRONMENT_ID`, `CTF_MANAGEMENT_TOKEN`,
/// `CTF_MIGRATION_DIRECTION`, `CTF_DRY_RUN` and `CTF_SCOPE`. Output goes
/// straight to the terminal.
#[derive(Debug, Clone)]
pub struct CommandEngine {
    config: EngineConfig,
}

impl CommandEngine {
    pub fn new(config: EngineConfig) -> CommandEngine {
        CommandEngine { config }
    }
}

#[async_trait]
impl MigrationEngine for CommandEngine {
    async fn run(&self, request: MigrationRequest) -> Result<(), MigrateError> {
        let Some((program, args)) = self.config.command.split_first() else {
            return Err(MigrateError::execution(
                &request.title,
                "engine command is empty",
            ));
        };
        log::debug!(
            "{} {:?} {:?} {}",
            program,
            args,
            request.script,
            request.direction
        );

        let status = tokio::process::Command::new(program)
            .args(args)
            .arg(&request.script)
            .env(constants::ENGINE_SPACE_ID_ENV, &request.space.space_id)
            .env(
                constants::ENGINE_ENVIRONMENT_ID_ENV,
                &request.space.environment_id,
            )
            .env(constants::ENGINE_ACCESS_TOKEN_ENV, &request.space.access_token)
            .env(constants::ENGINE_DIRECTION_ENV, request.direction.as_str())
            .env(constants::ENGINE_DRY_RUN_ENV, request.dry_run.to_string())
            .env(constants::ENGINE_SCOPE_ENV, request.scope.key())
            .stdin(Stdio::null())
            .status()
            .await
            .map_err(|err| MigrateError::execution(&request.title, err))?;

        if status.success() {
            Ok(())
        } else {
            Err(MigrateError::execution(
                &request.title,
                format!("{program} exited with {status}"),
            ))
        }
    }
}

/// Refuses to run anything, for commands that only read the ledger.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledEngine;

#[async_trait]
impl MigrationEngine for DisabledEngine {
    async fn run(&self, request: MigrationRequest) -> Result<(), MigrateError> {
        Err(MigrateError::execution(
            &request.title,
            "no migration engine configured",
        ))
    }
}
