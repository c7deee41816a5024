use std::path::PathBuf;
use std::sync::Arc;

use clap::{Arg, ArgAction, ArgMatches, Command};

use libctfmigrate::api::endpoint;
use libctfmigrate::config::auth_config::resolve_access_token;
use libctfmigrate::config::{AuthConfig, EngineConfig};
use libctfmigrate::constants;
use libctfmigrate::core::engine::{CommandEngine, MigrationEngine};
use libctfmigrate::error::MigrateError;
use libctfmigrate::model::Space;

pub const ACCESS_TOKEN_ARG: &str = "access-token";
pub const SPACE_ID_ARG: &str = "space-id";
pub const ENVIRONMENT_ID_ARG: &str = "environment-id";
pub const HOST_ARG: &str = "host";
pub const CONTENT_TYPE_ARG: &str = "content-type";
pub const ALL_ARG: &str = "all";
pub const MIGRATIONS_DIR_ARG: &str = "migrations-dir";
pub const DRY_RUN_ARG: &str = "dry-run";
pub const ENGINE_ARG: &str = "engine";
pub const FILE_ARG: &str = "file";

/// `--access-token`, `--space-id`, `--environment-id` and `--host`
pub fn with_space_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ACCESS_TOKEN_ARG)
                .long(ACCESS_TOKEN_ARG)
                .short('t')
                .help(format!(
                    "Contentful management API token. Falls back to ${} and then the auth config.",
                    constants::ACCESS_TOKEN_ENV
                ))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new(SPACE_ID_ARG)
                .long(SPACE_ID_ARG)
                .short('s')
                .help(format!(
                    "Id of the space to run against. Falls back to ${}.",
                    constants::SPACE_ID_ENV
                ))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new(ENVIRONMENT_ID_ARG)
                .long(ENVIRONMENT_ID_ARG)
                .short('e')
                .help(format!(
                    "Id of the environment within the space. Falls back to ${}, then '{}'.",
                    constants::ENVIRONMENT_ID_ENV,
                    constants::DEFAULT_ENVIRONMENT_ID
                ))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new(HOST_ARG)
                .long(HOST_ARG)
                .help("Management API host, defaults to the configured default host.")
                .action(ArgAction::Set),
        )
}

/// `--migrations-dir`
pub fn with_migrations_dir_arg(command: Command) -> Command {
    command.arg(
        Arg::new(MIGRATIONS_DIR_ARG)
            .long(MIGRATIONS_DIR_ARG)
            .help("Folder holding the migration scripts.")
            .default_value(constants::MIGRATIONS_DIR)
            .action(ArgAction::Set),
    )
}

/// `--content-type` (repeatable) and `--all`, exactly one of them.
pub fn with_content_type_args(command: Command, allow_all: bool) -> Command {
    let command = command.arg(
        Arg::new(CONTENT_TYPE_ARG)
            .long(CONTENT_TYPE_ARG)
            .short('c')
            .help("Content type(s) to operate on.")
            .num_args(1..)
            .action(ArgAction::Append),
    );
    if !allow_all {
        return command;
    }
    command
        .arg(
            Arg::new(ALL_ARG)
                .long(ALL_ARG)
                .short('a')
                .help("Operate on every content type.")
                .conflicts_with(CONTENT_TYPE_ARG)
                .action(ArgAction::SetTrue),
        )
        .group(
            clap::ArgGroup::new("scope")
                .args([CONTENT_TYPE_ARG, ALL_ARG])
                .required(true),
        )
}

pub fn with_dry_run_arg(command: Command) -> Command {
    command.arg(
        Arg::new(DRY_RUN_ARG)
            .long(DRY_RUN_ARG)
            .short('d')
            .help("Only show what would run, without touching the space or the ledger.")
            .action(ArgAction::SetTrue),
    )
}

pub fn with_engine_arg(command: Command) -> Command {
    command.arg(
        Arg::new(ENGINE_ARG)
            .long(ENGINE_ARG)
            .value_name("COMMAND")
            .help("Command that executes a single migration script, the script path is appended.")
            .action(ArgAction::Set),
    )
}

fn arg_or_env(args: &ArgMatches, name: &str, env: &str) -> Option<String> {
    args.get_one::<String>(name)
        .cloned()
        .or_else(|| std::env::var(env).ok().filter(|value| !value.is_empty()))
}

pub fn space_from_args(args: &ArgMatches) -> Result<Space, MigrateError> {
    let host = match args.get_one::<String>(HOST_ARG) {
        Some(host) => endpoint::parse_host(host)?,
        None => AuthConfig::get_or_create()?.host(),
    };
    let Some(space_id) = arg_or_env(args, SPACE_ID_ARG, constants::SPACE_ID_ENV) else {
        return Err(MigrateError::basic_str(format!(
            "Must supply --{SPACE_ID_ARG} or set ${}",
            constants::SPACE_ID_ENV
        )));
    };
    let environment_id = arg_or_env(args, ENVIRONMENT_ID_ARG, constants::ENVIRONMENT_ID_ENV)
        .unwrap_or_else(|| constants::DEFAULT_ENVIRONMENT_ID.to_string());
    let explicit = args.get_one::<String>(ACCESS_TOKEN_ARG).map(String::as_str);
    let access_token = resolve_access_token(&host, explicit)?;

    Ok(Space::new(space_id, access_token)
        .with_environment(environment_id)
        .with_host(host))
}

/// Empty when `--all` was passed.
pub fn content_types_from_args(args: &ArgMatches) -> Vec<String> {
    args.get_many::<String>(CONTENT_TYPE_ARG)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

pub fn migrations_dir_from_args(args: &ArgMatches) -> PathBuf {
    args.get_one::<String>(MIGRATIONS_DIR_ARG)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(constants::MIGRATIONS_DIR))
}

pub fn dry_run_from_args(args: &ArgMatches) -> bool {
    args.get_flag(DRY_RUN_ARG)
}

/// `--engine`, then the engine config file.
pub fn engine_from_args(args: &ArgMatches) -> Result<Arc<dyn MigrationEngine>, MigrateError> {
    let config = match args.get_one::<String>(ENGINE_ARG) {
        Some(command) => EngineConfig::from_command_line(command)?,
        None => EngineConfig::get()?,
    };
    log::debug!("using migration engine {:?}", config.command);
    Ok(Arc::new(CommandEngine::new(config)))
}
