use async_trait::async_trait;
use clap::{Arg, Command};

use libctfmigrate::api::endpoint;
use libctfmigrate::config::{AuthConfig, EngineConfig};
use libctfmigrate::error::MigrateError;

use crate::cmd::RunCmd;
pub const NAME: &str = "config";
pub struct ConfigCmd;

#[async_trait]
impl RunCmd for ConfigCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        // Setups the CLI args for the command
        Command::new(NAME)
            .about("Sets tokens and the migration engine in ~/.config/ctfmigrate")
            .arg(
                Arg::new("auth-token")
                    .long("auth")
                    .number_of_values(2)
                    .value_names(["HOST", "TOKEN"])
                    .help("Set the management token for a specific API host.")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("default-host")
                    .long("default-host")
                    .help("Sets the API host used when --host is not passed.")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("engine")
                    .long("engine")
                    .value_name("COMMAND")
                    .help("Sets the command that executes a single migration script.")
                    .action(clap::ArgAction::Set),
            )
            .arg_required_else_help(true)
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), MigrateError> {
        if let Some(auth) = args.get_many::<String>("auth-token") {
            if let [host, token] = auth.collect::<Vec<_>>()[..] {
                self.set_auth_token(host, token)?;
            } else {
                eprintln!("invalid arguments for --auth");
            }
        }

        if let Some(default_host) = args.get_one::<String>("default-host") {
            self.set_default_host(default_host)?;
        }

        if let Some(engine) = args.get_one::<String>("engine") {
            self.set_engine(engine)?;
        }

        Ok(())
    }
}

impl ConfigCmd {
    pub fn set_auth_token(&self, host: &str, token: &str) -> Result<(), MigrateError> {
        let host = endpoint::parse_host(host)?;
        let mut config = AuthConfig::get_or_create()?;
        config.add_host_access_token(host.as_str(), token);
        config.save_default()?;
        println!("Authentication token set for host: {host}");
        Ok(())
    }

    pub fn set_default_host(&self, host: &str) -> Result<(), MigrateError> {
        let mut config = AuthConfig::get_or_create()?;
        if host.is_empty() {
            config.default_host = None;
        } else {
            config.default_host = Some(endpoint::parse_host(host)?);
        }
        config.save_default()?;
        Ok(())
    }

    pub fn set_engine(&self, command: &str) -> Result<(), MigrateError> {
        let config = EngineConfig::from_command_line(command)?;
        let path = EngineConfig::config_file()?;
        if let Some(parent) = path.parent() {
            libctfmigrate::util::fs::create_dir_all(parent)?;
        }
        config.save(&path)?;
        println!("Migration engine set to: {}", config.command.join(" "));
        Ok(())
    }
}
