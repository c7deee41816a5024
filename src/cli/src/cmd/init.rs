use async_trait::async_trait;
use clap::{Arg, ArgAction, Command};
use colored::Colorize;

use libctfmigrate::command;
use libctfmigrate::error::MigrateError;

use crate::cmd::RunCmd;
use crate::helpers;

pub const NAME: &str = "init";
pub struct InitCmd;

#[async_trait]
impl RunCmd for InitCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        let command = Command::new(NAME)
            .about("Create the content type that stores migration state in the space")
            .arg(
                Arg::new("consolidated")
                    .long("consolidated")
                    .help("Keep every script in a single folder tracked by one ledger entry.")
                    .action(ArgAction::SetTrue),
            );
        let command = helpers::with_space_args(command);
        helpers::with_migrations_dir_arg(command)
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), MigrateError> {
        let space = helpers::space_from_args(args)?;
        let migrations_dir = helpers::migrations_dir_from_args(args);
        let consolidated = args.get_flag("consolidated");

        command::init(&space, &migrations_dir, consolidated).await?;
        println!(
            "{}",
            format!(
                "Space {} is ready for migrations in {:?}",
                space.space_id, migrations_dir
            )
            .green()
        );
        Ok(())
    }
}
