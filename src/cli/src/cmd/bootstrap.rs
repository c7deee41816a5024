use async_trait::async_trait;
use clap::{Arg, ArgAction, Command};
use colored::Colorize;

use libctfmigrate::command;
use libctfmigrate::error::MigrateError;
use libctfmigrate::opts::BootstrapOpts;

use crate::cmd::RunCmd;
use crate::helpers;

pub const NAME: &str = "bootstrap";
pub struct BootstrapCmd;

#[async_trait]
impl RunCmd for BootstrapCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        let command = Command::new(NAME)
            .about("Generate migration scripts from the content model of a space")
            .arg(
                Arg::new("write-state")
                    .long("write-state")
                    .short('w')
                    .help("Replace existing scripts and mark the new ones as applied.")
                    .action(ArgAction::SetTrue),
            );
        let command = helpers::with_space_args(command);
        let command = helpers::with_content_type_args(command, true);
        helpers::with_migrations_dir_arg(command)
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), MigrateError> {
        let space = helpers::space_from_args(args)?;
        let opts = BootstrapOpts::new(
            helpers::migrations_dir_from_args(args),
            helpers::content_types_from_args(args),
            args.get_flag("write-state"),
        );

        let created = command::bootstrap(&space, &opts).await?;
        for script in created.iter() {
            println!("{} {}", "created".green(), script.file_name);
        }
        if created.is_empty() {
            println!("{}", "No content types to bootstrap.".yellow());
        }
        Ok(())
    }
}
