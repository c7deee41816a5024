use async_trait::async_trait;
use clap::{Arg, Command};
use colored::Colorize;

use libctfmigrate::command;
use libctfmigrate::error::MigrateError;
use libctfmigrate::opts::LoadOpts;

use crate::cmd::RunCmd;
use crate::helpers;

pub const NAME: &str = "up";
pub struct UpCmd;

#[async_trait]
impl RunCmd for UpCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        let command = Command::new(NAME)
            .about("Apply pending migrations, optionally up to and including FILE")
            .arg(
                Arg::new(helpers::FILE_ARG)
                    .help("Title of the last migration to apply.")
                    .conflicts_with(helpers::ALL_ARG),
            );
        let command = helpers::with_space_args(command);
        let command = helpers::with_content_type_args(command, true);
        let command = helpers::with_migrations_dir_arg(command);
        let command = helpers::with_dry_run_arg(command);
        helpers::with_engine_arg(command)
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), MigrateError> {
        let space = helpers::space_from_args(args)?;
        let opts = LoadOpts::from_args(
            helpers::migrations_dir_from_args(args),
            helpers::content_types_from_args(args),
            helpers::dry_run_from_args(args),
        );
        let engine = helpers::engine_from_args(args)?;
        let target = args.get_one::<String>(helpers::FILE_ARG);

        let count = command::up(&space, &opts, engine, target.map(String::as_str)).await?;
        if count == 0 {
            println!("{}", "Nothing to migrate, everything is up to date.".green());
        } else if opts.dry_run {
            println!("{}", format!("Dry run, would apply {count} migration(s).").yellow());
        } else {
            println!("{}", format!("Applied {count} migration(s).").green());
        }
        Ok(())
    }
}
