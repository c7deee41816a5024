use async_trait::async_trait;
use clap::{Arg, Command};
use colored::Colorize;

use libctfmigrate::command;
use libctfmigrate::error::MigrateError;
use libctfmigrate::model::ScopeSelection;
use libctfmigrate::opts::LoadOpts;

use crate::cmd::RunCmd;
use crate::helpers;

pub const NAME: &str = "down";
pub struct DownCmd;

#[async_trait]
impl RunCmd for DownCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        let command = Command::new(NAME)
            .about("Revert the last applied migration, or every migration down to and including FILE")
            .arg(Arg::new(helpers::FILE_ARG).help("Title of the last migration to revert."));
        let command = helpers::with_space_args(command);
        let command = helpers::with_content_type_args(command, false);
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
        // Reverting every scope at once is never implied
        if opts.selection == ScopeSelection::All {
            return Err(MigrateError::basic_str(format!(
                "Must supply --{} unless the migrations folder is consolidated",
                helpers::CONTENT_TYPE_ARG
            )));
        }
        let engine = helpers::engine_from_args(args)?;
        let target = args.get_one::<String>(helpers::FILE_ARG);

        let count = command::down(&space, &opts, engine, target.map(String::as_str)).await?;
        if count == 0 {
            println!("{}", "Nothing to revert.".green());
        } else if opts.dry_run {
            println!("{}", format!("Dry run, would revert {count} migration(s).").yellow());
        } else {
            println!("{}", format!("Reverted {count} migration(s).").green());
        }
        Ok(())
    }
}
