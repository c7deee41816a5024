use async_trait::async_trait;
use clap::Command;
use colored::Colorize;

use libctfmigrate::command;
use libctfmigrate::error::MigrateError;
use libctfmigrate::opts::LoadOpts;

use crate::cmd::RunCmd;
use crate::helpers;

pub const NAME: &str = "list";
pub struct ListCmd;

#[async_trait]
impl RunCmd for ListCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        let command = Command::new(NAME).about("Show applied and pending migrations");
        let command = helpers::with_space_args(command);
        let command = helpers::with_content_type_args(command, true);
        helpers::with_migrations_dir_arg(command)
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), MigrateError> {
        let space = helpers::space_from_args(args)?;
        let opts = LoadOpts::from_args(
            helpers::migrations_dir_from_args(args),
            helpers::content_types_from_args(args),
            false,
        );

        let mut failed: Vec<String> = vec![];
        for (scope, records) in command::list(&space, &opts).await? {
            println!("{}", scope.to_string().bold());
            match records {
                Ok(records) => {
                    for record in records.iter() {
                        let line = command::list::format_record(record);
                        if record.is_applied() {
                            println!("  {}", line.green());
                        } else {
                            println!("  {}", line.yellow());
                        }
                    }
                }
                Err(err) => {
                    eprintln!("  {}", err.to_string().red());
                    failed.push(scope.key().to_string());
                }
            }
        }

        if failed.is_empty() {
            Ok(())
        } else {
            Err(MigrateError::scope_failures(&failed))
        }
    }
}
