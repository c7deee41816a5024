use std::collections::HashMap;
use std::process::ExitCode;

use clap::Command;
use colored::Colorize;

use libctfmigrate::util;

pub mod cmd;
pub mod helpers;

#[tokio::main]
async fn main() -> ExitCode {
    util::logging::init_logging();

    let cmds: Vec<Box<dyn cmd::RunCmd>> = vec![
        Box::new(cmd::BootstrapCmd),
        Box::new(cmd::ConfigCmd),
        Box::new(cmd::DownCmd),
        Box::new(cmd::InitCmd),
        Box::new(cmd::ListCmd),
        Box::new(cmd::UpCmd),
    ];

    let mut command = Command::new("ctf-migrate")
        .version(libctfmigrate::constants::CTF_MIGRATE_VERSION)
        .about("Versioned, remotely tracked migrations for Contentful content models")
        .subcommand_required(true)
        .arg_required_else_help(true);

    // Add all the commands to the command line
    let mut runners: HashMap<String, Box<dyn cmd::RunCmd>> = HashMap::new();
    for cmd in cmds {
        command = command.subcommand(cmd.args());
        runners.insert(cmd.name().to_string(), cmd);
    }

    // Parse the command line args and run the appropriate command
    let matches = command.get_matches();
    match matches.subcommand() {
        Some((command, args)) => {
            if let Some(runner) = runners.get(command) {
                match runner.run(args).await {
                    Ok(_) => {}
                    Err(err) => {
                        eprintln!("{}", format!("🚨 {err}").red());
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                eprintln!("Unknown command `ctf-migrate {command}`");
                return ExitCode::FAILURE;
            }
        }
        _ => unreachable!(), // subcommand_required
    }

    ExitCode::SUCCESS
}
