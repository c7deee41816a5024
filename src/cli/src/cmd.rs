use libctfmigrate::error::MigrateError;

use async_trait::async_trait;

pub mod bootstrap;
pub use bootstrap::BootstrapCmd;

pub mod config;
pub use config::ConfigCmd;

pub mod down;
pub use down::DownCmd;

pub mod init;
pub use init::InitCmd;

pub mod list;
pub use list::ListCmd;

pub mod up;
pub use up::UpCmd;

#[async_trait]
pub trait RunCmd {
    fn name(&self) -> &str;
    fn args(&self) -> clap::Command;
    async fn run(&self, args: &clap::ArgMatches) -> Result<(), MigrateError>;
}
