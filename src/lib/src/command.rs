//! # ctfmigrate Commands - entry point for all ctfmigrate commands
//!
//! Top level commands you are likely to run against a space
//!

pub mod bootstrap;
pub mod down;
pub mod helpers;
pub mod init;
pub mod list;
pub mod up;

pub use crate::command::bootstrap::bootstrap;
pub use crate::command::down::down;
pub use crate::command::init::init;
pub use crate::command::list::list;
pub use crate::command::up::up;
