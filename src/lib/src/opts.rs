pub mod bootstrap_opts;
pub mod load_opts;

pub use crate::opts::bootstrap_opts::BootstrapOpts;
pub use crate::opts::load_opts::LoadOpts;
