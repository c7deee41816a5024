//! Core functionality for ctfmigrate
//!

pub mod adapter;
pub mod bootstrap;
pub mod engine;
pub mod ledger;
pub mod loader;
pub mod set;
