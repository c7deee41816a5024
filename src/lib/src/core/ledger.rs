//! # Migration ledger
//!
//! The remote record of which scripts ran for each scope. One entry of the
//! `migration` content type is kept per scope, read once per run through a
//! [`LedgerContext`] and written back through a [`LedgerStore`].
//!

pub mod context;
pub mod state;
pub mod store;

pub use crate::core::ledger::context::LedgerContext;
pub use crate::core::ledger::store::LedgerStore;
