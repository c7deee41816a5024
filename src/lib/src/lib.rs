//! ctfmigrate
//!
//! Versioned migrations for Contentful content models, with the applied state
//! of every content type kept in the space itself.
//!
//! # Examples
//!
//! Generate scripts for the current content model:
//!
//! ```
//! use libctfmigrate::command;
//! use libctfmigrate::model::Space;
//! use libctfmigrate::opts::BootstrapOpts;
//!
//! let space = Space::new("space-id", "CFPAT-token");
//! let opts = BootstrapOpts::new("migrations", vec![String::from("horse")], false);
//! let created = command::bootstrap(&space, &opts).await?;
//! ```
//!
//! Apply everything pending for one content type:
//!
//! ```
//! use std::sync::Arc;
//! use libctfmigrate::command;
//! use libctfmigrate::config::EngineConfig;
//! use libctfmigrate::core::engine::CommandEngine;
//! use libctfmigrate::opts::LoadOpts;
//!
//! let engine = Arc::new(CommandEngine::new(EngineConfig::get()?));
//! let opts = LoadOpts::from_args("migrations", vec![String::from("horse")], false);
//! let applied = command::up(&space, &opts, engine, None).await?;
//! ```

pub mod api;
pub mod command;
pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod model;
pub mod opts;
pub mod util;
pub mod view;
