//! # API - talk to the Contentful management API
//!
//! Every call is scoped to a [`Space`](crate::model::Space) (host, space id,
//! environment id and management token).
//!

pub mod client;
pub mod endpoint;
