use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::view::Sys;

/// Error body returned by the management API, `sys.id` holds the error kind.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ErrorResponse {
    #[serde(default)]
    pub sys: Sys,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn desc_or_msg(&self) -> String {
        match (&self.message, &self.details) {
            (Some(message), Some(details)) => format!("{}: {message} {details}", self.sys.id),
            (Some(message), None) => format!("{}: {message}", self.sys.id),
            _ => self.sys.id.clone(),
        }
    }
}
