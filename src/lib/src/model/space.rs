use std::fmt;

use crate::constants::{DEFAULT_ENVIRONMENT_ID, DEFAULT_HOST};

/// Where the content model and the ledger live.
#[derive(Clone, PartialEq, Eq)]
pub struct Space {
    pub host: String,
    pub space_id: String,
    pub environment_id: String,
    pub access_token: String,
}

impl Space {
    pub fn new(space_id: impl AsRef<str>, access_token: impl AsRef<str>) -> Space {
        Space {
            host: DEFAULT_HOST.to_string(),
            space_id: space_id.as_ref().to_string(),
            environment_id: DEFAULT_ENVIRONMENT_ID.to_string(),
            access_token: access_token.as_ref().to_string(),
        }
    }

    pub fn with_environment(mut self, environment_id: impl AsRef<str>) -> Space {
        self.environment_id = environment_id.as_ref().to_string();
        self
    }

    pub fn with_host(mut self, host: impl AsRef<str>) -> Space {
        self.host = host.as_ref().trim_end_matches('/').to_string();
        self
    }

    /// Base url of everything environment scoped.
    pub fn url(&self) -> String {
        format!(
            "{}/spaces/{}/environments/{}",
            self.host, self.space_id, self.environment_id
        )
    }
}

// Keep the token out of logs
impl fmt::Debug for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Space")
            .field("host", &self.host)
            .field("space_id", &self.space_id)
            .field("environment_id", &self.environment_id)
            .finish()
    }
}
