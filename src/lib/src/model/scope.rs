use std::fmt;
use std::path::{Path, PathBuf};

use crate::constants::CONSOLIDATED_SCOPE_KEY;

/// The unit migrations are tracked for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scope {
    ContentType(String),
    Consolidated,
}

impl Scope {
    pub fn content_type(id: impl AsRef<str>) -> Scope {
        Scope::ContentType(id.as_ref().to_string())
    }

    /// Key of the ledger entry for this scope.
    pub fn key(&self) -> &str {
        match self {
            Scope::ContentType(id) => id,
            Scope::Consolidated => CONSOLIDATED_SCOPE_KEY,
        }
    }

    /// Directory holding this scope's scripts.
    pub fn dir(&self, migrations_dir: &Path) -> PathBuf {
        match self {
            Scope::ContentType(id) => migrations_dir.join(id),
            Scope::Consolidated => migrations_dir.to_path_buf(),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Which scopes a command should touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeSelection {
    Explicit(Vec<String>),
    All,
    Consolidated,
}

impl ScopeSelection {
    /// Explicit ids win, then the layout decides between one consolidated
    /// scope and every content type folder.
    pub fn from_args(content_types: Vec<String>, consolidated: bool) -> ScopeSelection {
        if consolidated {
            ScopeSelection::Consolidated
        } else if content_types.is_empty() {
            ScopeSelection::All
        } else {
            ScopeSelection::Explicit(content_types)
        }
    }

    pub fn is_consolidated(&self) -> bool {
        matches!(self, ScopeSelection::Consolidated)
    }
}
