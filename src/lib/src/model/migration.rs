use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A migration script on disk. The file name is its identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationScript {
    pub title: String,
    pub path: PathBuf,
    pub description: String,
}

/// One line of the ledger. `timestamp` is `None` while the script is pending.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MigrationRecord {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

impl MigrationRecord {
    pub fn pending(title: impl AsRef<str>, description: impl AsRef<str>) -> MigrationRecord {
        MigrationRecord {
            title: title.as_ref().to_string(),
            description: description.as_ref().to_string(),
            timestamp: None,
        }
    }

    pub fn applied(
        title: impl AsRef<str>,
        description: impl AsRef<str>,
        timestamp: i64,
    ) -> MigrationRecord {
        MigrationRecord {
            title: title.as_ref().to_string(),
            description: description.as_ref().to_string(),
            timestamp: Some(timestamp),
        }
    }

    pub fn is_applied(&self) -> bool {
        self.timestamp.is_some()
    }
}

/// What has run for one scope, in file name order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MigrationLedger {
    #[serde(default)]
    pub last_run: String,
    #[serde(default)]
    pub migrations: Vec<MigrationRecord>,
}

impl MigrationLedger {
    /// A ledger without a single applied record, never stored remotely.
    pub fn is_empty(&self) -> bool {
        !self.migrations.iter().any(MigrationRecord::is_applied)
    }

    pub fn applied(&self) -> impl Iterator<Item = &MigrationRecord> {
        self.migrations.iter().filter(|m| m.is_applied())
    }

    pub fn find(&self, title: &str) -> Option<&MigrationRecord> {
        self.migrations.iter().find(|m| m.title == title)
    }

    /// Title of the last applied record, or empty.
    pub fn compute_last_run(&self) -> String {
        self.applied()
            .last()
            .map(|m| m.title.clone())
            .unwrap_or_default()
    }
}
