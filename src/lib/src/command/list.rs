use std::sync::Arc;

use crate::constants::LIST_TIMESTAMP_FORMAT;
use crate::core::engine::DisabledEngine;
use crate::core::loader;
use crate::error::MigrateError;
use crate::model::{MigrationRecord, Scope, Space};
use crate::opts::LoadOpts;
use crate::util;

/// What is applied and what is pending, per scope.
pub async fn list(
    space: &Space,
    opts: &LoadOpts,
) -> Result<Vec<(Scope, Result<Vec<MigrationRecord>, MigrateError>)>, MigrateError> {
    let sets = loader::load(space, opts, Arc::new(DisabledEngine)).await?;
    Ok(sets
        .into_iter()
        .map(|(scope, set)| {
            let records = set.map(|set| set.records().into_iter().cloned().collect::<Vec<_>>());
            (scope, records)
        })
        .collect())
}

/// `[2018-01-01 10:00:00] <title>  <description>` in local time, or
/// `[pending] <title>`.
pub fn format_record(record: &MigrationRecord) -> String {
    let Some(timestamp) = record.timestamp else {
        return format!("[pending] {}", record.title);
    };
    let at = match util::millis::to_local(timestamp) {
        Some(at) => at.format(LIST_TIMESTAMP_FORMAT).to_string(),
        None => timestamp.to_string(),
    };
    if record.description.is_empty() {
        format!("[{}] {}", at, record.title)
    } else {
        format!("[{}] {}  {}", at, record.title, record.description)
    }
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use crate::command::list::format_record;
    use crate::error::MigrateError;
    use crate::model::MigrationRecord;

    #[test]
    fn test_format_pending_record() {
        let record = MigrationRecord::pending("20180101000000-create-horse.js", "Horse");
        assert_eq!(format_record(&record), "[pending] 20180101000000-create-horse.js");
    }

    #[test]
    fn test_format_applied_record() -> Result<(), MigrateError> {
        let record = MigrationRecord::applied(
            "20180101000000-create-horse.js",
            "Create content model for Horse",
            1_514_764_800_000,
        );
        let pattern = Regex::new(
            r"^\[\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\] 20180101000000-create-horse\.js  Create content model for Horse$",
        )?;
        assert!(pattern.is_match(&format_record(&record)));
        Ok(())
    }
}
