use std::path::Path;

use chrono::{DateTime, Utc};

use crate::constants::{DEFAULT_SCRIPT_EXTENSION, SCRIPT_TIMESTAMP_FORMAT};
use crate::error::MigrateError;
use crate::util;

/// A script written by bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedScript {
    pub scope_id: String,
    pub file_name: String,
}

/// `<yyyyMMddHHmmss>-create-<kebab id>.<ext>`, timestamp in UTC.
pub fn script_file_name(scope_id: &str, at: DateTime<Utc>, extension: &str) -> String {
    format!(
        "{}-create-{}.{}",
        at.format(SCRIPT_TIMESTAMP_FORMAT),
        util::str::camel_to_kebab(scope_id),
        extension
    )
}

pub fn create_file(
    scope_id: &str,
    source: &str,
    migrations_dir: &Path,
    consolidated: bool,
) -> Result<CreatedScript, MigrateError> {
    create_file_with_extension(
        scope_id,
        source,
        migrations_dir,
        consolidated,
        DEFAULT_SCRIPT_EXTENSION,
    )
}

/// Write `source` into the scope's folder, or straight into the migrations
/// folder when consolidated. A file with the same name is overwritten.
pub fn create_file_with_extension(
    scope_id: &str,
    source: &str,
    migrations_dir: &Path,
    consolidated: bool,
    extension: &str,
) -> Result<CreatedScript, MigrateError> {
    let dir = if consolidated {
        migrations_dir.to_path_buf()
    } else {
        migrations_dir.join(scope_id)
    };
    std::fs::create_dir_all(&dir).map_err(|err| MigrateError::script_write(&dir, err))?;

    let file_name = script_file_name(scope_id, Utc::now(), extension);
    let path = dir.join(&file_name);
    std::fs::write(&path, source).map_err(|err| MigrateError::script_write(&path, err))?;
    log::info!("Created {}", path.display());

    Ok(CreatedScript {
        scope_id: scope_id.to_string(),
        file_name,
    })
}

/// Remove the folders of `scope_ids`, or the whole migrations folder when no
/// scope is named. Every scope is attempted even if an earlier one fails.
pub fn delete_scripts(migrations_dir: &Path, scope_ids: &[String]) -> Result<(), MigrateError> {
    if scope_ids.is_empty() {
        log::debug!("deleting all scripts in {:?}", migrations_dir);
        return util::fs::remove_dir_all(migrations_dir);
    }

    let mut failed: Vec<String> = vec![];
    for scope_id in scope_ids {
        if let Err(err) = util::fs::remove_dir_all(migrations_dir.join(scope_id)) {
            log::error!("could not delete scripts of {}: {}", scope_id, err);
            failed.push(scope_id.clone());
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        Err(MigrateError::scope_failures(&failed))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use regex::Regex;

    use crate::core::bootstrap::materializer;
    use crate::error::MigrateError;
    use crate::test;
    use crate::util;

    #[test]
    fn test_script_file_name() {
        let at = Utc.with_ymd_and_hms(2018, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(
            materializer::script_file_name("blogPost", at, "js"),
            "20180309140507-create-blog-post.js"
        );
    }

    #[test]
    fn test_create_file_in_scope_dir() -> Result<(), MigrateError> {
        test::run_empty_dir_test(|dir| {
            let created = materializer::create_file("horse", "// horse\n", dir, false)?;
            assert_eq!(created.scope_id, "horse");

            let files = util::fs::list_files_with_extension(&dir.join("horse"), "js")?;
            assert_eq!(files.len(), 1);

            let name = util::fs::file_name_str(&files[0])?;
            assert_eq!(name, created.file_name);
            let pattern = Regex::new(r"^\d{14}-create-horse\.\w+$")?;
            assert!(pattern.is_match(&name));
            assert_eq!(std::fs::read_to_string(&files[0])?, "// horse\n");
            Ok(())
        })
    }

    #[test]
    fn test_create_file_consolidated_writes_to_root() -> Result<(), MigrateError> {
        test::run_empty_dir_test(|dir| {
            let created = materializer::create_file("pegasus", "", dir, true)?;
            assert!(dir.join(&created.file_name).is_file());
            assert!(!dir.join("pegasus").exists());
            Ok(())
        })
    }

    #[test]
    fn test_delete_scripts_per_scope() -> Result<(), MigrateError> {
        test::run_empty_dir_test(|dir| {
            materializer::create_file("horse", "", dir, false)?;
            materializer::create_file("pegasus", "", dir, false)?;

            let scopes = vec!["horse".to_string(), "unicorn".to_string()];
            materializer::delete_scripts(dir, &scopes)?;
            assert!(!dir.join("horse").exists());
            assert!(dir.join("pegasus").exists());
            Ok(())
        })
    }

    #[test]
    fn test_delete_scripts_without_scopes_removes_root() -> Result<(), MigrateError> {
        test::run_empty_dir_test(|dir| {
            let migrations = dir.join("migrations");
            materializer::create_file("horse", "", &migrations, false)?;
            materializer::delete_scripts(&migrations, &[])?;
            assert!(!migrations.exists());
            Ok(())
        })
    }
}
