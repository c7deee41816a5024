use std::fs;
use std::path::{Path, PathBuf};

use crate::constants;
use crate::error::MigrateError;

/// `$HOME/.config/ctfmigrate`
pub fn config_dir() -> Result<PathBuf, MigrateError> {
    match dirs::home_dir() {
        Some(home_dir) => Ok(home_dir
            .join(constants::CONFIG_DIR)
            .join(constants::CTF_MIGRATE)),
        None => Err(MigrateError::home_dir_not_found()),
    }
}

pub fn read_from_path(path: &Path) -> Result<String, MigrateError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents),
        Err(err) => {
            log::debug!("Could not read file {}: {}", path.display(), err);
            Err(MigrateError::IO(err))
        }
    }
}

pub fn write_to_path(path: &Path, value: &str) -> Result<(), MigrateError> {
    fs::write(path, value.as_bytes()).map_err(|err| {
        log::debug!("Could not write file {:?}: {}", path, err);
        MigrateError::IO(err)
    })
}

pub fn create_dir_all(path: impl AsRef<Path>) -> Result<(), MigrateError> {
    let path = path.as_ref();
    fs::create_dir_all(path).map_err(|err| {
        log::error!("create_dir_all {:?} failed: {}", path, err);
        MigrateError::IO(err)
    })
}

/// Removes a directory tree, treating an already missing directory as removed.
pub fn remove_dir_all(path: impl AsRef<Path>) -> Result<(), MigrateError> {
    let path = path.as_ref();
    match fs::remove_dir_all(path) {
        Ok(_) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("remove_dir_all {:?} already gone", path);
            Ok(())
        }
        Err(err) => {
            log::error!("remove_dir_all {:?} failed: {}", path, err);
            Err(MigrateError::IO(err))
        }
    }
}

/// Names of the immediate subdirectories of `dir`, sorted.
pub fn list_subdir_names(dir: &Path) -> Result<Vec<String>, MigrateError> {
    let mut names: Vec<String> = vec![];
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
    }
    names.sort();
    Ok(names)
}

/// Files directly inside `dir` ending in `.{extension}`, sorted by file name.
/// A missing directory has no files.
pub fn list_files_with_extension(
    dir: &Path,
    extension: &str,
) -> Result<Vec<PathBuf>, MigrateError> {
    if !dir.exists() {
        log::debug!("list_files_with_extension {:?} does not exist", dir);
        return Ok(vec![]);
    }

    let mut files: Vec<PathBuf> = vec![];
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

pub fn file_name_str(path: &Path) -> Result<String, MigrateError> {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .ok_or_else(|| MigrateError::basic_str(format!("File has no file_name: {path:?}")))
}
