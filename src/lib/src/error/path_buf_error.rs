//! # PathBufError
//!
//! A path plus the reason an operation on it failed.
//!

use std::fmt;
use std::path::{Path, PathBuf};

pub struct PathBufError {
    pub path: PathBuf,
    pub reason: String,
}

impl PathBufError {
    pub fn new(path: impl AsRef<Path>, reason: impl AsRef<str>) -> Self {
        PathBufError {
            path: path.as_ref().to_path_buf(),
            reason: reason.as_ref().to_string(),
        }
    }
}

impl From<&Path> for PathBufError {
    fn from(path: &Path) -> Self {
        PathBufError::new(path, "")
    }
}

impl std::fmt::Display for PathBufError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.reason.is_empty() {
            write!(f, "{:?}", self.path)
        } else {
            write!(f, "{:?}: {}", self.path, self.reason)
        }
    }
}

impl std::fmt::Debug for PathBufError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl std::error::Error for PathBufError {}
