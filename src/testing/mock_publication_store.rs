use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::PublicationStore;

/// In-memory publication store for testing.
#[derive(Default)]
#[allow(dead_code)]
pub struct MockPublicationStore {
    pub dirs: RefCell<BTreeSet<PathBuf>>,
    pub files: RefCell<BTreeMap<PathBuf, String>>,
    pub failing: RefCell<BTreeSet<PathBuf>>,
}

#[allow(dead_code)]
impl MockPublicationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every operation on `path` fail with `PermissionDenied`.
    pub fn fail_on(self, path: impl Into<PathBuf>) -> Self {
        self.failing.borrow_mut().insert(path.into());
        self
    }

    /// Record `path` and its ancestors as directories.
    pub fn insert_dir(&self, path: &Path) {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors().filter(|a| !a.as_os_str().is_empty()) {
            dirs.insert(ancestor.to_path_buf());
        }
    }

    pub fn insert_file(&self, path: &Path, content: &str) {
        self.files.borrow_mut().insert(path.to_path_buf(), content.to_string());
    }

    pub fn file_content(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path)
    }

    pub fn is_file(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn check_failing(&self, path: &Path) -> Result<(), AppError> {
        if self.failing.borrow().contains(path) {
            return Err(AppError::path(
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "mock failure"),
            ));
        }
        Ok(())
    }
}

impl PublicationStore for MockPublicationStore {
    fn ensure_dir(&self, path: &Path) -> Result<bool, AppError> {
        self.check_failing(path)?;
        if self.is_file(path) {
            return Err(AppError::path(
                path,
                io::Error::new(io::ErrorKind::AlreadyExists, "file exists"),
            ));
        }
        if self.is_dir(path) {
            return Ok(false);
        }
        self.insert_dir(path);
        Ok(true)
    }

    fn ensure_file(&self, path: &Path, initial: &str) -> Result<bool, AppError> {
        self.check_failing(path)?;
        if self.is_dir(path) {
            return Err(AppError::path(
                path,
                io::Error::new(io::ErrorKind::AlreadyExists, "directory exists"),
            ));
        }
        if self.is_file(path) {
            return Ok(false);
        }
        if let Some(parent) = path.parent()
            && !self.is_dir(parent)
        {
            return Err(AppError::path(
                path,
                io::Error::new(io::ErrorKind::NotFound, "parent directory missing"),
            ));
        }
        self.insert_file(path, initial);
        Ok(true)
    }
}
