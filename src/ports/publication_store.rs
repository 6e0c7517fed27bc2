//! Storage port for publication provisioning.

use std::path::Path;

use crate::domain::AppError;

/// Port for the filesystem operations a publication needs.
///
/// All `path` arguments are absolute. Both `ensure_*` operations are
/// idempotent and report whether they created anything.
pub trait PublicationStore {
    /// Create a directory and its parents.
    ///
    /// Returns `false` if the directory already existed. Fails if the path
    /// exists but is not a directory.
    fn ensure_dir(&self, path: &Path) -> Result<bool, AppError>;

    /// Create a file containing `initial`, unless it already exists.
    ///
    /// Returns `false` and leaves the file untouched if it already existed.
    /// Fails if the path exists but is not a regular file. A file that was
    /// created but could not be fully written is removed again.
    fn ensure_file(&self, path: &Path, initial: &str) -> Result<bool, AppError>;
}
