use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::domain::AppError;
use crate::ports::PublicationStore;

/// Filesystem-based publication store.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemPublicationStore;

impl FilesystemPublicationStore {
    pub fn new() -> Self {
        Self
    }
}

impl PublicationStore for FilesystemPublicationStore {
    fn ensure_dir(&self, path: &Path) -> Result<bool, AppError> {
        if path.is_dir() {
            return Ok(false);
        }
        fs::create_dir_all(path).map_err(|e| AppError::path(path, e))?;
        Ok(true)
    }

    fn ensure_file(&self, path: &Path, initial: &str) -> Result<bool, AppError> {
        let file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                if path.is_file() {
                    return Ok(false);
                }
                return Err(AppError::path(path, e));
            }
            Err(e) => return Err(AppError::path(path, e)),
        };

        write_new_file(file, path, initial)?;
        Ok(true)
    }
}

/// Write `initial` into a freshly created file. The file is removed again if
/// the write fails.
fn write_new_file<W: Write>(mut writer: W, path: &Path, initial: &str) -> Result<(), AppError> {
    if let Err(e) = writer.write_all(initial.as_bytes()).and_then(|()| writer.flush()) {
        drop(writer);
        if let Err(cleanup) = fs::remove_file(path) {
            log::warn!("could not remove partial file {}: {}", path.display(), cleanup);
        }
        return Err(AppError::path(path, e));
    }
    Ok(())
}
