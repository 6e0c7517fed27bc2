//! Shared testing utilities for kallysto tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use kallysto::{AppError, Publication, PublicationOptions};

/// Testing harness providing an isolated working directory and kallysto root.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Directory used as the current directory for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Kallysto root used by library calls. Not created up front.
    pub fn kallysto_path(&self) -> PathBuf {
        self.root.path().join("kallysto")
    }

    /// Build a command for invoking the compiled `kallysto` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("kallysto").expect("Failed to locate kallysto binary");
        cmd.current_dir(&self.work_dir).env_remove("KALLYSTO_PATH").env_remove("RUST_LOG");
        cmd
    }

    /// Create a publication under [`TestContext::kallysto_path`].
    pub fn create(&self, title: &str, options: PublicationOptions) -> Result<Publication, AppError> {
        kallysto::create_publication(title, self.kallysto_path(), options)
    }

    /// Write a file into the work directory.
    pub fn write_work_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write work file");
        path
    }

    /// Assert that the publication directory and its five subdirectories exist.
    pub fn assert_tree_exists(&self, publication: &Publication) {
        assert!(publication.pub_path().is_dir(), "pub_path should be a directory");
        for dir in [
            publication.data_path(),
            publication.figs_path(),
            publication.defs_path(),
            publication.logs_path(),
            publication.src_path(),
        ] {
            assert!(dir.is_dir(), "{} should be a directory", dir.display());
        }
    }

    /// Assert the tree exists at a raw location, independent of the library.
    pub fn assert_tree_at(&self, pub_path: &Path) {
        for name in ["data", "figs", "defs", "logs", "src"] {
            let dir = pub_path.join(name);
            assert!(dir.is_dir(), "{} should be a directory", dir.display());
        }
    }
}
