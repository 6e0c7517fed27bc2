//! Publication paths relative to the kallysto root.

use std::path::{Path, PathBuf};

use super::{OutputFormat, PublicationTitle};

/// `<title>/data`
pub const DATA_DIR: &str = "data";
/// `<title>/figs`
pub const FIGS_DIR: &str = "figs";
/// `<title>/defs`
pub const DEFS_DIR: &str = "defs";
/// `<title>/logs`
pub const LOGS_DIR: &str = "logs";
/// `<title>/src`
pub const SRC_DIR: &str = "src";

/// Suffix appended to the title stem for the definitions file.
pub const DEFS_SUFFIX: &str = "_definitions";

/// File extension of the log file.
pub const LOG_EXTENSION: &str = "log";

// ── Directories ────────────────────────────────────────────────────────

/// `<title>/`
pub fn pub_dir(title: &PublicationTitle) -> PathBuf {
    PathBuf::from(title.dir_name())
}

/// `<title>/<name>/`
pub fn sub_dir(title: &PublicationTitle, name: &str) -> PathBuf {
    pub_dir(title).join(name)
}

// ── Files ──────────────────────────────────────────────────────────────

/// `<title>/logs/<title>.log`
pub fn logs_file(title: &PublicationTitle) -> PathBuf {
    sub_dir(title, LOGS_DIR).join(format!("{}.{}", title.dir_name(), LOG_EXTENSION))
}

/// `<title>/defs/<title>_definitions.<tex|md>`
pub fn defs_file(title: &PublicationTitle, format: OutputFormat) -> PathBuf {
    sub_dir(title, DEFS_DIR).join(format!(
        "{}{}.{}",
        title.dir_name(),
        DEFS_SUFFIX,
        format.extension()
    ))
}

/// Every path a publication manages, relative to the kallysto root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationLayout {
    pub pub_dir: PathBuf,
    pub data_dir: PathBuf,
    pub figs_dir: PathBuf,
    pub defs_dir: PathBuf,
    pub logs_dir: PathBuf,
    pub src_dir: PathBuf,
    pub logs_file: PathBuf,
    pub defs_file: PathBuf,
}

impl PublicationLayout {
    pub fn new(title: &PublicationTitle, format: OutputFormat) -> Self {
        Self {
            pub_dir: pub_dir(title),
            data_dir: sub_dir(title, DATA_DIR),
            figs_dir: sub_dir(title, FIGS_DIR),
            defs_dir: sub_dir(title, DEFS_DIR),
            logs_dir: sub_dir(title, LOGS_DIR),
            src_dir: sub_dir(title, SRC_DIR),
            logs_file: logs_file(title),
            defs_file: defs_file(title, format),
        }
    }

    /// Directories in creation order, parent first.
    pub fn directories(&self) -> [&Path; 6] {
        [
            &self.pub_dir,
            &self.data_dir,
            &self.figs_dir,
            &self.defs_dir,
            &self.logs_dir,
            &self.src_dir,
        ]
    }
}
