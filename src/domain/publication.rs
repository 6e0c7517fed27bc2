use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;

use super::{AppError, OutputFormat, PublicationLayout, PublicationTitle};

/// Options controlling what a publication provisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PublicationOptions {
    /// Create the definitions file.
    #[serde(default = "default_write_defs")]
    pub write_defs: bool,
    /// Convention for the definitions file.
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for PublicationOptions {
    fn default() -> Self {
        Self { write_defs: default_write_defs(), format: OutputFormat::default() }
    }
}

fn default_write_defs() -> bool {
    true
}

/// A publication rooted under a kallysto workspace.
///
/// Holds the title, root and options, and resolves every managed path.
/// Values returned by [`crate::create_publication`] have been provisioned on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publication {
    title: PublicationTitle,
    kallysto_path: PathBuf,
    options: PublicationOptions,
    layout: PublicationLayout,
}

impl Publication {
    /// Resolve the paths for a publication without touching the filesystem.
    pub fn plan(
        title: &str,
        kallysto_path: impl Into<PathBuf>,
        options: PublicationOptions,
    ) -> Result<Self, AppError> {
        let title = PublicationTitle::new(title)?;
        let layout = PublicationLayout::new(&title, options.format);
        Ok(Self { title, kallysto_path: kallysto_path.into(), options, layout })
    }

    pub fn title(&self) -> &PublicationTitle {
        &self.title
    }

    pub fn kallysto_path(&self) -> &Path {
        &self.kallysto_path
    }

    pub fn write_defs(&self) -> bool {
        self.options.write_defs
    }

    pub fn format(&self) -> OutputFormat {
        self.options.format
    }

    /// Managed paths relative to [`Publication::kallysto_path`].
    pub fn layout(&self) -> &PublicationLayout {
        &self.layout
    }

    /// Absolute form of a path from [`Publication::layout`].
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.kallysto_path.join(relative)
    }

    pub fn pub_path(&self) -> PathBuf {
        self.resolve(&self.layout.pub_dir)
    }

    pub fn data_path(&self) -> PathBuf {
        self.resolve(&self.layout.data_dir)
    }

    pub fn figs_path(&self) -> PathBuf {
        self.resolve(&self.layout.figs_dir)
    }

    pub fn defs_path(&self) -> PathBuf {
        self.resolve(&self.layout.defs_dir)
    }

    pub fn logs_path(&self) -> PathBuf {
        self.resolve(&self.layout.logs_dir)
    }

    pub fn src_path(&self) -> PathBuf {
        self.resolve(&self.layout.src_dir)
    }

    pub fn logs_file(&self) -> PathBuf {
        self.resolve(&self.layout.logs_file)
    }

    /// Location of the definitions file. Only present on disk when
    /// [`Publication::write_defs`] is set.
    pub fn defs_file(&self) -> PathBuf {
        self.resolve(&self.layout.defs_file)
    }

    /// Initial line written to a new log file.
    pub fn log_header(&self, now: DateTime<Utc>) -> String {
        format!(
            "{} publication \"{}\" initialised (format={}, write_defs={})\n",
            now.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.title.single_line(),
            self.format(),
            self.write_defs()
        )
    }

    /// Initial content written to a new definitions file.
    pub fn defs_header(&self) -> String {
        self.format().comment(&format!("Kallysto definitions for \"{}\"", self.title))
    }
}
