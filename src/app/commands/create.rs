use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::app::AppContext;
use crate::domain::{AppError, Publication};
use crate::ports::PublicationStore;

/// Whether a provisioning step created its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionStatus {
    Created,
    Existing,
}

impl ProvisionStatus {
    fn from_created(created: bool) -> Self {
        if created { ProvisionStatus::Created } else { ProvisionStatus::Existing }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProvisionStatus::Created => "created",
            ProvisionStatus::Existing => "exists",
        }
    }
}

/// What a provisioning run did, path by path, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisionReport {
    pub entries: Vec<(PathBuf, ProvisionStatus)>,
}

impl ProvisionReport {
    fn record(&mut self, path: PathBuf, created: bool) {
        self.entries.push((path, ProvisionStatus::from_created(created)));
    }

    /// Paths created by this run.
    pub fn created(&self) -> impl Iterator<Item = &Path> {
        self.entries
            .iter()
            .filter(|(_, status)| *status == ProvisionStatus::Created)
            .map(|(path, _)| path.as_path())
    }

    /// Paths that were already present.
    pub fn existing(&self) -> impl Iterator<Item = &Path> {
        self.entries
            .iter()
            .filter(|(_, status)| *status == ProvisionStatus::Existing)
            .map(|(path, _)| path.as_path())
    }

    /// Status recorded for `path`, if this run touched it.
    pub fn status_of(&self, path: &Path) -> Option<ProvisionStatus> {
        self.entries.iter().find(|(p, _)| p == path).map(|(_, status)| *status)
    }
}

/// Execute the create command.
///
/// Ensures the kallysto root, the publication tree and the log file exist,
/// and the definitions file when `write_defs` is set. Existing paths are
/// left untouched. Stops at the first failure.
pub fn execute<S>(
    ctx: &AppContext<S>,
    publication: &Publication,
) -> Result<ProvisionReport, AppError>
where
    S: PublicationStore,
{
    let store = ctx.store();
    let mut report = ProvisionReport::default();

    let root = publication.kallysto_path().to_path_buf();
    let created = store.ensure_dir(&root)?;
    report.record(root, created);

    for dir in publication.layout().directories() {
        let path = publication.resolve(dir);
        let created = store.ensure_dir(&path)?;
        if created {
            log::debug!("created directory {}", path.display());
        }
        report.record(path, created);
    }

    let logs_file = publication.logs_file();
    let created = store.ensure_file(&logs_file, &publication.log_header(Utc::now()))?;
    report.record(logs_file, created);

    if publication.write_defs() {
        let defs_file = publication.defs_file();
        let created = store.ensure_file(&defs_file, &publication.defs_header())?;
        report.record(defs_file, created);
    }

    log::info!(
        "provisioned publication \"{}\" under {} ({} created, {} existing)",
        publication.title(),
        publication.kallysto_path().display(),
        report.created().count(),
        report.existing().count()
    );

    Ok(report)
}
