//! kallysto: provision publication directories for reproducible research.
//!
//! A publication is a title-named tree under a kallysto root:
//!
//! ```text
//! <kallysto_path>/<title>/{data,figs,defs,logs,src}/
//! <kallysto_path>/<title>/logs/<title>.log
//! <kallysto_path>/<title>/defs/<title>_definitions.{tex,md}   (when write_defs)
//! ```

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use app::{AppContext, commands::create};
use services::FilesystemPublicationStore;

pub use app::commands::create::{ProvisionReport, ProvisionStatus};
pub use app::config::KallystoConfig;
pub use domain::{
    AppError, OutputFormat, Publication, PublicationLayout, PublicationOptions, PublicationTitle,
};

/// Create a publication, provisioning its directories and initial files.
///
/// Safe to call repeatedly for the same title and root: existing
/// directories and files are kept as they are.
pub fn create_publication(
    title: &str,
    kallysto_path: impl AsRef<Path>,
    options: PublicationOptions,
) -> Result<Publication, AppError> {
    provision_publication(title, kallysto_path, options).map(|(publication, _)| publication)
}

/// Like [`create_publication`], also returning what was created.
pub fn provision_publication(
    title: &str,
    kallysto_path: impl AsRef<Path>,
    options: PublicationOptions,
) -> Result<(Publication, ProvisionReport), AppError> {
    let publication = Publication::plan(title, kallysto_path.as_ref(), options)?;
    let ctx = AppContext::new(FilesystemPublicationStore::new());

    let report = create::execute(&ctx, &publication)?;
    Ok((publication, report))
}
