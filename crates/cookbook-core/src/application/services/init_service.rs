//! Init Service - scaffolds a fresh indexer project.
//!
//! Reuses the materializer contract: the fixed `base-project` template is
//! rendered into a new directory with the chosen project name substituted,
//! then the installer runs as a best-effort step.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ports::{Installer, MaterializeStats, Materializer},
        services::add_service::InstallOutcome,
    },
    domain::PlaceholderContext,
    error::CookbookResult,
};

/// Result of a completed init operation.
#[derive(Debug, Clone)]
pub struct InitReport {
    pub project_dir: PathBuf,
    pub stats: MaterializeStats,
    pub install: InstallOutcome,
}

/// Project initialization service.
pub struct InitService {
    materializer: Box<dyn Materializer>,
    installer: Box<dyn Installer>,
}

impl InitService {
    pub fn new(materializer: Box<dyn Materializer>, installer: Box<dyn Installer>) -> Self {
        Self {
            materializer,
            installer,
        }
    }

    /// Materialize `base_template` into `project_dir`, substituting the
    /// project name, then trigger the installer.
    ///
    /// Install failure is advisory and lands in the report, never in the
    /// error channel.
    #[instrument(skip_all, fields(project = %project_name))]
    pub fn init(
        &self,
        base_template: &Path,
        project_name: &str,
        project_dir: &Path,
        skip_install: bool,
    ) -> CookbookResult<InitReport> {
        let context = PlaceholderContext::new(project_name);

        let stats = self
            .materializer
            .materialize(base_template, project_dir, &context)?;
        info!(
            files = stats.files_written(),
            dir = %project_dir.display(),
            "Project created"
        );

        let install = if skip_install {
            InstallOutcome::Skipped
        } else {
            match self.installer.install(project_dir) {
                Ok(()) => InstallOutcome::Completed,
                Err(e) => {
                    warn!(error = %e, "Install failed; project files are in place");
                    InstallOutcome::Failed(e)
                }
            }
        };

        Ok(InitReport {
            project_dir: project_dir.to_path_buf(),
            stats,
            install,
        })
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
