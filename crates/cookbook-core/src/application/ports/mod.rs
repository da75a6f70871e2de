//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the outside world.
//! The `cookbook-adapters` crate provides the production implementations;
//! tests substitute stubs or mocks.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::{
    PlaceholderContext, ProjectManifest, RegistryListing, TemplateDependencies,
    TemplateDescriptor, TemplateKind,
};
use crate::error::CookbookResult;

/// Port for template discovery.
///
/// Implemented by:
/// - `cookbook_adapters::FsTemplateStore` (templates directory on disk)
pub trait TemplateStore: Send + Sync {
    /// Find a template by name.
    ///
    /// With a `kind` hint only that category is consulted. Without one,
    /// categories are checked in [`TemplateKind::RESOLUTION_ORDER`] and the
    /// first hit wins.
    fn locate(
        &self,
        name: &str,
        kind: Option<TemplateKind>,
    ) -> CookbookResult<TemplateDescriptor>;

    /// Enumerate every known template, for `list` and for not-found output.
    ///
    /// Infallible by contract: an unreadable registry index degrades to a
    /// directory listing inside the implementation.
    fn listing(&self) -> RegistryListing;

    /// The template's declared dependency sets, if it ships a declaration.
    fn dependencies(
        &self,
        descriptor: &TemplateDescriptor,
    ) -> CookbookResult<Option<TemplateDependencies>>;
}

/// Port for copying a template tree into a project.
///
/// Implemented by:
/// - `cookbook_adapters::FsMaterializer`
pub trait Materializer: Send + Sync {
    /// Recursively copy `source` into `dest`, substituting placeholders in
    /// template-marked files. Existing destination files are overwritten.
    fn materialize(
        &self,
        source: &Path,
        dest: &Path,
        context: &PlaceholderContext,
    ) -> CookbookResult<MaterializeStats>;
}

/// Port for reading and writing the project manifest.
///
/// Implemented by:
/// - `cookbook_adapters::JsonManifestStore`
pub trait ManifestStore: Send + Sync {
    fn load(&self, path: &Path) -> CookbookResult<ProjectManifest>;

    fn save(&self, path: &Path, manifest: &ProjectManifest) -> CookbookResult<()>;
}

/// Port for the external package-manager install.
///
/// Implemented by:
/// - `cookbook_adapters::ProcessInstaller` (spawns the real package manager)
///
/// The error type is deliberately separate from [`crate::error::CookbookError`]:
/// install failures are advisory and must never propagate as a failure of the
/// add or init operation.
pub trait Installer: Send + Sync {
    /// Run the appropriate `<pm> install` in `project_dir`, streaming its
    /// output to the user. Blocks until the process exits; no timeout.
    fn install(&self, project_dir: &Path) -> Result<(), InstallError>;
}

/// Why an install attempt failed. Reported as a warning, never an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("'{command}' failed in {dir}: {reason}")]
pub struct InstallError {
    pub command: String,
    pub dir: PathBuf,
    pub reason: String,
}

/// What a materialization actually wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterializeStats {
    /// Files copied byte-for-byte.
    pub files_copied: usize,
    /// Files that went through placeholder substitution.
    pub files_rendered: usize,
    /// Directories created at the destination.
    pub dirs_created: usize,
}

impl MaterializeStats {
    pub fn files_written(&self) -> usize {
        self.files_copied + self.files_rendered
    }
}
