//! Failures raised while orchestrating through the ports: copy aborts,
//! manifest I/O, filesystem trouble. Business-rule violations live in
//! `crate::domain` instead.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Copy/substitution aborted mid-walk. Files already written remain in
    /// place; `path` names the entry that could not be processed.
    #[error("materialization failed at {path}: {reason}")]
    Materialization { path: PathBuf, reason: String },

    /// Filesystem operation outside the materialization walk failed.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// A dependency declaration or the project manifest could not be read,
    /// or the manifest could not be written back.
    #[error("dependency merge failed at {path}: {reason}")]
    ManifestMerge { path: PathBuf, reason: String },

    /// Target directory for a new project already exists.
    #[error("project already exists at {path}")]
    ProjectExists { path: PathBuf },
}

impl ApplicationError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Materialization { path, .. } => vec![
                format!("Could not process: {}", path.display()),
                "Files copied before the failure were left in place".into(),
                "Check read permissions on the templates directory".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Could not access: {}", path.display()),
                "Verify write permissions on the project directory".into(),
            ],
            Self::ManifestMerge { path, .. } => vec![
                format!("Could not update: {}", path.display()),
                "The template files themselves were added successfully".into(),
                "Add the template's dependencies to package.json by hand".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Materialization { .. } | Self::Filesystem { .. } | Self::ManifestMerge { .. } => {
                ErrorCategory::Internal
            }
            Self::ProjectExists { .. } => ErrorCategory::Validation,
        }
    }
}
