//! Domain-level errors.

use std::path::PathBuf;
use thiserror::Error;

/// Business-rule failures. Cloneable so callers can fold them into reports
/// and still re-raise them.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The working directory has no `package.json`; `add` refuses to run.
    #[error("not a valid project directory: no package.json in {dir}")]
    NotInProject { dir: PathBuf },

    /// The name matched neither category (with or without a hint).
    #[error("template \"{name}\" not found")]
    TemplateNotFound { name: String },

    /// A category string that is neither `pipe` nor `module`.
    #[error("unknown template kind '{value}' (expected 'pipe' or 'module')")]
    UnknownKind { value: String },

    /// The project manifest could not be parsed as a JSON object.
    #[error("invalid project manifest: {reason}")]
    ManifestInvalid { reason: String },
}

impl DomainError {
    /// What the user can do about it.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotInProject { dir } => vec![
                format!("No package.json found in {}", dir.display()),
                "Run: cookbook init".into(),
            ],
            Self::TemplateNotFound { name } => vec![
                format!("No pipe or module is named \"{}\"", name),
                "Run: cookbook list".into(),
            ],
            Self::UnknownKind { .. } => vec![
                "Valid kinds are 'pipe' and 'module'".into(),
                "Example: cookbook add hono --type module".into(),
            ],
            Self::ManifestInvalid { reason } => vec![
                format!("package.json could not be parsed: {}", reason),
                "Fix the JSON syntax and try again".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotInProject { .. } | Self::UnknownKind { .. } => ErrorCategory::Validation,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::ManifestInvalid { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
