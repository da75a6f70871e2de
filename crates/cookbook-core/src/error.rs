//! The crate-level error type.
//!
//! [`CookbookError`] folds the domain and application errors into a single
//! enum so callers get one `Result` type, one `suggestions()` source, and
//! one category to map onto exit codes.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{self, DomainError};

pub type CookbookResult<T> = Result<T, CookbookError>;

#[derive(Debug, Error, Clone)]
pub enum CookbookError {
    /// Business-rule violation (bad name, missing template, bad manifest).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Orchestration or port I/O failure (copy, merge, filesystem).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

/// Classification shared with the CLI for styling and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

impl From<domain::ErrorCategory> for ErrorCategory {
    fn from(value: domain::ErrorCategory) -> Self {
        match value {
            domain::ErrorCategory::Validation => Self::Validation,
            domain::ErrorCategory::NotFound => Self::NotFound,
            domain::ErrorCategory::Internal => Self::Internal,
        }
    }
}

impl CookbookError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category().into(),
            Self::Application(e) => e.category(),
        }
    }
}
